mod cli;

use clap::Parser;

use cli::Args;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("args: {:?}", args);

    match cli::run(&args) {
        Ok(grid) => println!("{}", grid),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
