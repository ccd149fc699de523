use clap::Parser;

mod args;
pub mod exit_codes;
mod run;

use args::Cli;

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let cli = Cli::parse();
    let code = match run::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::GENERATION_FAILED
        }
    };
    std::process::exit(code);
}
