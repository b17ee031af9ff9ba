use clap::Parser;

mod cli;
mod exit_codes;
mod generate;

use cli::Cli;

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    // Keep clap's help/version exit status (0) while pinning argument errors
    // to the documented usage code.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() {
            exit_codes::USAGE_ERROR
        } else {
            exit_codes::SUCCESS
        };
        let _ = e.print();
        std::process::exit(code);
    });
    let code = match generate::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("fatal: {e:?}");
            exit_codes::GENERATION_FAILED
        }
    };
    std::process::exit(code);
}
