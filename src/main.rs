use clap::Parser;
use snafu::ErrorCompat;

mod args;
mod feedback;

fn main() {
    let args = args::Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = feedback::run_analysis(&args) {
        eprintln!("An error occured {}", e);
        if let Some(bt) = ErrorCompat::backtrace(e.as_ref()) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
