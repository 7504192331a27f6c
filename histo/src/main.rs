use clap::Parser;
use histo::args::Args;
use histo::config::Config;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let mut drain = match histo::logging::configure(args.log_level) {
        Ok(drain) => drain,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from(args);

    let result = histo::input::open(config.input.as_deref())
        .and_then(|input| histo::run(&config, input, &mut io::stdout().lock()));

    let mut code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    };

    if let Err(e) = histo::logging::flush(drain.as_mut()) {
        eprintln!("error: {e:#}");
        code = ExitCode::FAILURE;
    }

    code
}
