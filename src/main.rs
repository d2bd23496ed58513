use std::process;
use std::sync::Arc;

use scriptkit::args::{parse_args, ParseOutcome};
use scriptkit::cli_bin::script_body;
use scriptkit::logger::Logger;
use scriptkit::usage::{program_name, usage};
use scriptkit::{hooks, runner, VERSION};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Hooks cover the whole run, including the parse/help/version paths, so
    // they are wired before anything else; verbosity is toggled once known.
    let logger = Arc::new(Logger::new(false));
    hooks::install(&logger);

    let options = match parse_args(std::env::args().skip(1)) {
        ParseOutcome::Run(options) => options,
        ParseOutcome::Version => {
            println!("{VERSION}");
            process::exit(runner::EXIT_SUCCESS);
        }
        ParseOutcome::Unknown(token) => {
            eprintln!("Unknown option: {token}");
            eprintln!("{}", usage(&program_name()));
            process::exit(runner::EXIT_FAILURE);
        }
    };

    if options.help {
        println!("{}", usage(&program_name()));
        process::exit(runner::EXIT_SUCCESS);
    }

    logger.set_verbose(options.verbose);
    // A second global logger can only come from a replaced body; direct
    // Logger calls keep working either way.
    Logger::install(&logger).ok();

    let code = runner::run(&logger, || script_body(&logger)).await;
    process::exit(code);
}
