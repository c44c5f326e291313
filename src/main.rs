//! gotemplater CLI entry point
//!
//! Parses the arguments, sets up logging, runs the render pipeline and turns
//! any failure into a readable message on stderr with exit code 1.

use gotemplater::cli::{self, Cli};
use gotemplater::core::error::user_friendly_error;

fn main() {
    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            if let Err(e) = Cli::print_help() {
                user_friendly_error(e.into()).display();
                std::process::exit(1);
            }
            return;
        }
        Err(err) => match cli::unrecognized_flag(&err) {
            Some(error) => {
                user_friendly_error(error.into()).display();
                std::process::exit(1);
            }
            // Help, version and usage errors keep clap's own output and exit code
            None => err.exit(),
        },
    };

    cli.build_config().init_logging();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
