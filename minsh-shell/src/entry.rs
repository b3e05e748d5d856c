//! Implements the command-line interface for the `minsh` interpreter.

use clap::Parser;
use minsh_core::Interpreter;
use std::io::IsTerminal;

use crate::args::CommandLineArgs;
use crate::interactive::InteractiveShell;
use crate::{ShellError, config, events, productinfo, tokenizer};

/// Main entry point for the `minsh` interpreter.
pub fn run() {
    install_panic_handler();

    let parsed_args = match CommandLineArgs::try_parse() {
        Ok(parsed_args) => parsed_args,
        Err(e) => {
            let _ = e.print();

            // clap reports `--help` and `--version` as errors too.
            let exit_code = match e.kind() {
                clap::error::ErrorKind::DisplayVersion | clap::error::ErrorKind::DisplayHelp => 0,
                _ => 1,
            };

            std::process::exit(exit_code);
        }
    };

    let exit_code = match run_with_args(&parsed_args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("error: {err:#}");
            1
        }
    };

    std::process::exit(i32::from(exit_code));
}

fn install_panic_handler() {
    //
    // Set up panic handler. On release builds, it will capture panic details to a
    // temporary .toml file and report a human-readable message to the screen.
    //
    human_panic::setup_panic!(
        human_panic::Metadata::new(productinfo::PRODUCT_NAME, productinfo::PRODUCT_VERSION)
            .homepage(productinfo::PRODUCT_REPO)
            .support("please file an issue in the project's repository")
    );
}

/// Runs the interpreter with already-parsed arguments. Returns the exit code.
///
/// # Arguments
///
/// * `args` - The parsed command-line arguments.
pub fn run_with_args(args: &CommandLineArgs) -> Result<u8, ShellError> {
    let loaded = config::load_config(args.no_config, args.config_file.as_deref());

    events::init(&loaded.config.trace_events(args));
    tracing::debug!("{}", productinfo::get_product_display_str());

    if let Some(error) = loaded.error {
        let path = loaded.path.unwrap_or_default();
        if loaded.explicit_path {
            return Err(ShellError::ConfigError {
                path,
                source: error,
            });
        }
        tracing::warn!("ignoring config file {}: {error}", path.display());
    }

    let mut interpreter = Interpreter::new();
    interpreter.on_startup()?;

    if let Some(command) = &args.command {
        let tokens = tokenizer::tokenize(command);
        let status = interpreter.dispatch(&tokens);
        let shutdown_code = interpreter.on_shutdown();

        return Ok(if status.is_success() {
            shutdown_code
        } else {
            status.exit_code()
        });
    }

    let prompt = std::io::stdin()
        .is_terminal()
        .then(|| loaded.config.prompt(args));

    InteractiveShell::new(interpreter, std::io::stdin().lock(), prompt).run()
}
