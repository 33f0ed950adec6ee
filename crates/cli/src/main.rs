use std::process::ExitCode;

use clap::Parser;
use flexparams_core::error::{Error, Result};
use flexparams_core::normalize::normalize;
use flexparams_core::registry::Registry;
use flexparams_core::value::Value;
use flexparams_core::{config, file_handling};
use itertools::Itertools;
use log::{debug, warn};

use flexparams_cli::arguments::{process_command_line, SpecProvider};
use flexparams_cli::cli_args::Args;
use flexparams_cli::output::render_yaml;

/// Load operation definitions and dispatch the arguments to `operation_id`
fn run_operation(args: &Args, operation_id: &str, source: &[Value]) -> Result<String> {
    let config_path = config::get_config_path(args.config_path.as_deref());
    debug!("Config path: `{config_path}`");

    let definitions = file_handling::get_operation_definitions(&config_path)?;
    let registry = Registry::from_definitions(&definitions);

    let result = registry.call(operation_id, source);
    if let Err(Error::OperationNotFound(_)) = &result {
        warn!("Known operations: {}", registry.ids().join(", "));
    }
    result
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let source = process_command_line(args.input.as_deref(), &args.arguments)?;
    debug!("Raw arguments: {source:?}");

    if let Some(operation_id) = &args.operation {
        let ignored = args.normalization_flags();
        if !ignored.is_empty() {
            warn!(
                "Operation `{operation_id}` uses its own settings, ignoring {}",
                ignored.join(", ")
            );
        }
        println!("{}", run_operation(&args, operation_id, &source)?);
        return Ok(());
    }

    let normalized = normalize(&source, &args.parameter_spec(), args.shape.into());
    print!("{}", render_yaml(&normalized)?);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
