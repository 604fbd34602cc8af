//! bindata CLI - embed asset trees into Rust source
//!
//! Usage:
//!   bindata [OPTIONS] <INPUT>...   generate one module (INPUT/... recurses)
//!   bindata [OPTIONS] auto [ROOT]  generate one module per assets/code pair
//!   bindata [OPTIONS]              same as `auto` over BINDATA_PATH

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::generate::SingleJobArgs;

fn main() {
    let cli = Cli::parse();
    bindata::logging::init(cli.verbose, cli.json);

    let json = cli.json;
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            if json {
                let _ = ui::json::emit(serde_json::json!({
                    "event": "error",
                    "message": format!("{e:#}"),
                }));
            } else {
                eprintln!("Error: {e:#}");
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = commands::load_config(cli.config.as_deref())?;
    let options = commands::job_options(&config, &cli.options)?;

    match cli.command {
        Some(Commands::Auto { roots }) => {
            let roots = commands::auto::resolve_roots(roots, &config)?;
            commands::auto::cmd_auto(&roots, &config, &options, cli.json)
        }
        None if cli.inputs.is_empty() => {
            let roots = commands::auto::resolve_roots(Vec::new(), &config)?;
            commands::auto::cmd_auto(&roots, &config, &options, cli.json)
        }
        None => {
            let args = SingleJobArgs {
                inputs: &cli.inputs,
                output: cli.output.as_deref(),
                pkg: cli.pkg.as_deref(),
                prefix: cli.prefix.as_deref(),
            };
            let job = commands::generate::build_job(&config, &args, options);
            commands::generate::cmd_generate(job, cli.json)?;
            Ok(true)
        }
    }
}
