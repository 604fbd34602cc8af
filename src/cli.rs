//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config and the per-job options) are
//! accepted before or after the `auto` subcommand.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// bindata - embed asset trees into Rust source
#[derive(Parser, Debug)]
#[command(name = "bindata")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'bindata' without inputs to scan BINDATA_PATH (automatic mode).")]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./bindata.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub options: JobArgs,

    /// Output file (default: ./bindata.rs)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Module name of the generated code
    #[arg(long, value_name = "NAME")]
    pub pkg: Option<String>,

    /// Path prefix stripped from asset names
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Input directories; append `/...` to recurse
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options copied onto every job, in single and automatic mode alike.
#[derive(Args, Debug, Default, Clone)]
pub struct JobArgs {
    /// cfg predicate gating the generated module, e.g. `feature = "embed"`
    #[arg(long, global = true, value_name = "PREDICATE")]
    pub tags: Option<String>,

    /// Read assets from disk at run time instead of embedding them
    #[arg(long, global = true)]
    pub debug: bool,

    /// Borrow embedded bytes instead of copying them (with --no-compress)
    #[arg(long, global = true)]
    pub no_memcopy: bool,

    /// Embed raw bytes instead of gzip data
    #[arg(long, global = true)]
    pub no_compress: bool,

    /// Run rustfmt over the generated file
    #[arg(long, global = true)]
    pub fmt: bool,

    /// Regex of paths to skip (repeatable)
    #[arg(long, global = true, value_name = "REGEX")]
    pub ignore: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find asset/code directory pairs and generate one module per pair
    Auto {
        /// Workspace roots (default: workspace.roots or BINDATA_PATH)
        #[arg(value_name = "ROOT")]
        roots: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_inputs() {
        let cli = Cli::try_parse_from(["bindata"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.inputs.is_empty());
    }

    #[test]
    fn test_cli_parse_single_job() {
        let cli = Cli::try_parse_from([
            "bindata",
            "-o",
            "src/assets.rs",
            "--pkg",
            "web",
            "--prefix",
            "static",
            "--ignore",
            "\\.swp$",
            "--ignore",
            "~$",
            "static/...",
            "extra",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.output, Some(PathBuf::from("src/assets.rs")));
        assert_eq!(cli.pkg.as_deref(), Some("web"));
        assert_eq!(cli.prefix.as_deref(), Some("static"));
        assert_eq!(cli.options.ignore, vec!["\\.swp$", "~$"]);
        assert_eq!(cli.inputs, vec!["static/...", "extra"]);
    }

    #[test]
    fn test_cli_parse_auto_with_global_flags() {
        let cli =
            Cli::try_parse_from(["bindata", "--json", "auto", "--no-compress", "-vv", "/ws"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.options.no_compress);
        match cli.command {
            Some(Commands::Auto { roots }) => assert_eq!(roots, vec![PathBuf::from("/ws")]),
            other => panic!("Expected Auto command, got {other:?}"),
        }
    }
}
