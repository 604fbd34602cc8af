pub mod auto;
pub mod generate;

use std::path::Path;

use anyhow::Result;
use bindata::config::{self, Config};
use bindata::{IgnorePatterns, JobOptions};

use crate::cli::JobArgs;
use crate::ui::output::print_config_warnings;

/// Layered config: file (explicit, project, user), then `BINDATA_*`.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = config::load_layered(explicit, &cwd)?;
    print_config_warnings(&warnings);
    Ok(config::with_env_overrides(config))
}

/// Config options with command-line flags layered on top.
pub fn job_options(config: &Config, args: &JobArgs) -> Result<JobOptions> {
    let mut options = config.job_options()?;

    if let Some(tags) = &args.tags {
        options.tags = tags.clone();
    }
    options.debug |= args.debug;
    options.no_memcopy |= args.no_memcopy;
    options.no_compress |= args.no_compress;
    options.fmt |= args.fmt;
    options.ignore.extend(&IgnorePatterns::new(&args.ignore)?);

    Ok(options)
}
