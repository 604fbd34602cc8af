use anyhow::Result;
use bindata::config::Config;
use bindata::{generate, InputConfig, Job, JobOptions, RustEmitter, Rustfmt};

/// Command-line values for a single job; `None` falls back to config.
pub struct SingleJobArgs<'a> {
    pub inputs: &'a [String],
    pub output: Option<&'a std::path::Path>,
    pub pkg: Option<&'a str>,
    pub prefix: Option<&'a str>,
}

pub fn build_job(config: &Config, args: &SingleJobArgs<'_>, options: JobOptions) -> Job {
    let package = args.pkg.unwrap_or(&config.generate.package);
    let output = args
        .output
        .map(|p| p.to_path_buf())
        .or_else(|| config.generate.output.clone())
        .unwrap_or_default();
    let prefix = args.prefix.unwrap_or(&config.generate.prefix);

    args.inputs
        .iter()
        .map(|arg| InputConfig::parse(arg))
        .fold(Job::new(package, output), Job::with_input)
        .with_prefix(prefix)
        .with_options(options)
}

pub fn cmd_generate(job: Job, json: bool) -> Result<()> {
    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "generate",
            "package": job.package,
            "inputs": job.inputs.len(),
        }))?;
    }

    generate(&job, &RustEmitter::new(), &Rustfmt::new())?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "generate",
            "package": job.package,
        }))?;
    }
    Ok(())
}
