use std::path::Path;
use std::time::Duration;

use bindata::config::ConfigWarning;
use bindata::{BindataError, Job};

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!("⚠ {w}");
        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// `ok\t<input>\t(<output>)\t<secs>s`, plus an indented error line on failure.
pub fn job_line(job: &Job, elapsed: Duration, error: Option<&BindataError>) -> String {
    let status = if error.is_some() { "fail" } else { "ok" };
    let mut line = format!(
        "{}\t{}\t({})\t{:.3}s",
        status,
        job.label().display(),
        job.output.display(),
        elapsed.as_secs_f64()
    );
    if let Some(err) = error {
        line.push_str(&format!("\n\terror: {}", err));
    }
    line
}

pub fn job_event(job: &Job, elapsed: Duration, error: Option<&BindataError>) -> serde_json::Value {
    serde_json::json!({
        "event": "job",
        "status": if error.is_some() { "fail" } else { "ok" },
        "package": job.package,
        "input": path_str(job.label()),
        "output": path_str(&job.output),
        "elapsed_secs": elapsed.as_secs_f64(),
        "error": error.map(|e| e.to_string()),
    })
}

fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
