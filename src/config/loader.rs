//! Configuration loading and environment overrides

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::domain::value_objects::ConfigWarning;
use crate::error::{BindataError, BindataResult};
use crate::infrastructure::fs::split_path_list;

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "bindata.toml";

/// Path list searched by automatic mode
pub const ROOTS_ENV_VAR: &str = "BINDATA_PATH";

/// Load configuration and collect unknown-key warnings
pub fn load_with_warnings(path: &Path) -> BindataResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BindataError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BindataError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the first config found: explicit path, project file, user file, defaults.
///
/// An explicit path must exist. The project file is looked up in `cwd`.
pub fn load_layered(
    explicit: Option<&Path>,
    cwd: &Path,
) -> BindataResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let project_config = cwd.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        return load_with_warnings(&project_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.is_file() {
            return load_with_warnings(&user_config);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// `<config_dir>/bindata/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bindata").join("config.toml"))
}

/// Apply environment variable overrides (BINDATA_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
}

pub(super) fn apply_env(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // BINDATA_PATH (platform path-list separator)
    if let Some(list) = var(ROOTS_ENV_VAR) {
        let roots = split_path_list(OsStr::new(&list));
        if !roots.is_empty() {
            config.workspace.roots = roots;
        }
    }

    if let Some(tags) = var("BINDATA_TAGS") {
        config.generate.tags = tags;
    }

    if let Some(val) = var("BINDATA_DEBUG") {
        config.generate.debug = env_flag(&val);
    }
    if let Some(val) = var("BINDATA_NO_COMPRESS") {
        config.generate.no_compress = env_flag(&val);
    }
    if let Some(val) = var("BINDATA_NO_MEMCOPY") {
        config.generate.no_memcopy = env_flag(&val);
    }
    if let Some(val) = var("BINDATA_FMT") {
        config.generate.fmt = env_flag(&val);
    }

    config
}

fn env_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generate",
        "workspace",
        "package",
        "output",
        "prefix",
        "tags",
        "debug",
        "no_memcopy",
        "no_compress",
        "fmt",
        "ignore",
        "roots",
        "assets_dir",
        "code_dir",
        "output_name",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
