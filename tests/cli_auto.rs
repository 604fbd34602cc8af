//! Automatic mode: `bindata` with no inputs, or `bindata auto [ROOT]...`

mod common;

use common::{write_file, TestEnv};
use std::fs;
use std::path::Path;

/// Two matched packages under `web/`: `site` and `admin`.
fn two_package_workspace(root: &Path) {
    write_file(root, "assets/web/site/index.html", "<h1>site</h1>");
    write_file(root, "assets/web/site/css/site.css", "body {}");
    write_file(root, "assets/web/admin/app.js", "main()");
    fs::create_dir_all(root.join("code/web/site")).unwrap();
    fs::create_dir_all(root.join("code/web/admin")).unwrap();
}

#[test]
fn test_auto_from_bindata_path() {
    let env = TestEnv::new();
    let ws = tempfile::tempdir().unwrap();
    two_package_workspace(ws.path());

    let path = ws.path().to_string_lossy().into_owned();
    let result = env.run_with_env(&[], &[("BINDATA_PATH", &path)]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let ok_lines: Vec<&str> = result.stdout.lines().filter(|l| l.starts_with("ok\t")).collect();
    assert_eq!(ok_lines.len(), 2, "stdout:\n{}", result.stdout);

    let site = fs::read_to_string(ws.path().join("code/web/site/bindata.rs")).unwrap();
    assert!(site.contains("module `site`"));
    assert!(site.contains("\"index.html\""));
    assert!(site.contains("\"css/site.css\""));

    let admin = fs::read_to_string(ws.path().join("code/web/admin/bindata.rs")).unwrap();
    assert!(admin.contains("module `admin`"));
    assert!(admin.contains("\"app.js\""));
}

#[test]
fn test_auto_subcommand_with_explicit_root() {
    let env = TestEnv::new();
    let ws = tempfile::tempdir().unwrap();
    two_package_workspace(ws.path());

    let root = ws.path().to_string_lossy().into_owned();
    let result = env.run(&["auto", "--no-compress", &root]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let site = fs::read_to_string(ws.path().join("code/web/site/bindata.rs")).unwrap();
    assert!(site.contains("Ok(Cow::Owned(DATA_INDEX_HTML.to_vec()))"));
}

#[test]
fn test_auto_one_failure_does_not_stop_others() {
    let env = TestEnv::new();
    let ws = tempfile::tempdir().unwrap();
    two_package_workspace(ws.path());
    // output path occupied by a directory
    fs::create_dir_all(ws.path().join("code/web/admin/bindata.rs")).unwrap();

    let root = ws.path().to_string_lossy().into_owned();
    let result = env.run(&["auto", &root]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);

    let fail_lines = result.stdout.lines().filter(|l| l.starts_with("fail\t")).count();
    let ok_lines = result.stdout.lines().filter(|l| l.starts_with("ok\t")).count();
    assert_eq!(fail_lines, 1, "stdout:\n{}", result.stdout);
    assert_eq!(ok_lines, 1, "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("\terror: output path"));
    assert!(ws.path().join("code/web/site/bindata.rs").is_file());
}

#[test]
fn test_auto_no_matches_is_error() {
    let env = TestEnv::new();
    let ws = tempfile::tempdir().unwrap();
    fs::create_dir_all(ws.path().join("assets")).unwrap();
    fs::create_dir_all(ws.path().join("code")).unwrap();

    let root = ws.path().to_string_lossy().into_owned();
    let result = env.run(&["auto", &root]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("no matching asset directories"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_auto_without_roots_is_error() {
    let env = TestEnv::new();

    let result = env.run(&[]);
    assert!(!result.success);
    assert!(result.stderr.contains("BINDATA_PATH"), "stderr:\n{}", result.stderr);
}

#[test]
fn test_auto_workspace_layout_from_config() {
    let env = TestEnv::new();
    let ws = tempfile::tempdir().unwrap();
    write_file(ws.path(), "res/ui/logo.svg", "<svg/>");
    fs::create_dir_all(ws.path().join("src/ui")).unwrap();

    env.write(
        "bindata.toml",
        &format!(
            "[workspace]\nroots = [{:?}]\nassets_dir = \"res\"\ncode_dir = \"src\"\noutput_name = \"embedded.rs\"\n",
            ws.path().to_string_lossy()
        ),
    );

    let result = env.run(&[]);
    assert!(result.success, "stderr:\n{}", result.stderr);
    let generated = fs::read_to_string(ws.path().join("src/ui/embedded.rs")).unwrap();
    assert!(generated.contains("\"logo.svg\""));
}

#[test]
fn test_auto_json_reports_each_job() {
    let env = TestEnv::new();
    let ws = tempfile::tempdir().unwrap();
    two_package_workspace(ws.path());

    let root = ws.path().to_string_lossy().into_owned();
    let result = env.run(&["--json", "auto", &root]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let jobs: Vec<_> = events.iter().filter(|e| e["event"] == "job").collect();
    assert_eq!(jobs.len(), 2);
    assert!(jobs.iter().all(|e| e["status"] == "ok"));
    assert_eq!(events.last().unwrap()["success"], true);
}
