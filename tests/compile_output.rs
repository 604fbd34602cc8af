//! Generated modules must type-check.
//!
//! Each test emits a module and runs `rustc --emit metadata` over it. The
//! compressed mode is left out because it links against flate2.

mod common;

use std::path::Path;
use std::process::Command;

use bindata::{generate, InputConfig, Job, JobOptions, NoFormat, RustEmitter};
use common::write_file;

fn fixture_tree(root: &Path) {
    write_file(root, "quote.txt", "say \"hi\"\n\\n is not a newline\r\n");
    write_file(root, "type", "keyword-named asset");
    write_file(root, "empty.txt", "");
    write_file(root, "nested/dir/page.html", "<p>{}</p>\n");
    write_file(root, "nested/été.txt", "non-ascii name");
    std::fs::write(root.join("bytes.bin"), [0u8, 0xff, b'"', b'\\', 0x7f, 0xc3]).unwrap();
}

fn emit(options: JobOptions) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets");
    fixture_tree(&assets);
    let output = dir.path().join("out/bindata.rs");

    let job = Job::new("embedded", &output)
        .with_input(InputConfig::new(&assets, true))
        .with_prefix(assets.to_string_lossy())
        .with_options(options);
    generate(&job, &RustEmitter::new(), &NoFormat).unwrap();

    (dir, output)
}

fn assert_compiles(dir: &Path, module: &Path) {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let out = Command::new(rustc)
        .args(["--edition", "2021", "--crate-type", "lib", "--emit", "metadata"])
        .args(["--cfg", "feature=\"embed\""])
        .arg("-o")
        .arg(dir.join("out.rmeta"))
        .arg(module)
        .output()
        .expect("run rustc");

    assert!(
        out.status.success(),
        "generated module failed to compile:\n{}\n--- source ---\n{}",
        String::from_utf8_lossy(&out.stderr),
        std::fs::read_to_string(module).unwrap_or_default()
    );
}

#[test]
fn test_uncompressed_module_compiles() {
    let (dir, output) = emit(JobOptions {
        no_compress: true,
        tags: "feature = \"embed\"".to_string(),
        ..Default::default()
    });
    assert_compiles(dir.path(), &output);
}

#[test]
fn test_borrowed_module_compiles() {
    let (dir, output) = emit(JobOptions {
        no_compress: true,
        no_memcopy: true,
        ..Default::default()
    });
    assert_compiles(dir.path(), &output);
}

#[test]
fn test_debug_module_compiles() {
    let (dir, output) = emit(JobOptions {
        debug: true,
        tags: "feature = \"embed\"".to_string(),
        ..Default::default()
    });
    assert_compiles(dir.path(), &output);
}
