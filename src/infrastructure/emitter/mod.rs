//! Rust source emitter
//!
//! Renders a table of contents into one Rust module:
//!
//! 1. header (generated-code marker, module doc, optional `#![cfg(..)]`)
//! 2. one accessor per asset, embedded (release) or read from disk (debug)
//! 3. lookup table: `asset(name)` and `asset_names()`
//!
//! Accessors return `io::Result<Cow<'static, [u8]>>`. Compressed modules
//! need `flate2` in the consuming crate.

mod debug;
mod literal;
mod release;

use std::collections::hash_map::{Entry, HashMap};
use std::io::Write;

use crate::domain::entities::{Asset, Job, Toc};
use crate::domain::ports::Emitter;
use crate::error::{BindataError, BindataResult};
use crate::infrastructure::fs::LocalFs;

pub use literal::{byte_literal, fn_ident, static_ident, str_literal};

/// First line of every generated file
pub const GENERATED_MARKER: &str = "// Code generated by bindata. DO NOT EDIT.";

/// Emitter writing Rust modules to the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter {
    fs: LocalFs,
}

impl RustEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the full module text without writing it.
    ///
    /// Fails before writing anything when two assets would define the same
    /// accessor or static.
    pub fn render(&self, job: &Job, toc: &Toc) -> BindataResult<Vec<u8>> {
        check_idents(toc)?;

        let mut out = Vec::new();
        let io = |source| BindataError::Emit {
            output: job.output.clone(),
            source,
        };

        write_header(&mut out, job, toc).map_err(io)?;
        if job.options.debug {
            debug::write_assets(&mut out, toc).map_err(io)?;
        } else {
            release::write_assets(&mut out, job, toc)?;
        }
        write_toc(&mut out, toc).map_err(io)?;
        Ok(out)
    }
}

impl Emitter for RustEmitter {
    fn emit(&self, job: &Job, toc: &Toc) -> BindataResult<()> {
        let content = self.render(job, toc)?;
        self.fs
            .write_atomic(&job.output, &content)
            .map_err(|source| BindataError::Emit {
                output: job.output.clone(),
                source,
            })
    }
}

fn check_idents(toc: &Toc) -> BindataResult<()> {
    let mut fns = HashMap::new();
    let mut statics = HashMap::new();
    for asset in toc {
        let func = asset.func().as_str();
        claim(&mut fns, fn_ident(func), asset)?;
        claim(&mut statics, static_ident(func), asset)?;
    }
    Ok(())
}

fn claim<'a>(
    seen: &mut HashMap<String, &'a Asset>,
    ident: String,
    asset: &'a Asset,
) -> BindataResult<()> {
    match seen.entry(ident) {
        Entry::Occupied(e) => Err(BindataError::IdentifierCollision {
            ident: e.key().clone(),
            first: e.get().name().to_string(),
            second: asset.name().to_string(),
        }),
        Entry::Vacant(e) => {
            e.insert(asset);
            Ok(())
        }
    }
}

fn write_header(out: &mut Vec<u8>, job: &Job, toc: &Toc) -> std::io::Result<()> {
    writeln!(out, "{GENERATED_MARKER}")?;
    writeln!(out, "// sources:")?;
    for asset in toc {
        writeln!(out, "// {}", asset.name().escape_debug())?;
    }
    writeln!(out)?;
    writeln!(out, "//! Embedded assets for module `{}`.", job.package)?;
    writeln!(out)?;
    if !job.options.tags.trim().is_empty() {
        writeln!(out, "#![cfg({})]", job.options.tags.trim())?;
    }
    writeln!(out, "#![allow(dead_code)]")?;
    writeln!(out)?;
    writeln!(out, "use std::borrow::Cow;")?;
    writeln!(out, "use std::io;")?;
    writeln!(out)?;
    Ok(())
}

fn write_toc(out: &mut Vec<u8>, toc: &Toc) -> std::io::Result<()> {
    writeln!(out, "/// Load an asset by name.")?;
    writeln!(
        out,
        "pub fn asset(name: &str) -> io::Result<Cow<'static, [u8]>> {{"
    )?;
    writeln!(out, "    match name {{")?;
    for asset in toc {
        writeln!(
            out,
            "        {} => {}(),",
            str_literal(asset.name()),
            fn_ident(asset.func().as_str())
        )?;
    }
    writeln!(out, "        _ => Err(io::Error::new(")?;
    writeln!(out, "            io::ErrorKind::NotFound,")?;
    writeln!(out, "            format!(\"asset {{}} not found\", name),")?;
    writeln!(out, "        )),")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "/// Names of all assets, in table order.")?;
    writeln!(out, "pub fn asset_names() -> &'static [&'static str] {{")?;
    writeln!(out, "    &[")?;
    for asset in toc {
        writeln!(out, "        {},", str_literal(asset.name()))?;
    }
    writeln!(out, "    ]")?;
    writeln!(out, "}}")?;
    Ok(())
}
