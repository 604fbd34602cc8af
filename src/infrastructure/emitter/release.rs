//! Release mode: asset bytes embedded as statics

use std::fs;
use std::io::Write;

use flate2::{Compression, GzBuilder};

use super::literal::{byte_literal, fn_ident, static_ident};
use crate::domain::entities::{Asset, Job, Toc};
use crate::error::{BindataError, BindataResult};

pub(super) fn write_assets(out: &mut Vec<u8>, job: &Job, toc: &Toc) -> BindataResult<()> {
    let emit_err = |source| BindataError::Emit {
        output: job.output.clone(),
        source,
    };

    for asset in toc {
        let data = fs::read(asset.path()).map_err(|source| BindataError::ReadAsset {
            path: asset.path().to_path_buf(),
            source,
        })?;
        let data = if job.options.no_compress {
            data
        } else {
            gzip(&data).map_err(emit_err)?
        };
        write_asset(out, job, asset, &data).map_err(emit_err)?;
    }

    if !job.options.no_compress && !toc.is_empty() {
        write_gunzip(out).map_err(emit_err)?;
    }
    Ok(())
}

/// Gzip with a zeroed header timestamp so output is reproducible.
fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}

fn write_asset(out: &mut Vec<u8>, job: &Job, asset: &Asset, data: &[u8]) -> std::io::Result<()> {
    let func = asset.func().as_str();
    let data_name = static_ident(func);

    writeln!(out, "static {data_name}: &[u8] = {};", byte_literal(data))?;
    writeln!(out)?;
    writeln!(out, "/// `{}`", asset.name().escape_debug())?;
    writeln!(
        out,
        "pub fn {}() -> io::Result<Cow<'static, [u8]>> {{",
        fn_ident(func)
    )?;
    let body = match (job.options.no_compress, job.options.no_memcopy) {
        (false, _) => format!("gunzip({data_name})"),
        (true, true) => format!("Ok(Cow::Borrowed({data_name}))"),
        (true, false) => format!("Ok(Cow::Owned({data_name}.to_vec()))"),
    };
    writeln!(out, "    {body}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

fn write_gunzip(out: &mut Vec<u8>) -> std::io::Result<()> {
    out.write_all(
        b"fn gunzip(data: &[u8]) -> io::Result<Cow<'static, [u8]>> {
    use std::io::Read;

    let mut buf = Vec::new();
    flate2::read::GzDecoder::new(data).read_to_end(&mut buf)?;
    Ok(Cow::Owned(buf))
}

",
    )
}
