//! Debug mode: accessors read the original files at run time

use std::io::Write;

use super::literal::{fn_ident, str_literal};
use crate::domain::entities::Toc;
use crate::infrastructure::fs::to_slash;

pub(super) fn write_assets(out: &mut Vec<u8>, toc: &Toc) -> std::io::Result<()> {
    for asset in toc {
        writeln!(out, "/// `{}`", asset.name().escape_debug())?;
        writeln!(
            out,
            "pub fn {}() -> io::Result<Cow<'static, [u8]>> {{",
            fn_ident(asset.func().as_str())
        )?;
        writeln!(out, "    read_file({})", str_literal(&to_slash(asset.path())))?;
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    if !toc.is_empty() {
        out.write_all(
            b"fn read_file(path: &str) -> io::Result<Cow<'static, [u8]>> {
    std::fs::read(path).map(Cow::Owned)
}

",
        )?;
    }
    Ok(())
}
