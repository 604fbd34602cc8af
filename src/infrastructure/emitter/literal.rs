//! Rust literal and identifier rendering for generated code

use std::fmt::Write;

/// Output width at which byte literals are continued on the next line
const LINE_WIDTH: usize = 96;

/// Words that cannot be used as plain identifiers, plus the names the
/// generated module defines for itself.
const RESERVED: &[&str] = &[
    "_", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
    // generated helpers
    "asset", "asset_names", "gunzip", "read_file",
];

/// Accessor function name for a sanitized identifier.
pub fn fn_ident(func: &str) -> String {
    if RESERVED.contains(&func) {
        format!("{func}_")
    } else {
        func.to_string()
    }
}

/// Static item name holding the embedded bytes.
pub fn static_ident(func: &str) -> String {
    format!("DATA_{}", func.to_ascii_uppercase())
}

/// Quoted, escaped Rust string literal.
pub fn str_literal(s: &str) -> String {
    format!("{s:?}")
}

/// `b"..."` literal for `data`, wrapped with line continuations.
///
/// Whitespace is always escaped because a continuation swallows leading
/// whitespace on the next line.
pub fn byte_literal(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2 + 4);
    out.push_str("b\"");
    let mut line = 2;
    for &byte in data {
        let start = out.len();
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x21..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
        line += out.len() - start;
        if line >= LINE_WIDTH {
            out.push_str("\\\n");
            line = 0;
        }
    }
    out.push('"');
    out
}
