use crate::config::ScanConfig;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Settings banner: a header, one row per option, then a blank line.
pub fn format_banner(config: &ScanConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Settings:");
    for (key, value) in config.settings() {
        let _ = writeln!(out, "{key}: {value}");
    }
    out.push('\n');
    out
}

pub fn write_banner(out: &mut impl Write, config: &ScanConfig) -> io::Result<()> {
    out.write_all(format_banner(config).as_bytes())
}

/// Writes `line` unchanged, terminating it if the file's last line had no newline.
pub fn write_line(out: &mut impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    if !(line.ends_with('\n') || line.ends_with('\r')) {
        out.write_all(b"\n")?;
    }
    Ok(())
}
