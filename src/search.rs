use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::filter::LineFilter;
use crate::printer::write_line;
use crate::reader::LogFile;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines_read: usize,
    pub lines_matched: usize,
}

/// Reads the configured log file and writes every matching line to `out`.
pub fn scan_log(config: &ScanConfig, out: &mut impl Write) -> Result<ScanSummary, ScanError> {
    let log = LogFile::open(config.log_path())?;
    if log.is_empty() {
        tracing::warn!(path = %log.path().display(), "Log file is empty");
    } else {
        tracing::debug!(
            path = %log.path().display(),
            lines = log.len(),
            "Scanning log file"
        );
    }
    let filter = LineFilter::from_config(config);
    scan_lines(log.into_lines(), &filter, out)
}

/// Single pass over `lines`, printing the ones `filter` accepts.
pub fn scan_lines<I, S>(
    lines: I,
    filter: &LineFilter,
    out: &mut impl Write,
) -> Result<ScanSummary, ScanError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = ScanSummary::default();

    for line in lines {
        let line = line.as_ref();
        summary.lines_read += 1;
        if filter.matches(line) {
            write_line(out, line)?;
            summary.lines_matched += 1;
        }
    }

    Ok(summary)
}
