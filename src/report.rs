use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::ReportFormat;
use crate::error::{Result, ScanError};
use crate::signatures::BinaryFormat;
use crate::types::ExtractionResult;

const HEADER_PREFIX: &str = "File: ";

/// Writes the plain-text report. Results without fragments produce no
/// output at all.
pub fn write_text<W: Write>(out: &mut W, results: &[ExtractionResult]) -> io::Result<()> {
    for result in results.iter().filter(|r| !r.is_empty()) {
        let path = result.path.to_string_lossy();
        let underline = "=".repeat(path.chars().count() + HEADER_PREFIX.len());

        writeln!(out, "{}{}", HEADER_PREFIX, path)?;
        writeln!(out, "{}", underline)?;
        writeln!(out)?;
        out.write_all(result.fragments.join("\n\n").as_bytes())?;
        out.write_all(b"\n\n\n")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    path: String,
    format: Option<BinaryFormat>,
    fragments: &'a [String],
}

/// Writes non-empty results as a JSON array.
pub fn write_json<W: Write>(out: &mut W, results: &[ExtractionResult]) -> io::Result<()> {
    let records: Vec<JsonRecord<'_>> = results
        .iter()
        .filter(|r| !r.is_empty())
        .map(|r| JsonRecord {
            path: r.path.to_string_lossy().into_owned(),
            format: r.outcome.format(),
            fragments: &r.fragments,
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

/// Creates `path` and writes `results` to it in the requested format.
pub fn write_report(
    path: &Path,
    results: &[ExtractionResult],
    format: ReportFormat,
) -> Result<()> {
    let to_report_error = |source: io::Error| ScanError::Report {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_report_error)?;
    let mut out = BufWriter::new(file);

    let written = match format {
        ReportFormat::Text => write_text(&mut out, results),
        ReportFormat::Json => write_json(&mut out, results),
    };

    written
        .and_then(|_| out.flush())
        .map_err(to_report_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Outcome;

    fn text_of(results: &[ExtractionResult]) -> String {
        let mut out = Vec::new();
        write_text(&mut out, results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_record_layout() {
        let results = vec![ExtractionResult::new(
            "a.bin",
            vec!["foo".into(), "bar".into()],
            Outcome::Extracted(BinaryFormat::Elf),
        )];

        assert_eq!(
            text_of(&results),
            "File: a.bin\n===========\n\nfoo\n\nbar\n\n\n"
        );
    }

    #[test]
    fn test_empty_results_are_omitted() {
        let results = vec![
            ExtractionResult::empty("x.bin", Outcome::NotBinary),
            ExtractionResult::new(
                "y",
                vec!["text".into()],
                Outcome::Extracted(BinaryFormat::Pe),
            ),
        ];

        assert_eq!(text_of(&results), "File: y\n=======\n\ntext\n\n\n");
    }

    #[test]
    fn test_json_skips_empty_results() {
        let results = vec![
            ExtractionResult::empty("x.bin", Outcome::NotBinary),
            ExtractionResult::new(
                "y.bin",
                vec!["text".into()],
                Outcome::Extracted(BinaryFormat::MachO64),
            ),
        ];

        let mut out = Vec::new();
        write_json(&mut out, &results).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                { "path": "y.bin", "format": "mach-o64", "fragments": ["text"] }
            ])
        );
    }
}
