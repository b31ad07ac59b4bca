//! Angle-pair file ingest.
//!
//! Input is delimited text with two numeric columns per record:
//!
//! ```text
//! # comments are skipped
//! a,b
//! 10,90
//! -370;350      <- only if the file uses ';' throughout
//! ```
//!
//! - The delimiter (`,`, `;` or tab) is detected from the first data line.
//! - A first record that does not parse as numbers is treated as a header.
//! - Any later bad record is an error naming its line (exit code 2).

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::domain::AnglePair;
use crate::error::AppError;
use crate::math::ensure_finite;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read angle pairs from a file, or from stdin when `path` is `-`.
pub fn read_pairs(path: &Path) -> Result<Vec<AnglePair>, AppError> {
    let mut text = String::new();
    if path.as_os_str() == STDIN_PATH {
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| AppError::io(format!("Failed to read stdin: {e}")))?;
    } else {
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut text))
            .map_err(|e| {
                AppError::input(format!("Failed to read pairs file '{}': {e}", path.display()))
            })?;
    }
    let pairs = parse_pairs(&text)?;
    debug!(path = %path.display(), pairs = pairs.len(), "read angle pairs");
    Ok(pairs)
}

/// Parse angle pairs from delimited text.
pub fn parse_pairs(text: &str) -> Result<Vec<AnglePair>, AppError> {
    let text = blank_comment_lines(text);
    let delimiter = detect_delimiter(&text);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    let mut first = true;
    for result in reader.records() {
        let record = result.map_err(|e| AppError::input(format!("Invalid pairs input: {e}")))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(str::is_empty) {
            continue;
        }

        match parse_record(&record, line) {
            Ok(pair) => out.push(pair),
            Err(_) if first && !looks_numeric(&record) => {
                debug!(line, "skipping header record");
            }
            Err(err) => return Err(err),
        }
        first = false;
    }
    Ok(out)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<AnglePair, AppError> {
    if record.len() != 2 {
        return Err(AppError::input(format!(
            "Line {line}: expected 2 fields (a, b), found {}.",
            record.len()
        )));
    }
    let a = parse_angle(&record[0], "a", line)?;
    let b = parse_angle(&record[1], "b", line)?;
    Ok(AnglePair::new(a, b))
}

fn parse_angle(field: &str, name: &str, line: u64) -> Result<f64, AppError> {
    let value: f64 = field
        .parse()
        .map_err(|_| AppError::input(format!("Line {line}: '{field}' is not a number.")))?;
    ensure_finite(name, value).map_err(|e| AppError::input(format!("Line {line}: {}", e.message())))
}

fn looks_numeric(record: &StringRecord) -> bool {
    record.iter().any(|f| f.parse::<f64>().is_ok())
}

/// Empty out comment lines (indented ones too), keeping line numbers intact.
fn blank_comment_lines(text: &str) -> String {
    text.lines()
        .map(|l| if l.trim_start().starts_with('#') { "" } else { l })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pick the delimiter from the first non-blank line.
fn detect_delimiter(text: &str) -> u8 {
    let first = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    if first.contains('\t') {
        b'\t'
    } else if first.contains(';') {
        b';'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_header_and_comments() {
        let text = "# from the notebook\na,b\n10,90\n\n0, 270\n1,359\n720,270\n";
        let pairs = parse_pairs(text).unwrap();
        assert_eq!(
            pairs,
            vec![
                AnglePair::new(10.0, 90.0),
                AnglePair::new(0.0, 270.0),
                AnglePair::new(1.0, 359.0),
                AnglePair::new(720.0, 270.0),
            ]
        );
    }

    #[test]
    fn indented_comments_are_skipped_anywhere() {
        let text = "  # leading note\n10,90\n\t# tab-indented\n   # spaced\n1,359\nx,y\n";
        let err = parse_pairs(text).unwrap_err();
        // Comment lines still count toward line numbers.
        assert!(err.message().starts_with("Line 6"), "{}", err.message());
        let pairs = parse_pairs("10,90\n    # note\n1,359\n").unwrap();
        assert_eq!(pairs, vec![AnglePair::new(10.0, 90.0), AnglePair::new(1.0, 359.0)]);
    }

    #[test]
    fn detects_semicolon_and_tab() {
        assert_eq!(parse_pairs("-10;10\n").unwrap(), vec![AnglePair::new(-10.0, 10.0)]);
        assert_eq!(parse_pairs("5\t-5\n").unwrap(), vec![AnglePair::new(5.0, -5.0)]);
    }

    #[test]
    fn bad_line_after_data_is_an_error() {
        let err = parse_pairs("10,90\nx,y\n").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().starts_with("Line 2"), "{}", err.message());
    }

    #[test]
    fn partially_numeric_first_line_is_not_a_header() {
        assert!(parse_pairs("10,abc\n1,2\n").is_err());
    }

    #[test]
    fn rejects_wrong_field_count_and_non_finite() {
        assert!(parse_pairs("1,2,3\n").is_err());
        let err = parse_pairs("1,inf\n").unwrap_err();
        assert!(err.message().contains("'b'"), "{}", err.message());
    }

    #[test]
    fn empty_input_yields_no_pairs() {
        assert!(parse_pairs("").unwrap().is_empty());
        assert!(parse_pairs("# nothing\n").unwrap().is_empty());
    }
}
