//! Terminal formatting for distance tables and property-check reports.

use crate::domain::{CheckReport, DistanceRecord, OutputFormat, Property};
use crate::error::AppError;
use crate::io::export::{render_csv, render_json};
use crate::report::summarize;

/// Format a single distance for `angdist dist`.
pub fn format_distance(distance: f64, precision: usize) -> String {
    format!("{distance:.precision$}")
}

/// Render records in the requested output format.
pub fn format_records(
    records: &[DistanceRecord],
    format: OutputFormat,
    precision: usize,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format_table(records, precision)),
        OutputFormat::Csv => render_csv(records),
        OutputFormat::Json => render_json(records),
    }
}

/// Aligned table of records plus a one-line summary.
pub fn format_table(records: &[DistanceRecord], precision: usize) -> String {
    let w = 12 + precision;
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>w$} {:>w$} {:>w$} {:>w$} {:>w$}",
            "a", "b", "a_norm", "b_norm", "distance"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:->w$} {:->w$} {:->w$} {:->w$} {:->w$}", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in records {
        out.push_str(
            format!(
                "{:>w$.p$} {:>w$.p$} {:>w$.p$} {:>w$.p$} {:>w$.p$}",
                r.a,
                r.b,
                r.a_norm,
                r.b_norm,
                r.distance,
                p = precision,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    if let Some(s) = summarize(records) {
        out.push_str(&format!(
            "\nn={} | min={:.p$} | max={:.p$} | mean={:.p$}\n",
            s.count,
            s.min,
            s.max,
            s.mean,
            p = precision,
        ));
    }
    out
}

/// Human-readable property-check report.
///
/// At most `max_report` violations are listed; the rest are counted.
pub fn format_check_report(report: &CheckReport, max_report: usize) -> String {
    let mut out = String::new();

    out.push_str("=== angdist - property check ===\n");
    out.push_str(&format!(
        "Samples: n={} | seed={} | tolerance={:e}\n",
        report.samples, report.seed, report.tolerance
    ));
    out.push_str(&format!(
        "Evaluations: {} (incl. {} reference cases)\n",
        report.evaluations, report.reference_cases
    ));

    out.push_str("\nProperties:\n");
    for property in Property::ALL {
        let n = report.count_for(property);
        let status = if n == 0 { "ok" } else { "FAIL" };
        out.push_str(&format!("  {:<12} {status:<4} ({n} violations)\n", property.display_name()));
    }

    if report.passed() {
        out.push_str("\nAll properties hold.\n");
        return out;
    }

    out.push_str(&format!("\nViolations ({}):\n", report.violations.len()));
    for v in report.violations.iter().take(max_report) {
        let who = match v.sample {
            Some(i) => format!("sample {i}"),
            None => "reference".to_string(),
        };
        out.push_str(&format!(
            "  [{}] {who}: a={} b={} -> {}\n",
            v.property.display_name(),
            v.a,
            v.b,
            v.detail
        ));
    }
    let hidden = report.violations.len().saturating_sub(max_report);
    if hidden > 0 {
        out.push_str(&format!("  ... and {hidden} more\n"));
    }
    out
}
