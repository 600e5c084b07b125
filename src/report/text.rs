//! Human-readable text report.
//!
//! The primary surface for an operator fixing a submission package: every
//! defect is listed with enough context (file, field, details) to locate and
//! fix it in one pass. Rendering is a pure function of the result; the same
//! input always produces the same text.

use std::fmt::Write;

use crate::engine::ValidationResult;
use crate::rules::Finding;

const RULE: &str = "============================================================";

/// Render the text report for a result.
pub fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(" 電子納品チェック結果 (Electronic Delivery Compliance Report)\n");
    out.push_str(RULE);
    out.push('\n');

    let banner = if result.is_valid {
        "合格 PASSED - package conforms to the delivery standard"
    } else {
        "不合格 FAILED - package must be corrected before submission"
    };
    // String::write_fmt never fails; via the macro it still returns Result
    let _ = writeln!(out, "Result        : {}", banner);
    let _ = writeln!(out, "Target folder : {}", result.target_folder);
    let _ = writeln!(out, "Validated at  : {}", result.validated_at);
    let _ = writeln!(out, "Errors        : {}", result.error_count());
    let _ = writeln!(out, "Warnings      : {}", result.warning_count());

    if !result.errors.is_empty() {
        out.push('\n');
        out.push_str("Errors:\n");
        for (index, finding) in result.errors.iter().enumerate() {
            render_finding(&mut out, index, finding.code.code(), finding);
        }
    }

    if !result.warnings.is_empty() {
        out.push('\n');
        out.push_str("Warnings:\n");
        for (index, finding) in result.warnings.iter().enumerate() {
            render_finding(&mut out, index, finding.code.code(), finding);
        }
    }

    out
}

fn render_finding<C>(out: &mut String, index: usize, code: &str, finding: &Finding<C>) {
    let _ = write!(out, "  {}. [{}] {}", index + 1, code, finding.message);
    if let Some(file) = &finding.target_file {
        let _ = write!(out, " (file: {})", file);
    }
    if let Some(field) = &finding.target_field {
        let _ = write!(out, " (field: {})", field);
    }
    if let Some(details) = &finding.details {
        let _ = write!(out, " [{}]", details);
    }
    out.push('\n');
}
