//! Textual and machine-readable rendering of the stability verdict.

use std::fmt::Write;

use crate::stability::{StabilityReport, Verdict};

/// Render a human-readable summary of the stability evaluation.
///
/// The formatted report walks through the two forces before the verdict so
/// readers can check the comparison themselves against the equilibrium
/// relation described in <https://en.wikipedia.org/wiki/Statics>.
#[must_use]
pub fn render_report(report: &StabilityReport) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Required Friction Force: {:.2} N",
        report.required_friction
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Maximum Available Friction: {:.2} N",
        report.max_friction
    )
    .expect("writing to string cannot fail");

    match report.verdict() {
        Verdict::Stable => output.push_str("The ladder is STABLE\n"),
        Verdict::Unstable => output.push_str("The ladder is UNSTABLE (ladder will fall)\n"),
    }

    output
}

/// Render the stability evaluation as JSON for machine consumption.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialisation fails; with the plain
/// numeric fields involved this does not occur in practice.
pub fn render_report_json(report: &StabilityReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
