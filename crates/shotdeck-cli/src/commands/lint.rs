use std::path::Path;

use shotdeck_lint::{LintDiagnostic, LintSeverity, Linter};

use crate::load_catalog;

/// Lint a library. Returns the rendered report and the number of
/// error-severity diagnostics.
pub fn run_lint(input_path: &Path, format: &str) -> Result<(String, usize), String> {
    let (catalog, config) = load_catalog(input_path)?;

    let linter = Linter::new(config);
    let results = linter.lint(&catalog);
    let error_count = results
        .iter()
        .filter(|d| d.severity == LintSeverity::Error)
        .count();
    let screenshot_count = catalog.screenshots.len();

    let output = match format {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "diagnostics": results,
            "summary": {
                "count": results.len(),
                "errors": error_count,
                "screenshots": screenshot_count,
            }
        }))
        .map_err(|e| format!("JSON serialization error: {e}"))?,
        _ => render_human(&results, screenshot_count),
    };

    Ok((output, error_count))
}

fn severity_label(severity: &LintSeverity) -> &'static str {
    match severity {
        LintSeverity::Error => "error",
        LintSeverity::Warning => "warning",
        LintSeverity::Info => "info",
    }
}

fn render_human(results: &[LintDiagnostic], screenshot_count: usize) -> String {
    let mut lines: Vec<String> = results
        .iter()
        .map(|d| {
            let subject = match &d.file {
                Some(file) => format!("{} ({file})", d.component),
                None => d.component.clone(),
            };
            format!(
                "{}[{}] {subject}: {}",
                severity_label(&d.severity),
                d.rule,
                d.message
            )
        })
        .collect();

    let count = results.len();
    let issue_word = if count == 1 { "issue" } else { "issues" };
    let shot_word = if screenshot_count == 1 {
        "screenshot"
    } else {
        "screenshots"
    };
    lines.push(format!(
        "{count} lint {issue_word} in {screenshot_count} {shot_word}."
    ));

    lines.join("\n")
}
