use std::path::Path;

use shotdeck_core::{analyze, AnalysisReport};

use crate::load_catalog;

pub fn run_analyze(input_path: &Path, format: &str) -> Result<String, String> {
    let (catalog, _) = load_catalog(input_path)?;
    let report = analyze(&catalog.screenshots);

    match format {
        "json" => serde_json::to_string_pretty(&report)
            .map_err(|e| format!("JSON serialization error: {e}")),
        _ => Ok(render_human(&report)),
    }
}

fn render_human(report: &AnalysisReport) -> String {
    let mut lines = vec![
        "Component library analysis".to_string(),
        format!("  Components:            {}", report.total_components),
        format!("  Screenshots:           {}", report.total_screenshots),
        format!("  With documentation:    {}", report.components_with_docs),
        format!("  Without documentation: {}", report.components_without_docs),
    ];

    if !report.missing_docs_components.is_empty() {
        lines.push(String::new());
        lines.push("Missing documentation:".to_string());
        for component in &report.missing_docs_components {
            lines.push(format!("  - {component}"));
        }
    }

    if !report.top_properties.is_empty() {
        lines.push(String::new());
        lines.push("Most used properties:".to_string());
        let width = report
            .top_properties
            .iter()
            .map(|p| p.property.len())
            .max()
            .unwrap_or(0);
        for p in &report.top_properties {
            lines.push(format!("  {:<width$}  {}", p.property, p.count));
        }
    }

    if !report.one_off_properties.is_empty() {
        lines.push(String::new());
        lines.push("Used only once:".to_string());
        for p in &report.one_off_properties {
            lines.push(format!("  {} ({})", p.property, p.component));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shotdeck_core::{build_catalog, Documentation, FileEntry, ProjectInfo};

    #[test]
    fn human_report_lists_sections() {
        let files: Vec<FileEntry> = ["Chip_size-small.png", "Chip_size-small_hover.png", "Tag_tone-red.png"]
            .iter()
            .map(|n| FileEntry {
                filename: n.to_string(),
                date: None,
            })
            .collect();
        let catalog = build_catalog(&files, &Documentation::new(), ProjectInfo::default());
        let text = render_human(&analyze(&catalog.screenshots));

        assert!(text.contains("Components:            2"));
        assert!(text.contains("  - Chip"));
        assert!(text.contains("size:small  2"));
        assert!(text.contains("tone:red (Tag)"));
    }
}
