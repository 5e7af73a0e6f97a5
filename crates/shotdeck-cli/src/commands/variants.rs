use std::path::Path;

use shotdeck_core::{
    build_property_groups, filter_by_properties, for_component, has_controls,
    resolve_on_property_change, PropertyGroup, Selection,
};

use crate::load_catalog;

/// Parse `KEY=VALUE`.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid property '{raw}', expected KEY=VALUE")),
    }
}

pub fn parse_selection(pairs: &[String]) -> Result<Selection, String> {
    pairs.iter().map(|p| parse_pair(p)).collect()
}

pub fn run_variants(
    input_path: &Path,
    component: &str,
    selections: &[String],
    change: Option<&str>,
    format: &str,
) -> Result<String, String> {
    let (catalog, _) = load_catalog(input_path)?;

    let records = for_component(&catalog.screenshots, component);
    if records.is_empty() {
        return Err(format!("No screenshots found for component '{component}'"));
    }

    let mut selection = parse_selection(selections)?;
    if let Some(raw) = change {
        let (key, value) = parse_pair(raw)?;
        selection = resolve_on_property_change(&records, &key, &value, &selection);
    }

    let groups = build_property_groups(&records, &selection);
    let matches: Vec<&str> = filter_by_properties(&records, &selection)
        .into_iter()
        .map(|r| r.filename.as_str())
        .collect();

    match format {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "component": component,
            "selection": selection,
            "groups": groups,
            "matches": matches,
        }))
        .map_err(|e| format!("JSON serialization error: {e}")),
        _ => {
            if !has_controls(&records, None) {
                return Ok(format!("No property controls found for {component}."));
            }
            Ok(render_human(component, &groups, &selection, &matches))
        }
    }
}

fn render_human(
    component: &str,
    groups: &[PropertyGroup],
    selection: &Selection,
    matches: &[&str],
) -> String {
    let mut lines = vec![format!("{component} properties:")];

    for group in groups {
        let options: Vec<String> = group
            .options
            .iter()
            .map(|o| {
                if *o == group.current_value {
                    format!("[{o}]")
                } else {
                    o.clone()
                }
            })
            .collect();
        lines.push(format!(
            "  {} ({}): {}",
            group.key,
            group.control_type.as_str(),
            options.join(" ")
        ));
    }

    if !selection.is_empty() {
        let pairs: Vec<String> = selection.iter().map(|(k, v)| format!("{k}={v}")).collect();
        lines.push(format!("Selection: {}", pairs.join(", ")));
    }

    if matches.is_empty() {
        lines.push("No screenshots match this combination.".to_string());
    } else {
        lines.push("Matches:".to_string());
        lines.extend(matches.iter().map(|m| format!("  {m}")));
    }

    lines.join("\n")
}
