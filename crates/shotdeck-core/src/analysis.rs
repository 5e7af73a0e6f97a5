use std::collections::BTreeMap;

use crate::catalogs::{TOP_PROPERTIES_LIMIT, UNKNOWN_COMPONENT};
use crate::types::*;

/// `key:value` label used for property usage counts.
pub fn property_label(control: &PropertyControl) -> String {
    format!("{}:{}", control.key, control.value)
}

/// Summarize documentation coverage and property usage of a library.
pub fn analyze(records: &[ScreenshotRecord]) -> AnalysisReport {
    // component → has documentation, in first-seen order
    let mut components: Vec<(&str, bool)> = Vec::new();
    for s in records {
        let documented = s.documentation.as_deref().is_some_and(|d| !d.is_empty());
        match components.iter_mut().find(|(c, _)| *c == s.component) {
            Some((_, has_docs)) => *has_docs |= documented,
            None => components.push((&s.component, documented)),
        }
    }

    let missing_docs_components: Vec<String> = components
        .iter()
        .filter(|(_, has_docs)| !has_docs)
        .map(|(c, _)| c.to_string())
        .collect();

    let mut property_usage: BTreeMap<String, usize> = BTreeMap::new();
    for s in records {
        for control in &s.property_controls {
            *property_usage.entry(property_label(control)).or_insert(0) += 1;
        }
    }

    let mut top_properties: Vec<PropertyCount> = property_usage
        .iter()
        .map(|(property, &count)| PropertyCount {
            property: property.clone(),
            count,
        })
        .collect();
    // stable: ties keep label order
    top_properties.sort_by(|a, b| b.count.cmp(&a.count));
    top_properties.truncate(TOP_PROPERTIES_LIMIT);

    let mut one_off_properties: Vec<OneOffProperty> = property_usage
        .iter()
        .filter(|(_, &count)| count == 1)
        .map(|(property, &count)| {
            let component = records
                .iter()
                .find(|s| s.property_controls.iter().any(|c| property_label(c) == *property))
                .map(|s| s.component.clone())
                .unwrap_or_else(|| UNKNOWN_COMPONENT.to_string());
            OneOffProperty {
                property: property.clone(),
                count,
                component,
            }
        })
        .collect();
    one_off_properties.sort_by(|a, b| a.component.cmp(&b.component));

    AnalysisReport {
        total_components: components.len(),
        total_screenshots: records.len(),
        components_with_docs: components.len() - missing_docs_components.len(),
        components_without_docs: missing_docs_components.len(),
        missing_docs_components,
        property_usage,
        top_properties,
        one_off_properties,
    }
}
