use std::collections::HashSet;

use crate::catalogs::{CATALOG_VERSION, ERROR_COMPONENT, SCREENSHOT_URL_PREFIX};
use crate::filename::parse_filename;
use crate::types::*;

/// Derive search tags from a parsed filename: the component, every state
/// token, and every property key and value, lower-cased and de-duplicated.
pub fn derive_tags(parsed: &ParsedName) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    let mut push = |tag: String| {
        if seen.insert(tag.clone()) {
            tags.push(tag);
        }
    };

    push(parsed.component.to_lowercase());
    for part in parsed.state.split('_') {
        if !part.trim().is_empty() {
            push(part.to_lowercase());
        }
    }
    for control in &parsed.property_controls {
        push(control.key.to_lowercase());
        push(control.value.to_lowercase());
    }

    tags
}

pub fn describe(component: &str, state: &str) -> String {
    format!("{component} component in {state} state")
}

pub fn image_url(filename: &str) -> String {
    format!("{SCREENSHOT_URL_PREFIX}{filename}")
}

/// Build the catalog record for one file at position `index`.
pub fn build_record(entry: &FileEntry, index: usize, docs: &Documentation) -> ScreenshotRecord {
    let parsed = parse_filename(&entry.filename);
    let tags = derive_tags(&parsed);
    let url = image_url(&entry.filename);

    ScreenshotRecord {
        id: format!("{}_{}_{}", parsed.component, parsed.state, index),
        description: describe(&parsed.component, &parsed.state),
        documentation: docs.get(&parsed.component).cloned(),
        filename: entry.filename.clone(),
        date: entry.date.clone().unwrap_or_default(),
        tags,
        image_url: url.clone(),
        thumbnail_url: url,
        component: parsed.component,
        state: parsed.state,
        props: parsed.legacy_props,
        property_controls: parsed.property_controls,
    }
}

/// Placeholder for a file whose metadata could not be read, so one bad
/// file does not abort a catalog load.
pub fn error_record(filename: &str, index: usize) -> ScreenshotRecord {
    let url = image_url(filename);
    ScreenshotRecord {
        id: format!("{ERROR_COMPONENT}_{index}"),
        component: ERROR_COMPONENT.to_string(),
        state: ERROR_COMPONENT.to_string(),
        props: LegacyProps::new(),
        filename: filename.to_string(),
        date: String::new(),
        tags: vec![ERROR_COMPONENT.to_string()],
        description: format!("Failed to load {filename}"),
        image_url: url.clone(),
        thumbnail_url: url,
        documentation: None,
        property_controls: Vec::new(),
    }
}

pub fn is_error_record(record: &ScreenshotRecord) -> bool {
    record.component == ERROR_COMPONENT && record.state == ERROR_COMPONENT
}

/// Build a catalog from scanned files, preserving input order.
pub fn build_catalog(files: &[FileEntry], docs: &Documentation, project: ProjectInfo) -> Catalog {
    let screenshots = files
        .iter()
        .enumerate()
        .map(|(index, entry)| build_record(entry, index, docs))
        .collect();

    Catalog {
        catalog_version: CATALOG_VERSION.to_string(),
        project,
        screenshots,
    }
}
