//! Property-variant consistency engine.
//!
//! Works over the variants of one component and keeps a set of dependent
//! toggle/dropdown controls consistent with the combinations that were
//! actually captured. Option lists always hold the complete domain of a key;
//! picking a value snaps every other property to a real variant instead of
//! disabling choices.

use std::collections::HashSet;

use crate::types::*;

/// Anything carrying a component name and property controls.
pub trait Variant {
    fn component(&self) -> &str;
    fn property_controls(&self) -> &[PropertyControl];
}

impl Variant for ParsedName {
    fn component(&self) -> &str {
        &self.component
    }

    fn property_controls(&self) -> &[PropertyControl] {
        &self.property_controls
    }
}

impl Variant for ScreenshotRecord {
    fn component(&self) -> &str {
        &self.component
    }

    fn property_controls(&self) -> &[PropertyControl] {
        &self.property_controls
    }
}

impl<T: Variant + ?Sized> Variant for &T {
    fn component(&self) -> &str {
        (**self).component()
    }

    fn property_controls(&self) -> &[PropertyControl] {
        (**self).property_controls()
    }
}

/// Values of one key in first-seen order.
struct KeyValues<'a> {
    key: &'a str,
    control_type: ControlType,
    values: Vec<&'a str>,
    seen: HashSet<&'a str>,
}

fn collect_key_values<R: Variant>(records: &[R]) -> Vec<KeyValues<'_>> {
    let mut keys: Vec<KeyValues<'_>> = Vec::new();

    for record in records {
        for control in record.property_controls() {
            let idx = match keys.iter().position(|k| k.key == control.key) {
                Some(idx) => idx,
                None => {
                    keys.push(KeyValues {
                        key: &control.key,
                        control_type: control.control_type,
                        values: Vec::new(),
                        seen: HashSet::new(),
                    });
                    keys.len() - 1
                }
            };
            let entry = &mut keys[idx];
            if entry.seen.insert(&control.value) {
                entry.values.push(&control.value);
            }
        }
    }

    keys
}

fn sorted_options(values: &[&str], control_type: ControlType) -> Vec<String> {
    let mut options: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    if control_type == ControlType::Toggle {
        for b in ["true", "false"] {
            if !values.contains(&b) {
                options.push(b.to_string());
            }
        }
    }
    options.sort();
    options
}

/// Group every property key of `records` into a control with its complete
/// option list. The selection only sets `current_value`; it never narrows
/// `options`.
pub fn build_property_groups<R: Variant>(records: &[R], selection: &Selection) -> Vec<PropertyGroup> {
    let mut groups: Vec<PropertyGroup> = collect_key_values(records)
        .into_iter()
        .map(|kv| {
            let options = sorted_options(&kv.values, kv.control_type);
            let current_value = match selection.get(kv.key) {
                Some(v) if !v.is_empty() => v.clone(),
                _ => options.first().cloned().unwrap_or_default(),
            };
            PropertyGroup {
                key: kv.key.to_string(),
                control_type: kv.control_type,
                options,
                current_value,
            }
        })
        .collect();

    groups.sort_by(|a, b| a.key.cmp(&b.key));
    groups
}

/// Every distinct value of one key, sorted.
pub fn available_options<R: Variant>(records: &[R], key: &str) -> Vec<String> {
    collect_key_values(records)
        .into_iter()
        .find(|kv| kv.key == key)
        .map(|kv| {
            let mut values: Vec<String> = kv.values.iter().map(|v| v.to_string()).collect();
            values.sort();
            values
        })
        .unwrap_or_default()
}

/// Whether the first control named `key` on `record` holds `value`.
fn has_pair<R: Variant>(record: &R, key: &str, value: &str) -> bool {
    record
        .property_controls()
        .iter()
        .find(|c| c.key == key)
        .is_some_and(|c| c.value == value)
}

fn matches_all<R: Variant>(record: &R, selection: &Selection) -> bool {
    selection.iter().all(|(k, v)| has_pair(record, k, v))
}

/// Records matching every selected pair. An empty selection matches all.
pub fn filter_by_properties<'a, R: Variant>(records: &'a [R], selection: &Selection) -> Vec<&'a R> {
    if selection.is_empty() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|r| matches_all(*r, selection))
        .collect()
}

/// A record's complete property map.
pub fn selection_of<R: Variant>(record: &R) -> Selection {
    record
        .property_controls()
        .iter()
        .map(|c| (c.key.clone(), c.value.clone()))
        .collect()
}

/// Compute the selection after `changed_key` is set to `changed_value`.
///
/// Snaps to the first record matching the whole candidate selection, then
/// to the first record carrying just the changed pair, and adopts that
/// record's full property map. When the value exists nowhere the candidate
/// is returned as-is, which may not correspond to any captured variant.
pub fn resolve_on_property_change<R: Variant>(
    records: &[R],
    changed_key: &str,
    changed_value: &str,
    current: &Selection,
) -> Selection {
    let mut candidate = current.clone();
    candidate.insert(changed_key.to_string(), changed_value.to_string());

    if let Some(record) = records.iter().find(|r| matches_all(*r, &candidate)) {
        log::trace!("{changed_key}={changed_value}: exact variant match");
        return selection_of(record);
    }

    if let Some(record) = records
        .iter()
        .find(|r| has_pair(*r, changed_key, changed_value))
    {
        log::trace!("{changed_key}={changed_value}: snapped to nearest variant");
        return selection_of(record);
    }

    log::debug!("{changed_key}={changed_value}: no variant carries this value");
    candidate
}

/// First record matching the whole selection, else the first record
/// matching at least one selected pair.
pub fn find_best_match<'a, R: Variant>(records: &'a [R], selection: &Selection) -> Option<&'a R> {
    if let Some(exact) = filter_by_properties(records, selection).into_iter().next() {
        return Some(exact);
    }
    records.iter().find(|r| {
        !r.property_controls().is_empty() && selection.iter().any(|(k, v)| has_pair(*r, k, v))
    })
}

/// Whether any record (optionally of one component) has property controls.
pub fn has_controls<R: Variant>(records: &[R], component: Option<&str>) -> bool {
    records
        .iter()
        .filter(|r| component.map_or(true, |c| r.component() == c))
        .any(|r| !r.property_controls().is_empty())
}

/// The records belonging to one component, in catalog order.
pub fn for_component<'a, R: Variant>(records: &'a [R], component: &str) -> Vec<&'a R> {
    records.iter().filter(|r| r.component() == component).collect()
}
