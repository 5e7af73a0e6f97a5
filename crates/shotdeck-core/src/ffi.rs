//! FFI-oriented JSON API for cross-language bindings.
//!
//! All functions take string inputs and return JSON strings of the form
//! `{ "success": bool, "data"?: ..., "error"?: string }`.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::types::*;
use crate::{
    analyze, build_catalog, build_property_groups, filter_by_properties, parse_filename,
    resolve_on_property_change, Variant,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Request / result types
// ---------------------------------------------------------------------------

/// Input of [`resolve_to_json`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveRequest {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub current: Selection,
}

/// Engine input record. Accepts both `ParsedName` and catalog records: only
/// `component` and `propertyControls` are read, every other field is kept
/// as-is so filtered records come back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantRecord {
    #[serde(default)]
    pub component: String,
    #[serde(rename = "propertyControls", default)]
    pub property_controls: Vec<PropertyControl>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Variant for VariantRecord {
    fn component(&self) -> &str {
        &self.component
    }

    fn property_controls(&self) -> &[PropertyControl] {
        &self.property_controls
    }
}

#[derive(Debug, Serialize)]
pub struct FfiResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn failure(message: String) -> String {
    let result = FfiResult::<()> {
        success: false,
        data: None,
        error: Some(message),
    };
    // A unit payload with a string error always serializes.
    serde_json::to_string(&result).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
}

fn respond<T: Serialize>(f: impl FnOnce() -> T) -> String {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(data) => {
            let result = FfiResult {
                success: true,
                data: Some(data),
                error: None,
            };
            serde_json::to_string(&result)
                .unwrap_or_else(|e| failure(format!("JSON serialization error: {e}")))
        }
        Err(_) => failure("Internal panic".to_string()),
    }
}

fn decode<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| failure(format!("Invalid {what} JSON: {e}")))
}

/// Empty input means "nothing given" for optional JSON arguments.
fn decode_or_default<T: DeserializeOwned + Default>(json: &str, what: &str) -> Result<T, String> {
    if json.trim().is_empty() {
        return Ok(T::default());
    }
    decode(json, what)
}

// ---------------------------------------------------------------------------
// Public FFI functions
// ---------------------------------------------------------------------------

/// Parse one filename.
pub fn parse_filename_to_json(filename: &str) -> String {
    respond(|| parse_filename(filename))
}

/// Build a catalog.
///
/// Input: JSON array of `{ "filename": "...", "date"?: "..." }` and an
/// optional JSON object mapping component → markdown.
pub fn build_catalog_to_json(files_json: &str, docs_json: &str) -> String {
    let files: Vec<FileEntry> = match decode(files_json, "files") {
        Ok(f) => f,
        Err(e) => return e,
    };
    let docs: Documentation = match decode_or_default(docs_json, "documentation") {
        Ok(d) => d,
        Err(e) => return e,
    };
    respond(|| build_catalog(&files, &docs, ProjectInfo::default()))
}

/// Property groups for a list of records (parsed names or catalog records)
/// and a selection.
pub fn property_groups_to_json(records_json: &str, selection_json: &str) -> String {
    let records: Vec<VariantRecord> = match decode(records_json, "records") {
        Ok(r) => r,
        Err(e) => return e,
    };
    let selection: Selection = match decode_or_default(selection_json, "selection") {
        Ok(s) => s,
        Err(e) => return e,
    };
    respond(|| build_property_groups(&records, &selection))
}

/// Records matching every selected property.
pub fn filter_by_properties_to_json(records_json: &str, selection_json: &str) -> String {
    let records: Vec<VariantRecord> = match decode(records_json, "records") {
        Ok(r) => r,
        Err(e) => return e,
    };
    let selection: Selection = match decode_or_default(selection_json, "selection") {
        Ok(s) => s,
        Err(e) => return e,
    };
    respond(|| filter_by_properties(&records, &selection))
}

/// Resolve a property change into a full selection.
///
/// Input: records JSON and `{ "key": "...", "value": "...", "current"?: {...} }`.
pub fn resolve_to_json(records_json: &str, request_json: &str) -> String {
    let records: Vec<VariantRecord> = match decode(records_json, "records") {
        Ok(r) => r,
        Err(e) => return e,
    };
    let request: ResolveRequest = match decode(request_json, "request") {
        Ok(r) => r,
        Err(e) => return e,
    };
    respond(|| resolve_on_property_change(&records, &request.key, &request.value, &request.current))
}

/// Library analysis report.
pub fn analyze_to_json(records_json: &str) -> String {
    let records: Vec<ScreenshotRecord> = match decode(records_json, "records") {
        Ok(r) => r,
        Err(e) => return e,
    };
    respond(|| analyze(&records))
}
