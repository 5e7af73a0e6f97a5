//! shotdeck WASM bindings.
//!
//! Provides JavaScript-callable functions via wasm-bindgen.
//! All functions take string inputs and return JSON strings.

use shotdeck_core::types::Catalog;
use shotdeck_core::{
    analyze_to_json, build_catalog_to_json, filter_by_properties_to_json,
    parse_filename_to_json, property_groups_to_json, resolve_to_json,
};
use shotdeck_lint::Linter;
use wasm_bindgen::prelude::*;

/// Parse one screenshot filename.
///
/// @param filename - e.g. `Card_size-large_theme-dark.png`
/// @returns JSON string with `{ success: boolean, data?: ParsedName, error?: string }`
#[wasm_bindgen(js_name = "parseFilename")]
pub fn wasm_parse_filename(filename: &str) -> String {
    parse_filename_to_json(filename)
}

/// Build a catalog from scanned files.
///
/// @param files_json - JSON array of `{ filename: string, date?: string }` objects
/// @param docs_json - JSON object mapping component name to markdown, or `""`
/// @returns JSON string with `{ success: boolean, data?: Catalog, error?: string }`
#[wasm_bindgen(js_name = "buildCatalog")]
pub fn wasm_build_catalog(files_json: &str, docs_json: &str) -> String {
    build_catalog_to_json(files_json, docs_json)
}

/// Property groups (controls with every option) for one component's records.
///
/// @param records_json - JSON array of `parseFilename` results or catalog records
/// @param selection_json - JSON object `{ [key]: value }`, or `""`
#[wasm_bindgen(js_name = "propertyGroups")]
pub fn wasm_property_groups(records_json: &str, selection_json: &str) -> String {
    property_groups_to_json(records_json, selection_json)
}

/// Records matching every selected property.
#[wasm_bindgen(js_name = "filterByProperties")]
pub fn wasm_filter_by_properties(records_json: &str, selection_json: &str) -> String {
    filter_by_properties_to_json(records_json, selection_json)
}

/// Resolve a property change into a full, consistent selection.
///
/// @param request_json - `{ key: string, value: string, current?: { [key]: value } }`
#[wasm_bindgen(js_name = "resolveSelection")]
pub fn wasm_resolve_selection(records_json: &str, request_json: &str) -> String {
    resolve_to_json(records_json, request_json)
}

/// Library analysis report.
#[wasm_bindgen(js_name = "analyze")]
pub fn wasm_analyze(records_json: &str) -> String {
    analyze_to_json(records_json)
}

/// Lint a catalog with the default rule set.
///
/// @param catalog_json - catalog as returned by `buildCatalog`
/// @returns JSON string with `{ success: boolean, data?: LintDiagnostic[], error?: string }`
#[wasm_bindgen(js_name = "lint")]
pub fn wasm_lint(catalog_json: &str) -> String {
    let result = match serde_json::from_str::<Catalog>(catalog_json) {
        Ok(catalog) => serde_json::json!({
            "success": true,
            "data": Linter::default().lint(&catalog),
        }),
        Err(e) => serde_json::json!({
            "success": false,
            "error": format!("Invalid catalog JSON: {e}"),
        }),
    };
    result.to_string()
}
