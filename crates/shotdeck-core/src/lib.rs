//! shotdeck core turns UI component screenshot filenames into structured
//! variant metadata and keeps property selections consistent with the
//! variants that were actually captured.

pub mod analysis;
pub mod catalog;
pub mod catalogs;
pub mod ffi;
pub mod filename;
pub mod query;
pub mod types;
pub mod variants;

pub use analysis::analyze;
pub use catalog::{build_catalog, build_record, derive_tags, error_record, is_error_record};
pub use catalogs::CATALOG_VERSION;
pub use ffi::{
    analyze_to_json, build_catalog_to_json, filter_by_properties_to_json,
    parse_filename_to_json, property_groups_to_json, resolve_to_json, VariantRecord,
};
pub use filename::{determine_control_type, parse_filename, parse_filename_with};
pub use query::{
    filter_screenshots, group_screenshots, navigate, navigation_state, sort_screenshots,
};
pub use types::*;
pub use variants::{
    available_options, build_property_groups, filter_by_properties, find_best_match, for_component,
    has_controls, resolve_on_property_change, selection_of, Variant,
};
