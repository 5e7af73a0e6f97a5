use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ---------------------------------------------------------------------------
// Parser output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlType {
    Toggle,
    Dropdown,
    Text,
}

impl ControlType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlType::Toggle => "toggle",
            ControlType::Dropdown => "dropdown",
            ControlType::Text => "text",
        }
    }
}

/// An explicit `key-value` facet taken from one filename segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyControl {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub control_type: ControlType,
}

/// Value of a legacy prop inferred from the state string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyValue {
    Bool(bool),
    Text(String),
}

pub type LegacyProps = BTreeMap<String, LegacyValue>;

/// Structured metadata parsed out of one screenshot filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub component: String,
    pub state: String,
    #[serde(rename = "legacyProps")]
    pub legacy_props: LegacyProps,
    #[serde(rename = "propertyControls")]
    pub property_controls: Vec<PropertyControl>,
}

// ---------------------------------------------------------------------------
// Variant engine
// ---------------------------------------------------------------------------

/// User-selected property values, key → value.
pub type Selection = BTreeMap<String, String>;

/// All values of one property key across a component's variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyGroup {
    pub key: String,
    #[serde(rename = "type")]
    pub control_type: ControlType,
    pub options: Vec<String>,
    #[serde(rename = "currentValue")]
    pub current_value: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One file handed over by the directory scanner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub filename: String,
    #[serde(default)]
    pub date: Option<String>,
}

/// Component name → markdown documentation.
pub type Documentation = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotRecord {
    pub id: String,
    pub component: String,
    pub state: String,
    pub props: LegacyProps,
    pub filename: String,
    pub date: String,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "thumbnailUrl")]
    pub thumbnail_url: String,
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(rename = "propertyControls", default)]
    pub property_controls: Vec<PropertyControl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Top-level catalog output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "catalogVersion")]
    pub catalog_version: String,
    pub project: ProjectInfo,
    pub screenshots: Vec<ScreenshotRecord>,
}

// ---------------------------------------------------------------------------
// Browse queries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagFilterMode {
    /// Every selected tag must be present.
    #[default]
    And,
    /// Any selected tag is enough.
    Or,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub component: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "tagFilterMode", default)]
    pub tag_filter_mode: TagFilterMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    #[default]
    Component,
    State,
    Flat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Alphabetical,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenshotGroup<'a> {
    pub key: String,
    pub screenshots: Vec<&'a ScreenshotRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    #[serde(rename = "hasPrevious")]
    pub has_previous: bool,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
}

/// A tag chip as shown next to a screenshot: either a property pair or a
/// plain tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagChip {
    Property { key: String, value: String },
    Tag { tag: String },
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCount {
    pub property: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneOffProperty {
    pub property: String,
    pub count: usize,
    pub component: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(rename = "totalComponents")]
    pub total_components: usize,
    #[serde(rename = "totalScreenshots")]
    pub total_screenshots: usize,
    #[serde(rename = "componentsWithDocs")]
    pub components_with_docs: usize,
    #[serde(rename = "componentsWithoutDocs")]
    pub components_without_docs: usize,
    #[serde(rename = "missingDocsComponents")]
    pub missing_docs_components: Vec<String>,
    #[serde(rename = "propertyUsage")]
    pub property_usage: BTreeMap<String, usize>,
    #[serde(rename = "topProperties")]
    pub top_properties: Vec<PropertyCount>,
    #[serde(rename = "oneOffProperties")]
    pub one_off_properties: Vec<OneOffProperty>,
}
