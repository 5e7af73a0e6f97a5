use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::types::LegacyValue;

/// Image extensions stripped by the generic parser variant.
pub static RE_IMAGE_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(png|jpg|jpeg|webp)$").unwrap());

/// Extension stripped by the PNG-only parser variant.
pub static RE_PNG_EXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\.png$").unwrap());

/// Property keys whose non-boolean values render as dropdowns.
/// Any other non-boolean key becomes a free-text control.
pub static DROPDOWN_KEYS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("size");
    s.insert("variant");
    s.insert("type");
    s.insert("color");
    s.insert("theme");
    s.insert("state");
    s
});

/// One substring rule for legacy prop inference.
#[derive(Debug, Clone, Copy)]
pub struct LegacyRule {
    pub needle: &'static str,
    pub key: &'static str,
    pub value: LegacyRuleValue,
}

#[derive(Debug, Clone, Copy)]
pub enum LegacyRuleValue {
    Bool(bool),
    Text(&'static str),
}

impl LegacyRuleValue {
    pub fn to_value(self) -> LegacyValue {
        match self {
            LegacyRuleValue::Bool(b) => LegacyValue::Bool(b),
            LegacyRuleValue::Text(s) => LegacyValue::Text(s.to_string()),
        }
    }
}

const fn flag(needle: &'static str, key: &'static str, value: bool) -> LegacyRule {
    LegacyRule {
        needle,
        key,
        value: LegacyRuleValue::Bool(value),
    }
}

const fn text(needle: &'static str, key: &'static str, value: &'static str) -> LegacyRule {
    LegacyRule {
        needle,
        key,
        value: LegacyRuleValue::Text(value),
    }
}

/// Legacy prop rules, applied in order against the state string.
/// A later hit on the same key overwrites an earlier one, so negated
/// forms (`unchecked`, `unselected`, `inactive`) follow their positive
/// counterparts.
pub const LEGACY_RULES: &[LegacyRule] = &[
    text("primary", "type", "primary"),
    text("secondary", "type", "secondary"),
    flag("disabled", "disabled", true),
    flag("focused", "focused", true),
    flag("hover", "hover", true),
    flag("test", "test", true),
    flag("selected", "selected", true),
    flag("unselected", "selected", false),
    flag("checked", "checked", true),
    flag("unchecked", "checked", false),
    flag("open", "open", true),
    flag("closed", "open", false),
    flag("active", "active", true),
    flag("inactive", "active", false),
];

/// Marker segment carrying no data (`Toggle_active-true_props.png`).
pub const PROPS_MARKER: &str = "props";

pub const UNKNOWN_COMPONENT: &str = "Unknown";
pub const DEFAULT_STATE: &str = "default";
pub const ERROR_COMPONENT: &str = "Error";

/// Group key used by the flat grouping mode.
pub const FLAT_GROUP: &str = "All Screenshots";

/// URL prefix under which screenshots are served.
pub const SCREENSHOT_URL_PREFIX: &str = "/screenshots/";

/// Number of entries kept in the analysis "top properties" list.
pub const TOP_PROPERTIES_LIMIT: usize = 10;

/// Catalog format version.
pub const CATALOG_VERSION: &str = "1.0";
