//! Screenshot filename parser.
//!
//! Filenames look like `Component_state-token_key-value_props.png`: the
//! first `_` segment names the component, `key-value` segments become
//! property controls, the `props` marker is dropped and everything else is
//! re-joined into the state string.

use crate::catalogs::{
    DEFAULT_STATE, DROPDOWN_KEYS, LEGACY_RULES, PROPS_MARKER, RE_IMAGE_EXT, RE_PNG_EXT,
    UNKNOWN_COMPONENT,
};
use crate::types::*;

/// Which trailing extensions are stripped before parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtensionSet {
    /// `.png`, `.jpg`, `.jpeg`, `.webp` (case-insensitive).
    #[default]
    Images,
    /// `.png` only.
    PngOnly,
}

/// How non-boolean property values are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlTyping {
    /// Known keys become dropdowns, everything else free text.
    #[default]
    Vocabulary,
    /// Every non-boolean value becomes a dropdown.
    BooleanOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub extensions: ExtensionSet,
    pub typing: ControlTyping,
}

/// Parse a filename with the default options.
pub fn parse_filename(filename: &str) -> ParsedName {
    parse_filename_with(filename, &ParseOptions::default())
}

/// Parse a filename into component, state, legacy props and property
/// controls. Never fails: malformed input degrades to defaults.
pub fn parse_filename_with(filename: &str, options: &ParseOptions) -> ParsedName {
    let stem = strip_extension(filename, options.extensions);
    let mut parts = stem.split('_');

    // `split` always yields at least one (possibly empty) segment.
    let first = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    if rest.is_empty() {
        let component = if first.is_empty() {
            UNKNOWN_COMPONENT
        } else {
            first
        };
        return ParsedName {
            component: component.to_string(),
            state: DEFAULT_STATE.to_string(),
            legacy_props: infer_legacy_props(DEFAULT_STATE),
            property_controls: Vec::new(),
        };
    }

    let mut state_parts: Vec<&str> = Vec::new();
    let mut property_controls = Vec::new();

    for segment in rest {
        if segment == PROPS_MARKER {
            continue;
        }
        match split_key_value(segment) {
            Some((key, value)) => property_controls.push(PropertyControl {
                key: key.to_string(),
                value: value.to_string(),
                control_type: determine_control_type(key, value, options.typing),
            }),
            None => {
                if segment.contains('-') {
                    log::debug!("treating malformed key-value segment {segment:?} as state");
                }
                state_parts.push(segment);
            }
        }
    }

    let joined = state_parts.join("_");
    let state = if joined.is_empty() {
        DEFAULT_STATE.to_string()
    } else {
        joined
    };

    ParsedName {
        component: first.to_string(),
        legacy_props: infer_legacy_props(&state),
        state,
        property_controls,
    }
}

/// Classify a control from its key and value.
pub fn determine_control_type(key: &str, value: &str, typing: ControlTyping) -> ControlType {
    if value == "true" || value == "false" {
        return ControlType::Toggle;
    }
    match typing {
        ControlTyping::BooleanOnly => ControlType::Dropdown,
        ControlTyping::Vocabulary => {
            if DROPDOWN_KEYS.contains(key.to_lowercase().as_str()) {
                ControlType::Dropdown
            } else {
                ControlType::Text
            }
        }
    }
}

/// Apply the legacy substring rules to a state string.
pub fn infer_legacy_props(state: &str) -> LegacyProps {
    let mut props = LegacyProps::new();
    for rule in LEGACY_RULES {
        if state.contains(rule.needle) {
            props.insert(rule.key.to_string(), rule.value.to_value());
        }
    }
    props
}

fn strip_extension(filename: &str, extensions: ExtensionSet) -> &str {
    let re = match extensions {
        ExtensionSet::Images => &*RE_IMAGE_EXT,
        ExtensionSet::PngOnly => &*RE_PNG_EXT,
    };
    match re.find(filename) {
        Some(m) => &filename[..m.start()],
        None => filename,
    }
}

/// Split `key-value` at the first hyphen. Returns `None` for segments that
/// should stay in the state (no hyphen, empty key or value, `props` value).
fn split_key_value(segment: &str) -> Option<(&str, &str)> {
    let (key, value) = segment.split_once('-')?;
    if key.is_empty() || value.is_empty() || value == PROPS_MARKER {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(key: &str, value: &str, control_type: ControlType) -> PropertyControl {
        PropertyControl {
            key: key.into(),
            value: value.into(),
            control_type,
        }
    }

    #[test]
    fn parse_component_and_state() {
        let p = parse_filename("Button_primary_default.png");
        assert_eq!(p.component, "Button");
        assert_eq!(p.state, "primary_default");
        assert_eq!(
            p.legacy_props.get("type"),
            Some(&LegacyValue::Text("primary".into()))
        );
        assert!(p.property_controls.is_empty());
    }

    #[test]
    fn parse_property_controls() {
        let p = parse_filename("Card_size-large_theme-dark.png");
        assert_eq!(p.component, "Card");
        assert_eq!(p.state, "default");
        assert_eq!(
            p.property_controls,
            vec![
                control("size", "large", ControlType::Dropdown),
                control("theme", "dark", ControlType::Dropdown),
            ]
        );
    }

    #[test]
    fn props_marker_is_dropped() {
        let p = parse_filename("Toggle_active-true_props.png");
        assert_eq!(p.component, "Toggle");
        assert_eq!(p.state, "default");
        assert_eq!(
            p.property_controls,
            vec![control("active", "true", ControlType::Toggle)]
        );
    }

    #[test]
    fn empty_filename() {
        let p = parse_filename("");
        assert_eq!(p.component, "Unknown");
        assert_eq!(p.state, "default");
        assert!(p.property_controls.is_empty());

        let p = parse_filename(".png");
        assert_eq!(p.component, "Unknown");
    }

    #[test]
    fn single_segment() {
        let p = parse_filename("Avatar.PNG");
        assert_eq!(p.component, "Avatar");
        assert_eq!(p.state, "default");
    }

    #[test]
    fn empty_first_segment_is_kept() {
        let p = parse_filename("_hover.png");
        assert_eq!(p.component, "");
        assert_eq!(p.state, "hover");
    }

    #[test]
    fn malformed_key_value_stays_in_state() {
        let p = parse_filename("Chip_-orphan_dangling-_size-props_x.png");
        assert_eq!(p.state, "-orphan_dangling-_size-props_x");
        assert!(p.property_controls.is_empty());
    }

    #[test]
    fn split_at_first_hyphen() {
        let p = parse_filename("Route_type-large-route.png");
        assert_eq!(
            p.property_controls,
            vec![control("type", "large-route", ControlType::Dropdown)]
        );
    }

    #[test]
    fn text_type_outside_vocabulary() {
        let p = parse_filename("Badge_label-new_Size-small.webp");
        assert_eq!(p.property_controls[0].control_type, ControlType::Text);
        assert_eq!(p.property_controls[1].control_type, ControlType::Dropdown);
    }

    #[test]
    fn boolean_only_typing() {
        let opts = ParseOptions {
            typing: ControlTyping::BooleanOnly,
            ..Default::default()
        };
        let p = parse_filename_with("Badge_label-new_open-false.png", &opts);
        assert_eq!(p.property_controls[0].control_type, ControlType::Dropdown);
        assert_eq!(p.property_controls[1].control_type, ControlType::Toggle);
    }

    #[test]
    fn png_only_keeps_other_extensions() {
        let opts = ParseOptions {
            extensions: ExtensionSet::PngOnly,
            ..Default::default()
        };
        let p = parse_filename_with("Card_hover.jpg", &opts);
        assert_eq!(p.state, "hover.jpg");
    }

    #[test]
    fn negated_legacy_props_win() {
        let p = parse_filename("Checkbox_unchecked.png");
        assert_eq!(p.legacy_props.get("checked"), Some(&LegacyValue::Bool(false)));

        let p = parse_filename("Tab_inactive_unselected.png");
        assert_eq!(p.legacy_props.get("active"), Some(&LegacyValue::Bool(false)));
        assert_eq!(p.legacy_props.get("selected"), Some(&LegacyValue::Bool(false)));

        let p = parse_filename("Dropdown_closed.png");
        assert_eq!(p.legacy_props.get("open"), Some(&LegacyValue::Bool(false)));
    }

    #[test]
    fn several_legacy_props_at_once() {
        let p = parse_filename("Button_secondary_disabled_hover.png");
        assert_eq!(
            p.legacy_props.get("type"),
            Some(&LegacyValue::Text("secondary".into()))
        );
        assert_eq!(p.legacy_props.get("disabled"), Some(&LegacyValue::Bool(true)));
        assert_eq!(p.legacy_props.get("hover"), Some(&LegacyValue::Bool(true)));
        assert_eq!(p.legacy_props.len(), 3);
    }
}
