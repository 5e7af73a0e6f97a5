//! Rule: mixed-control-type
//!
//! A property key whose values mix booleans with other values gets its
//! control type from whichever value happens to be seen first. Flags those
//! keys per component.

use std::collections::BTreeMap;

use shotdeck_core::types::{Catalog, ControlType};

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct MixedControlTypeRule;

impl LintRule for MixedControlTypeRule {
    fn id(&self) -> &str {
        "mixed-control-type"
    }

    fn description(&self) -> &str {
        "A property should not mix boolean and non-boolean values"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, catalog: &Catalog) -> Vec<LintDiagnostic> {
        // (component, key) → (has toggle value, has other value)
        let mut kinds: BTreeMap<(&str, &str), (bool, bool)> = BTreeMap::new();

        for shot in &catalog.screenshots {
            for control in &shot.property_controls {
                let entry = kinds
                    .entry((shot.component.as_str(), control.key.as_str()))
                    .or_default();
                if control.control_type == ControlType::Toggle {
                    entry.0 = true;
                } else {
                    entry.1 = true;
                }
            }
        }

        kinds
            .into_iter()
            .filter(|(_, (toggle, other))| *toggle && *other)
            .map(|((component, key), _)| LintDiagnostic {
                rule: self.id().into(),
                severity: self.default_severity(),
                component: component.to_string(),
                file: None,
                message: format!(
                    "Property \"{key}\" of \"{component}\" mixes true/false with other values"
                ),
            })
            .collect()
    }
}
