//! Rule: component-naming
//!
//! Component names should be PascalCase and property keys should start
//! lowercase, so `Size-large` and `size-large` do not split one property
//! into two.

use std::collections::HashSet;

use shotdeck_core::types::Catalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct ComponentNamingRule;

impl LintRule for ComponentNamingRule {
    fn id(&self) -> &str {
        "component-naming"
    }

    fn description(&self) -> &str {
        "Component names should be PascalCase, property keys should start lowercase"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, catalog: &Catalog) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut seen_components = HashSet::new();
        let mut seen_keys = HashSet::new();

        for shot in &catalog.screenshots {
            if shotdeck_core::is_error_record(shot) {
                continue;
            }

            if seen_components.insert(shot.component.as_str()) && !is_pascal_case(&shot.component) {
                diagnostics.push(LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    component: shot.component.clone(),
                    file: Some(shot.filename.clone()),
                    message: format!("Component name \"{}\" should be PascalCase", shot.component),
                });
            }

            for control in &shot.property_controls {
                let key = (shot.component.as_str(), control.key.as_str());
                if seen_keys.insert(key) && !starts_lowercase(&control.key) {
                    diagnostics.push(LintDiagnostic {
                        rule: self.id().into(),
                        severity: self.default_severity(),
                        component: shot.component.clone(),
                        file: Some(shot.filename.clone()),
                        message: format!(
                            "Property key \"{}\" should start with a lowercase letter",
                            control.key
                        ),
                    });
                }
            }
        }

        diagnostics
    }
}

/// Check if a name is PascalCase: starts with an uppercase letter.
fn is_pascal_case(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_uppercase())
}

fn starts_lowercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_of;

    #[test]
    fn pascal_case_valid() {
        assert!(is_pascal_case("Button"));
        assert!(is_pascal_case("DatePicker"));
        assert!(is_pascal_case("Über"));
    }

    #[test]
    fn pascal_case_invalid() {
        assert!(!is_pascal_case("button"));
        assert!(!is_pascal_case(""));
        assert!(!is_pascal_case("1Button"));
    }

    #[test]
    fn reports_each_component_once() {
        let catalog = catalog_of(&["card_hover.png", "card_default.png", "Button.png"]);
        let results = ComponentNamingRule.check(&catalog);
        assert_eq!(results.len(), 1);
        assert!(results[0].message.contains("\"card\""));
        assert_eq!(results[0].file.as_deref(), Some("card_hover.png"));
    }

    #[test]
    fn detects_uppercase_property_key() {
        let catalog = catalog_of(&["Card_Size-large.png", "Card_Size-small.png"]);
        let results = ComponentNamingRule.check(&catalog);
        assert_eq!(results.len(), 1);
        assert!(results[0].message.contains("\"Size\""));
    }

    #[test]
    fn no_warnings_for_correct_names() {
        let catalog = catalog_of(&["Card_size-large_theme-dark.png", "Button_primary.png"]);
        assert!(ComponentNamingRule.check(&catalog).is_empty());
    }
}
