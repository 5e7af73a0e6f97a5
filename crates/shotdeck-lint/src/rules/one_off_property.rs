//! Rule: one-off-property
//!
//! Reports `key:value` pairs used by exactly one screenshot. These are often
//! typos in a filename.

use shotdeck_core::types::Catalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct OneOffPropertyRule;

impl LintRule for OneOffPropertyRule {
    fn id(&self) -> &str {
        "one-off-property"
    }

    fn description(&self) -> &str {
        "Property values used by a single screenshot may be typos"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, catalog: &Catalog) -> Vec<LintDiagnostic> {
        let report = shotdeck_core::analyze(&catalog.screenshots);

        report
            .one_off_properties
            .into_iter()
            .map(|p| {
                let file = catalog
                    .screenshots
                    .iter()
                    .find(|s| {
                        s.property_controls
                            .iter()
                            .any(|c| shotdeck_core::analysis::property_label(c) == p.property)
                    })
                    .map(|s| s.filename.clone());
                LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    message: format!("Property \"{}\" is used by only one screenshot", p.property),
                    component: p.component,
                    file,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_of;

    #[test]
    fn detects_single_use_values() {
        let catalog = catalog_of(&[
            "Card_size-large.png",
            "Card_size-large_theme-dark.png",
            "Card_size-lrage.png",
        ]);
        let results = OneOffPropertyRule.check(&catalog);
        let messages: Vec<&str> = results.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Property \"size:lrage\" is used by only one screenshot",
                "Property \"theme:dark\" is used by only one screenshot",
            ]
        );
        assert_eq!(results[0].file.as_deref(), Some("Card_size-lrage.png"));
    }

    #[test]
    fn shared_values_are_fine() {
        let catalog = catalog_of(&["Card_size-large.png", "Card_size-large_hover.png"]);
        assert!(OneOffPropertyRule.check(&catalog).is_empty());
    }
}
