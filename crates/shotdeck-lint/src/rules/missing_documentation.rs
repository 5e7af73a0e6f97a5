//! Rule: missing-documentation
//!
//! Reports components that have no markdown documentation.

use shotdeck_core::types::Catalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct MissingDocumentationRule;

impl LintRule for MissingDocumentationRule {
    fn id(&self) -> &str {
        "missing-documentation"
    }

    fn description(&self) -> &str {
        "Every component should have a documentation file"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, catalog: &Catalog) -> Vec<LintDiagnostic> {
        let shots: Vec<_> = catalog
            .screenshots
            .iter()
            .filter(|s| !shotdeck_core::is_error_record(s))
            .cloned()
            .collect();
        let report = shotdeck_core::analyze(&shots);

        report
            .missing_docs_components
            .into_iter()
            .map(|component| LintDiagnostic {
                rule: self.id().into(),
                severity: self.default_severity(),
                message: format!(
                    "Component \"{component}\" has no documentation (add {component}.md)"
                ),
                file: None,
                component,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_of;

    #[test]
    fn detects_undocumented_components() {
        let mut catalog = catalog_of(&["Button_hover.png", "Card_default.png", "Card_hover.png"]);
        for s in &mut catalog.screenshots {
            if s.component == "Card" {
                s.documentation = Some("# Card".into());
            }
        }
        let results = MissingDocumentationRule.check(&catalog);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].component, "Button");
        assert!(results[0].message.contains("Button.md"));
    }

    #[test]
    fn error_records_are_ignored() {
        let mut catalog = catalog_of(&[]);
        catalog
            .screenshots
            .push(shotdeck_core::error_record("broken.png", 0));
        assert!(MissingDocumentationRule.check(&catalog).is_empty());
    }
}
