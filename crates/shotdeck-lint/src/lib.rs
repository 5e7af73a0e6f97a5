//! shotdeck catalog linter: configurable rules for screenshot library quality.
//!
//! Provides a trait-based rule framework for analyzing a screenshot catalog
//! and reporting lint diagnostics.

mod rules;

use serde::{Deserialize, Serialize};
use shotdeck_core::types::Catalog;
pub use rules::*;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Lint severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

// ---------------------------------------------------------------------------
// Lint diagnostic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintDiagnostic {
    pub rule: String,
    pub severity: LintSeverity,
    pub component: String,
    /// Offending screenshot, when the finding concerns a single file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Lint rule trait
// ---------------------------------------------------------------------------

/// Trait that all lint rules must implement.
pub trait LintRule: Send + Sync {
    /// Unique rule identifier (e.g., "missing-documentation").
    fn id(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Default severity.
    fn default_severity(&self) -> LintSeverity;

    /// Run the rule against a catalog and return diagnostics.
    fn check(&self, catalog: &Catalog) -> Vec<LintDiagnostic>;
}

// ---------------------------------------------------------------------------
// Lint configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    Info,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: HashMap<String, RuleLevel>,
}

impl LintConfig {
    /// Check if a rule is enabled (not off).
    pub fn is_enabled(&self, rule_id: &str) -> bool {
        !matches!(self.rules.get(rule_id), Some(RuleLevel::Off))
    }

    /// Get the configured severity for a rule, or its default.
    pub fn severity_for(&self, rule: &dyn LintRule) -> LintSeverity {
        match self.rules.get(rule.id()) {
            Some(RuleLevel::Error) => LintSeverity::Error,
            Some(RuleLevel::Warn) => LintSeverity::Warning,
            Some(RuleLevel::Info) => LintSeverity::Info,
            Some(RuleLevel::Off) => LintSeverity::Warning,
            None => rule.default_severity(),
        }
    }
}

// ---------------------------------------------------------------------------
// Linter engine
// ---------------------------------------------------------------------------

pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// Create a new linter with all built-in rules.
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: builtin_rules(),
            config,
        }
    }

    /// Get a reference to the registered rules.
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Run all enabled rules against the catalog.
    pub fn lint(&self, catalog: &Catalog) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            if self.config.is_enabled(rule.id()) {
                let severity = self.config.severity_for(rule.as_ref());
                let mut results = rule.check(catalog);
                for d in &mut results {
                    d.severity = severity.clone();
                }
                diagnostics.extend(results);
            }
        }

        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

/// Return all built-in lint rules.
fn builtin_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(ErrorRecordRule),
        Box::new(ComponentNamingRule),
        Box::new(MixedControlTypeRule),
        Box::new(MissingDocumentationRule),
        Box::new(OneOffPropertyRule),
    ]
}

#[cfg(test)]
pub(crate) fn catalog_of(filenames: &[&str]) -> Catalog {
    let files: Vec<shotdeck_core::FileEntry> = filenames
        .iter()
        .map(|f| shotdeck_core::FileEntry {
            filename: f.to_string(),
            date: None,
        })
        .collect();
    shotdeck_core::build_catalog(&files, &Default::default(), Default::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linter_empty_catalog() {
        let linter = Linter::default();
        let result = linter.lint(&catalog_of(&[]));
        assert!(result.is_empty());
    }

    #[test]
    fn linter_runs_all_rules() {
        let linter = Linter::default();
        let ids: Vec<&str> = linter.rules().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "error-record",
                "component-naming",
                "mixed-control-type",
                "missing-documentation",
                "one-off-property"
            ]
        );
    }

    #[test]
    fn config_rule_off() {
        let mut config = LintConfig::default();
        config.rules.insert("test-rule".into(), RuleLevel::Off);
        assert!(!config.is_enabled("test-rule"));
        assert!(config.is_enabled("other-rule"));
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let catalog = catalog_of(&["Button_hover.png"]);
        let mut config = LintConfig::default();
        config
            .rules
            .insert("missing-documentation".into(), RuleLevel::Off);
        let results = Linter::new(config).lint(&catalog);
        assert!(results.iter().all(|d| d.rule != "missing-documentation"));
    }

    #[test]
    fn config_severity_override() {
        struct TestRule;
        impl LintRule for TestRule {
            fn id(&self) -> &str {
                "test-rule"
            }
            fn description(&self) -> &str {
                "test"
            }
            fn default_severity(&self) -> LintSeverity {
                LintSeverity::Warning
            }
            fn check(&self, _catalog: &Catalog) -> Vec<LintDiagnostic> {
                vec![]
            }
        }

        let mut config = LintConfig::default();
        config.rules.insert("test-rule".into(), RuleLevel::Error);
        assert_eq!(config.severity_for(&TestRule), LintSeverity::Error);
    }

    #[test]
    fn config_from_json() {
        let config: LintConfig =
            serde_json::from_str(r#"{"rules":{"one-off-property":"off","component-naming":"error"}}"#)
                .unwrap();
        assert!(!config.is_enabled("one-off-property"));
        assert_eq!(
            config.severity_for(&ComponentNamingRule),
            LintSeverity::Error
        );
    }

    #[test]
    fn info_level_lowers_a_rule() {
        let catalog = catalog_of(&["button_hover.png"]);
        let config: LintConfig =
            serde_json::from_str(r#"{"rules":{"component-naming":"info"}}"#).unwrap();
        assert_eq!(config.severity_for(&ComponentNamingRule), LintSeverity::Info);

        let results = Linter::new(config).lint(&catalog);
        let naming: Vec<_> = results
            .iter()
            .filter(|d| d.rule == "component-naming")
            .collect();
        assert_eq!(naming.len(), 1);
        assert_eq!(naming[0].severity, LintSeverity::Info);
    }

    #[test]
    fn diagnostic_json_omits_missing_file() {
        let d = LintDiagnostic {
            rule: "missing-documentation".into(),
            severity: LintSeverity::Info,
            component: "Card".into(),
            file: None,
            message: "no docs".into(),
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["severity"], "info");
        assert!(json.get("file").is_none());
    }

    #[test]
    fn configured_severity_applies_to_results() {
        let catalog = catalog_of(&["button_hover.png"]);
        let mut config = LintConfig::default();
        config
            .rules
            .insert("component-naming".into(), RuleLevel::Error);
        let results = Linter::new(config).lint(&catalog);
        let naming: Vec<_> = results
            .iter()
            .filter(|d| d.rule == "component-naming")
            .collect();
        assert_eq!(naming.len(), 1);
        assert_eq!(naming[0].severity, LintSeverity::Error);
    }
}
