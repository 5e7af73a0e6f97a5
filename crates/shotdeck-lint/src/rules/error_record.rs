//! Rule: error-record
//!
//! Reports screenshots that could not be loaded during the scan.

use shotdeck_core::types::Catalog;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct ErrorRecordRule;

impl LintRule for ErrorRecordRule {
    fn id(&self) -> &str {
        "error-record"
    }

    fn description(&self) -> &str {
        "Every screenshot file should be readable"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn check(&self, catalog: &Catalog) -> Vec<LintDiagnostic> {
        catalog
            .screenshots
            .iter()
            .filter(|s| shotdeck_core::is_error_record(s))
            .map(|s| LintDiagnostic {
                rule: self.id().into(),
                severity: self.default_severity(),
                component: s.component.clone(),
                file: Some(s.filename.clone()),
                message: format!("Screenshot \"{}\" failed to load", s.filename),
            })
            .collect()
    }
}
