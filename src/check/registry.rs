use super::instance::CheckInstance;
use super::traits::Check;
use crate::classification::Classification;
use crate::error::IncorrectCheckInitialization;
use crate::finding::CheckResult;
use crate::logger::Logger;
use crate::unit::CompilationUnit;

/// Registry that holds checks and runs them against a compilation unit.
///
/// Each run constructs a fresh [`CheckInstance`] per check, so metadata
/// validation happens before any analysis. A validation failure is fatal for
/// the run and propagates; the driver decides whether to drop the offending
/// plugin and retry.
pub struct CheckRegistry {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRegistry {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Register a check
    pub fn register(&mut self, check: Box<dyn Check>) {
        self.checks.push(check);
    }

    /// Register multiple checks at once
    pub fn register_all(&mut self, checks: Vec<Box<dyn Check>>) {
        self.checks.extend(checks);
    }

    /// Run all registered checks, return aggregated results sorted by
    /// impact, most severe first.
    pub fn run_all(
        &self,
        logger: Option<&dyn Logger>,
        unit: &CompilationUnit,
    ) -> Result<Vec<CheckResult>, IncorrectCheckInitialization> {
        let mut results = Vec::new();
        for check in &self.checks {
            let instance = CheckInstance::new(check.as_ref(), logger, unit)?;
            results.extend(instance.check());
        }
        results.sort_by(|a, b| a.impact.cmp(&b.impact));
        Ok(results)
    }

    /// Run only checks whose argument appears in `arguments`
    pub fn run_selected(
        &self,
        arguments: &[&str],
        logger: Option<&dyn Logger>,
        unit: &CompilationUnit,
    ) -> Result<Vec<CheckResult>, IncorrectCheckInitialization> {
        let mut results = Vec::new();
        for check in &self.checks {
            if !arguments.contains(&check.argument()) {
                continue;
            }
            let instance = CheckInstance::new(check.as_ref(), logger, unit)?;
            results.extend(instance.check());
        }
        results.sort_by(|a, b| a.impact.cmp(&b.impact));
        Ok(results)
    }

    /// List the arguments of all registered checks
    pub fn list_checks(&self) -> Vec<&str> {
        self.checks.iter().map(|c| c.argument()).collect()
    }

    /// Filter results by minimum impact
    pub fn filter_by_impact(results: Vec<CheckResult>, min: Classification) -> Vec<CheckResult> {
        results.into_iter().filter(|r| r.impact <= min).collect()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
