use serde_json::{Map, Value};

use super::traits::Check;
use crate::classification::{Classification, Emphasis};
use crate::error::IncorrectCheckInitialization;
use crate::finding::{CheckResult, Finding, Info};
use crate::logger::Logger;
use crate::unit::CompilationUnit;

/// One check bound to a run context: an optional logger and the compilation
/// unit under analysis.
///
/// Construction validates the check's metadata fail-fast, so an instance
/// never exists with incomplete metadata. The instance holds no mutable
/// state; the compilation unit is read-only from its perspective, which is
/// what makes running distinct instances in parallel sound (provided the
/// logger is, see [`Logger`]).
pub struct CheckInstance<'a> {
    check: &'a dyn Check,
    logger: Option<&'a dyn Logger>,
    unit: &'a CompilationUnit,
    emphasis: Emphasis,
}

impl<'a> CheckInstance<'a> {
    /// Validate the check's metadata and bind it to the run context.
    ///
    /// Checks each field in a fixed order and returns the first violation:
    /// argument, help, wiki, wiki_title, wiki_description,
    /// wiki_exploit_scenario (waived for informational checks),
    /// wiki_recommendation, impact. A failure here is fatal for the plugin;
    /// drivers should not load a check whose construction failed.
    pub fn new(
        check: &'a dyn Check,
        logger: Option<&'a dyn Logger>,
        unit: &'a CompilationUnit,
    ) -> Result<Self, IncorrectCheckInitialization> {
        let name = check.type_name();

        if check.argument().is_empty() {
            return Err(IncorrectCheckInitialization::Argument { check: name });
        }
        if check.help().is_empty() {
            return Err(IncorrectCheckInitialization::Help { check: name });
        }
        if check.wiki().is_empty() {
            return Err(IncorrectCheckInitialization::Wiki { check: name });
        }
        if check.wiki_title().is_empty() {
            return Err(IncorrectCheckInitialization::WikiTitle { check: name });
        }
        if check.wiki_description().is_empty() {
            return Err(IncorrectCheckInitialization::WikiDescription { check: name });
        }
        if check.wiki_exploit_scenario().is_empty()
            && check.impact() != Classification::Informational
        {
            return Err(IncorrectCheckInitialization::WikiExploitScenario { check: name });
        }
        if check.wiki_recommendation().is_empty() {
            return Err(IncorrectCheckInitialization::WikiRecommendation { check: name });
        }
        // The emphasis lookup doubles as the impact validity check: the
        // sentinel has no emphasis.
        let emphasis = check
            .impact()
            .emphasis()
            .ok_or(IncorrectCheckInitialization::Impact { check: name })?;

        Ok(Self {
            check,
            logger,
            unit,
            emphasis,
        })
    }

    pub fn compilation_unit(&self) -> &CompilationUnit {
        self.unit
    }

    /// Emphasis tag for this check's impact. Total because impact was
    /// validated at construction.
    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// Run the analysis and normalize its findings.
    ///
    /// Consumes the instance: a check is invoked exactly once per run. When
    /// findings are non-empty and a logger was supplied, emits a single
    /// summary line concatenating every description followed by a
    /// `Reference:` line, colored by the check's emphasis. An empty result
    /// set is a valid outcome and produces no log call.
    pub fn check(self) -> Vec<CheckResult> {
        let results: Vec<CheckResult> = self
            .check
            .run_analysis(&self)
            .into_iter()
            .map(Finding::into_data)
            .collect();

        if !results.is_empty() {
            if let Some(logger) = self.logger {
                let mut info = String::from("\n");
                for result in &results {
                    info.push_str(&result.description);
                }
                info.push_str(&format!("Reference: {}", self.check.wiki()));
                logger.info(&self.emphasis.apply(&info));
            }
        }

        results
    }

    /// Wrap an info payload into a finding, stamped with this check's
    /// argument and impact and anchored at the unit's markdown root.
    pub fn generate_result(
        &self,
        info: impl Into<Info>,
        additional_fields: Option<Map<String, Value>>,
    ) -> Finding {
        Finding::new(
            self.check.argument(),
            self.check.impact(),
            info.into(),
            additional_fields,
            self.unit.markdown_root(),
        )
    }
}
