use super::instance::CheckInstance;
use crate::classification::Classification;
use crate::finding::Finding;

/// Core trait for all vulnerability checks.
///
/// A check declares its metadata through the accessors below and implements
/// `run_analysis`. It never runs bare: the driver wraps it in a
/// [`CheckInstance`], which rejects incomplete metadata before any analysis
/// can happen. See [`CheckInstance::new`] for the exact rules.
pub trait Check: Send + Sync {
    /// Unique short identifier used for selection (e.g. "reentrancy").
    fn argument(&self) -> &str;

    /// One-line human-readable summary of what this check looks for.
    fn help(&self) -> &str;

    /// Impact classification of findings from this check. Must not be the
    /// `Unimplemented` sentinel.
    fn impact(&self) -> Classification;

    /// Reference URL for the vulnerability class.
    fn wiki(&self) -> &str;

    fn wiki_title(&self) -> &str;

    fn wiki_description(&self) -> &str;

    /// Exploit narrative. May be empty only for informational checks.
    fn wiki_exploit_scenario(&self) -> &str;

    fn wiki_recommendation(&self) -> &str;

    /// Inspect the compilation unit, returning one finding per issue.
    /// Build findings with [`CheckInstance::generate_result`].
    fn run_analysis(&self, instance: &CheckInstance<'_>) -> Vec<Finding>;

    /// Concrete type name, used in configuration-error messages to identify
    /// a misconfigured plugin. Resolves through trait objects because the
    /// default body is instantiated per implementing type.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
