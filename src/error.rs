use thiserror::Error;

/// Raised when a check is constructed with incomplete metadata. This is a
/// defect in the check's definition, not a runtime condition: the driver is
/// expected to abort loading that plugin rather than continue silently.
///
/// Each variant names the concrete check type so a misconfigured plugin can
/// be identified from the message alone.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IncorrectCheckInitialization {
    #[error("argument is not initialized for {check}")]
    Argument { check: &'static str },

    #[error("help is not initialized for {check}")]
    Help { check: &'static str },

    #[error("wiki is not initialized for {check}")]
    Wiki { check: &'static str },

    #[error("wiki_title is not initialized for {check}")]
    WikiTitle { check: &'static str },

    #[error("wiki_description is not initialized for {check}")]
    WikiDescription { check: &'static str },

    #[error("wiki_exploit_scenario is not initialized for {check}")]
    WikiExploitScenario { check: &'static str },

    #[error("wiki_recommendation is not initialized for {check}")]
    WikiRecommendation { check: &'static str },

    #[error("impact is not initialized for {check}")]
    Impact { check: &'static str },
}
