use std::fmt;

use super::types::{CheckResult, ElementKind, SourceLocation};

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.start_line)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Contract => write!(f, "contract"),
            ElementKind::Function => write!(f, "function"),
            ElementKind::Variable => write!(f, "variable"),
            ElementKind::Statement => write!(f, "statement"),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.impact, self.description, self.check)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::classification::Classification;
    use crate::finding::{ElementKind, Finding, Info, SourceLocation};

    #[test]
    fn test_result_display() {
        let result = Finding::new(
            "reentrancy",
            Classification::High,
            Info::from("Reentrancy in withdraw()"),
            None,
            "",
        )
        .into_data();
        assert_eq!(
            result.to_string(),
            "[High] Reentrancy in withdraw() (reentrancy)"
        );
    }

    #[test]
    fn test_location_display() {
        let loc = SourceLocation {
            file: PathBuf::from("vault.sol"),
            start_line: 12,
            end_line: 14,
        };
        assert_eq!(loc.to_string(), "vault.sol:12");
    }

    #[test]
    fn test_element_kind_display() {
        assert_eq!(ElementKind::Function.to_string(), "function");
    }
}
