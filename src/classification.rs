use colored::Colorize;
use serde::Serialize;

/// Impact classification for checks, ordered from most to least severe.
/// IMPORTANT: Variant order matters — derived Ord puts High < Medium < Low
/// < Informational, which is used for sorting and threshold filtering.
/// Do NOT reorder these variants.
///
/// `Unimplemented` is a sentinel default only: a check that still carries it
/// fails validation, so no constructed `CheckInstance` ever holds it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    High,
    Medium,
    Low,
    Informational,
    Unimplemented,
}

impl Classification {
    /// Display label for the level. The sentinel has none.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Classification::High => Some("High"),
            Classification::Medium => Some("Medium"),
            Classification::Low => Some("Low"),
            Classification::Informational => Some("Informational"),
            Classification::Unimplemented => None,
        }
    }

    /// Emphasis tag a renderer should use for this level. The sentinel has
    /// none, which is what makes it invalid at construction time.
    pub fn emphasis(&self) -> Option<Emphasis> {
        match self {
            Classification::High => Some(Emphasis::Red),
            Classification::Medium | Classification::Low => Some(Emphasis::Yellow),
            Classification::Informational => Some(Emphasis::Green),
            Classification::Unimplemented => None,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label().unwrap_or("Unimplemented"))
    }
}

/// Terminal emphasis for a classification. Pure presentation data; never
/// consulted for control flow.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Emphasis {
    Red,
    Yellow,
    Green,
}

impl Emphasis {
    /// Wrap `text` in the matching terminal color.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Emphasis::Red => text.red().to_string(),
            Emphasis::Yellow => text.yellow().to_string(),
            Emphasis::Green => text.green().to_string(),
        }
    }
}
