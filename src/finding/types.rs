use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::classification::Classification;

/// Line span inside one source file. Columns and snippets belong to the
/// analysis engine; findings only need enough to anchor a markdown link.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Contract,
    Function,
    Variable,
    Statement,
}

/// A named piece of the analyzed program referenced by a finding.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProgramElement {
    pub kind: ElementKind,
    pub name: String,
    pub location: Option<SourceLocation>,
}

impl ProgramElement {
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Markdown rendering: a link anchored at `root` when the element is
    /// located, the bare name otherwise.
    fn markdown(&self, root: &str) -> String {
        match &self.location {
            Some(loc) => format!(
                "[{}]({}{}#L{}-L{})",
                self.name,
                root,
                loc.file.display(),
                loc.start_line,
                loc.end_line
            ),
            None => self.name.clone(),
        }
    }
}

/// One piece of a structured info payload.
#[derive(Debug, Clone)]
pub enum InfoPart {
    Text(String),
    Element(ProgramElement),
}

/// What a check has to say about one issue: free text, or text interleaved
/// with references to program elements.
#[derive(Debug, Clone)]
pub enum Info {
    Text(String),
    Structured(Vec<InfoPart>),
}

impl From<&str> for Info {
    fn from(text: &str) -> Self {
        Info::Text(text.to_string())
    }
}

impl From<String> for Info {
    fn from(text: String) -> Self {
        Info::Text(text)
    }
}

impl From<Vec<InfoPart>> for Info {
    fn from(parts: Vec<InfoPart>) -> Self {
        Info::Structured(parts)
    }
}

/// Normalized record for one detected issue. This is the shape a driver
/// aggregates and an external serializer renders; it never requires going
/// back to the originating check.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckResult {
    pub description: String,
    pub markdown: String,
    /// Argument of the check that produced this record.
    pub check: String,
    pub impact: Classification,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<ProgramElement>,
    /// Open mapping of extra structured data, passed through untouched.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub additional_fields: Map<String, Value>,
}

/// One detected issue as produced by a check's analysis, wrapping the
/// normalized record. Findings are only constructed through
/// `CheckInstance::generate_result`, which guarantees the `check` and
/// `impact` stamps are present.
#[derive(Debug, Clone)]
pub struct Finding {
    data: CheckResult,
}

impl Finding {
    pub(crate) fn new(
        check: &str,
        impact: Classification,
        info: Info,
        additional_fields: Option<Map<String, Value>>,
        markdown_root: &str,
    ) -> Self {
        let mut description = String::new();
        let mut markdown = String::new();
        let mut elements = Vec::new();

        match info {
            Info::Text(text) => {
                description.push_str(&text);
                markdown.push_str(&text);
            }
            Info::Structured(parts) => {
                for part in parts {
                    match part {
                        InfoPart::Text(text) => {
                            description.push_str(&text);
                            markdown.push_str(&text);
                        }
                        InfoPart::Element(element) => {
                            description.push_str(&element.name);
                            markdown.push_str(&element.markdown(markdown_root));
                            elements.push(element);
                        }
                    }
                }
            }
        }

        Self {
            data: CheckResult {
                description,
                markdown,
                check: check.to_string(),
                impact,
                elements,
                additional_fields: additional_fields.unwrap_or_default(),
            },
        }
    }

    pub fn data(&self) -> &CheckResult {
        &self.data
    }

    /// Drop the wrapper, keeping the normalized record.
    pub fn into_data(self) -> CheckResult {
        self.data
    }
}
