pub mod display;
pub mod types;

pub use types::{
    CheckResult, ElementKind, Finding, Info, InfoPart, ProgramElement, SourceLocation,
};
