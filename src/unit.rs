/// Opaque, read-only handle to the compiled program a check inspects.
///
/// The check contract never walks program structure itself; the only value
/// it consumes is the markdown root used to anchor links in findings. The
/// analysis engine that builds richer representations lives elsewhere.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    name: String,
    markdown_root: String,
}

impl CompilationUnit {
    pub fn new(name: impl Into<String>, markdown_root: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markdown_root: markdown_root.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prefix for markdown links in findings (e.g. a repository URL).
    pub fn markdown_root(&self) -> &str {
        &self.markdown_root
    }
}
