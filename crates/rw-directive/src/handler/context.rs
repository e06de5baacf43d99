//! Directive processing context.

use std::io;
use std::path::{Path, PathBuf};

/// Where a directive was found, plus file access for handlers.
///
/// Created by [`DirectiveProcessor`](super::DirectiveProcessor) for each
/// directive.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use rw_directive::DirectiveContext;
///
/// let ctx = DirectiveContext {
///     source_path: Some(Path::new("docs/guide.md")),
///     base_dir: Path::new("docs"),
///     line: 42,
///     column: 1,
///     source: "@@include(src=\"snippets/example.md\")",
///     read_file: &|path| std::fs::read_to_string(path),
/// };
///
/// let resolved = ctx.resolve_path("snippets/example.md");
/// assert_eq!(resolved, Path::new("docs/snippets/example.md"));
/// ```
pub struct DirectiveContext<'a> {
    /// Path to the document being processed (if known).
    pub source_path: Option<&'a Path>,
    /// Base directory for resolving relative paths.
    pub base_dir: &'a Path,
    /// Line of the directive's first marker (1-indexed).
    pub line: usize,
    /// Column of the directive's first marker (1-indexed, tabs expanded).
    pub column: usize,
    /// Source text of the directive.
    pub source: &'a str,
    /// Callback to read a file.
    pub read_file: &'a dyn Fn(&Path) -> io::Result<String>,
}

impl DirectiveContext<'_> {
    /// Join `relative` onto the base directory.
    #[must_use]
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        self.base_dir.join(relative)
    }

    /// Resolve a relative path with path traversal protection.
    ///
    /// Returns `None` if the path escapes the base directory or does not
    /// exist (canonicalization requires an existing path).
    #[must_use]
    pub fn resolve_path_safe(&self, relative: &str) -> Option<PathBuf> {
        let canonical = self.base_dir.join(relative).canonicalize().ok()?;
        let canonical_base = self.base_dir.canonicalize().ok()?;

        canonical.starts_with(&canonical_base).then_some(canonical)
    }

    /// Read a file through the context's callback.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn read(&self, path: &Path) -> io::Result<String> {
        (self.read_file)(path)
    }

    /// `line:column` of the directive, prefixed by the document path if
    /// known. Handy for warnings.
    #[must_use]
    pub fn location(&self) -> String {
        match self.source_path {
            Some(path) => format!("{}:{}:{}", path.display(), self.line, self.column),
            None => format!("{}:{}", self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn context<'a>(base_dir: &'a Path, read_file: &'a dyn Fn(&Path) -> io::Result<String>) -> DirectiveContext<'a> {
        DirectiveContext {
            source_path: None,
            base_dir,
            line: 3,
            column: 5,
            source: "@a",
            read_file,
        }
    }

    #[test]
    fn test_resolve_path() {
        let ctx = context(Path::new("docs"), &|_| Ok(String::new()));
        assert_eq!(
            ctx.resolve_path("snippets/code.md"),
            PathBuf::from("docs/snippets/code.md")
        );
    }

    #[test]
    fn test_read_file() {
        let ctx = context(Path::new("."), &|_| Ok("file content".to_owned()));
        assert_eq!(ctx.read(Path::new("test.md")).unwrap(), "file content");

        let ctx = context(Path::new("."), &|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "not found"))
        });
        assert!(ctx.read(Path::new("missing.md")).is_err());
    }

    #[test]
    fn test_location() {
        let mut ctx = context(Path::new("."), &|_| Ok(String::new()));
        assert_eq!(ctx.location(), "3:5");

        ctx.source_path = Some(Path::new("guide.md"));
        assert_eq!(ctx.location(), "guide.md:3:5");
    }

    #[test]
    fn test_resolve_path_safe_within_base() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();

        let ctx = context(temp_dir.path(), &|_| Ok(String::new()));
        let result = ctx.resolve_path_safe("guide.md");
        assert!(result.is_some_and(|path| path.ends_with("guide.md")));
    }

    #[test]
    fn test_resolve_path_safe_blocks_traversal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base_dir = temp_dir.path().join("docs");
        std::fs::create_dir(&base_dir).unwrap();
        std::fs::write(temp_dir.path().join("secret.txt"), "secret").unwrap();

        let ctx = context(&base_dir, &|_| Ok(String::new()));
        assert!(ctx.resolve_path_safe("../secret.txt").is_none());
        assert!(ctx.resolve_path_safe("nonexistent.md").is_none());
    }
}
