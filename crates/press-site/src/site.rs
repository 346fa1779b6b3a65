//! Site build pipeline.
//!
//! [`SiteBuilder`] renders a markdown source tree to an output directory,
//! mirroring the directory structure, and copies static assets verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use press_renderer::MarkdownError;

use crate::page::{Template, render_page};

/// Error returned when a site build fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Template file not found.
    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),
    /// A page has no h1 heading to use as its title.
    #[error("No title (h1 heading) found in {path}")]
    MissingTitle {
        /// Source path of the offending page.
        path: String,
    },
    /// Markdown conversion failed.
    #[error("{0}")]
    Markdown(#[from] MarkdownError),
    /// I/O error reading sources or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts of work done by a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Markdown pages rendered.
    pub pages: usize,
    /// Static assets copied.
    pub assets: usize,
}

/// Builds a static site from a markdown source tree.
///
/// Every `.md` file under the source directory becomes an `.html` file at
/// the mirrored path under the output directory; other source files are
/// ignored. Files under the static directory (if configured) are copied
/// verbatim.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    source_dir: PathBuf,
    template_path: PathBuf,
    static_dir: Option<PathBuf>,
    output_dir: PathBuf,
}

impl SiteBuilder {
    /// Create a builder for the given source tree, template, and output
    /// directory.
    #[must_use]
    pub fn new(
        source_dir: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            template_path: template_path.into(),
            static_dir: None,
            output_dir: output_dir.into(),
        }
    }

    /// Copy static assets from this directory into the output root.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Run the build.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable source, unwritable destination,
    /// missing page title, or markdown error; nothing is rolled back.
    pub fn build(&self) -> Result<BuildSummary, BuildError> {
        let template = Template::load(&self.template_path)?;
        let mut summary = BuildSummary::default();

        if let Some(static_dir) = &self.static_dir
            && static_dir.is_dir()
        {
            copy_tree(static_dir, &self.output_dir, &mut summary)?;
        }

        self.render_tree(&template, &self.source_dir, &self.output_dir, &mut summary)?;

        tracing::info!(
            pages = summary.pages,
            assets = summary.assets,
            output = %self.output_dir.display(),
            "Site build complete"
        );
        Ok(summary)
    }

    fn render_tree(
        &self,
        template: &Template,
        dir: &Path,
        out_dir: &Path,
        summary: &mut BuildSummary,
    ) -> Result<(), BuildError> {
        fs::create_dir_all(out_dir)?;
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                let name = path.file_name().unwrap_or_default();
                self.render_tree(template, &path, &out_dir.join(name), summary)?;
            } else if path.extension().is_some_and(|ext| ext == "md") {
                let markdown = fs::read_to_string(&path)?;
                let html = render_page(&markdown, template, &path.display().to_string())?;
                let dest = out_dir
                    .join(path.file_name().unwrap_or_default())
                    .with_extension("html");
                fs::write(&dest, html)?;
                tracing::info!(source = %path.display(), dest = %dest.display(), "Rendered page");
                summary.pages += 1;
            }
        }
        Ok(())
    }
}

/// Recursively copy a directory tree, counting files copied.
fn copy_tree(from: &Path, to: &Path, summary: &mut BuildSummary) -> Result<(), BuildError> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let path = entry?.path();
        let name = path.file_name().unwrap_or_default();
        let dest = to.join(name);
        if path.is_dir() {
            copy_tree(&path, &dest, summary)?;
        } else {
            fs::copy(&path, &dest)?;
            tracing::debug!(source = %path.display(), "Copied asset");
            summary.assets += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEMPLATE: &str = "<title>{{ Title }}</title>{{ Content }}";

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn setup(root: &Path) -> SiteBuilder {
        write_file(&root.join("template.html"), TEMPLATE);
        SiteBuilder::new(
            root.join("content"),
            root.join("template.html"),
            root.join("public"),
        )
    }

    #[test]
    fn test_build_renders_pages() {
        let root = tempfile::tempdir().unwrap();
        let builder = setup(root.path());
        write_file(
            &root.path().join("content/index.md"),
            "# Home\n\nWelcome **here**",
        );

        let summary = builder.build().unwrap();
        assert_eq!(summary.pages, 1);

        let html = fs::read_to_string(root.path().join("public/index.html")).unwrap();
        assert_eq!(
            html,
            "<title>Home</title><div><h1>Home</h1><p>Welcome <b>here</b></p></div>"
        );
    }

    #[test]
    fn test_build_mirrors_directory_structure() {
        let root = tempfile::tempdir().unwrap();
        let builder = setup(root.path());
        write_file(&root.path().join("content/index.md"), "# Home");
        write_file(&root.path().join("content/blog/post.md"), "# Post\n\nbody");

        let summary = builder.build().unwrap();
        assert_eq!(summary.pages, 2);
        assert!(root.path().join("public/blog/post.html").is_file());
    }

    #[test]
    fn test_build_copies_static_assets() {
        let root = tempfile::tempdir().unwrap();
        let builder = setup(root.path()).with_static_dir(root.path().join("static"));
        write_file(&root.path().join("content/index.md"), "# Home");
        write_file(&root.path().join("static/css/main.css"), "body {}");

        let summary = builder.build().unwrap();
        assert_eq!(summary.assets, 1);

        let css = fs::read_to_string(root.path().join("public/css/main.css")).unwrap();
        assert_eq!(css, "body {}");
    }

    #[test]
    fn test_build_ignores_non_markdown_sources() {
        let root = tempfile::tempdir().unwrap();
        let builder = setup(root.path());
        write_file(&root.path().join("content/index.md"), "# Home");
        write_file(&root.path().join("content/notes.txt"), "not a page");

        let summary = builder.build().unwrap();
        assert_eq!(summary.pages, 1);
        assert!(!root.path().join("public/notes.html").exists());
        assert!(!root.path().join("public/notes.txt").exists());
    }

    #[test]
    fn test_build_fails_without_template() {
        let root = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(
            root.path().join("content"),
            root.path().join("missing.html"),
            root.path().join("public"),
        );
        assert!(matches!(
            builder.build(),
            Err(BuildError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_build_fails_on_untitled_page() {
        let root = tempfile::tempdir().unwrap();
        let builder = setup(root.path());
        write_file(&root.path().join("content/bad.md"), "no heading");

        assert!(matches!(
            builder.build(),
            Err(BuildError::MissingTitle { .. })
        ));
    }
}
