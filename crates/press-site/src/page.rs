//! Page templating.
//!
//! A [`Template`] is an HTML file with `{{ Title }}` and `{{ Content }}`
//! placeholders. [`render_page`] converts one markdown document into a
//! full HTML page by extracting its title, rendering its body through the
//! `press-renderer` core, and substituting both into the template.

use std::path::Path;

use press_renderer::markdown_to_html;

use crate::site::BuildError;

/// Extract the page title from the first h1 heading line.
#[must_use]
pub fn extract_title(document: &str) -> Option<&str> {
    document
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}

/// HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    html: String,
}

impl Template {
    /// Load a template from an HTML file.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::TemplateNotFound`] if the file does not exist
    /// and [`BuildError::Io`] if it cannot be read.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        if !path.is_file() {
            return Err(BuildError::TemplateNotFound(path.to_path_buf()));
        }
        let html = std::fs::read_to_string(path)?;
        Ok(Self { html })
    }

    /// Create a template from an HTML string.
    #[must_use]
    pub fn from_html(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Substitute the title and content placeholders.
    #[must_use]
    pub fn apply(&self, title: &str, content: &str) -> String {
        self.html
            .replace("{{ Title }}", title)
            .replace("{{ Content }}", content)
    }
}

/// Render one markdown document into a full HTML page.
///
/// `source` names the document in error messages.
///
/// # Errors
///
/// Returns [`BuildError::MissingTitle`] if the document has no h1 heading
/// and [`BuildError::Markdown`] if markdown conversion fails.
pub fn render_page(markdown: &str, template: &Template, source: &str) -> Result<String, BuildError> {
    let title = extract_title(markdown).ok_or_else(|| BuildError::MissingTitle {
        path: source.to_owned(),
    })?;
    let content = markdown_to_html(markdown)?;
    Ok(template.apply(title, &content))
}
