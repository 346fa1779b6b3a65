//! Static site generation.
//!
//! Drives the `press-renderer` core: [`SiteBuilder`] walks a markdown
//! source tree, renders every page through an HTML [`Template`], and
//! copies static assets to the output directory.

mod page;
mod site;

pub use page::{Template, extract_title, render_page};
pub use site::{BuildError, BuildSummary, SiteBuilder};
