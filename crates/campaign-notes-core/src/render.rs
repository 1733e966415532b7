//! Commits a built page into a container

use tracing::{debug, info, instrument};

use crate::config::PageConfig;
use crate::container::Container;
use crate::error::Result;
use crate::markdown::{CmarkConverter, MarkdownConverter};
use crate::page::{build_page, PageLayout};
use crate::types::Entry;
use crate::vnode::VNode;

/// Renders the selector card, the filter bar and one card per entry.
///
/// Rendering is additive: calling [`PageRenderer::render`] twice on the same
/// container appends a second full set of cards.
pub struct PageRenderer<C = CmarkConverter> {
    layout: PageLayout,
    converter: C,
}

impl PageRenderer<CmarkConverter> {
    /// Default layout with the pulldown-cmark converter
    pub fn new() -> Self {
        Self::with_converter(PageLayout::default(), CmarkConverter::default())
    }

    /// Layout and converter options taken from configuration
    pub fn from_config(config: &PageConfig) -> Self {
        Self::with_converter(config.layout(), CmarkConverter::new(config.markdown))
    }
}

impl Default for PageRenderer<CmarkConverter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: MarkdownConverter> PageRenderer<C> {
    pub fn with_converter(layout: PageLayout, converter: C) -> Self {
        Self { layout, converter }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Build the page description without attaching it
    pub fn build(&self, entries: &[Entry]) -> Vec<VNode> {
        build_page(&self.layout, entries, &self.converter)
    }

    /// Append the page to `content`
    #[instrument(skip_all, fields(entries = entries.len()))]
    pub fn render<T>(&self, content: &mut T, entries: &[Entry]) -> Result<()>
    where
        T: Container + ?Sized,
    {
        let nodes = self.build(entries);
        let appended = commit(content, nodes)?;
        info!(cards = appended, total = content.child_count(), "rendered page");
        Ok(())
    }
}

/// Append `nodes` to `content` in order, returning how many were appended
pub fn commit<T, I>(content: &mut T, nodes: I) -> Result<usize>
where
    T: Container + ?Sized,
    I: IntoIterator<Item = VNode>,
{
    let mut appended = 0;
    for node in nodes {
        content.append_child(node)?;
        appended += 1;
    }
    debug!(appended, "committed nodes");
    Ok(appended)
}

/// Render `entries` into `content` with the default renderer
pub fn render<T>(content: &mut T, entries: &[Entry]) -> Result<()>
where
    T: Container + ?Sized,
{
    PageRenderer::new().render(content, entries)
}
