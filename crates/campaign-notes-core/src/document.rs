//! Whole-page HTML document holding named containers

use tracing::trace;

use crate::container::ContentNode;
use crate::error::{Error, Result};
use crate::theme::PAGE_STYLES;
use crate::vnode::escape_into;

/// Id of the container that receives the cards
pub const CONTENT_ID: &str = "content";

/// An HTML page with one or more `<main>` containers
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    stylesheet: String,
    containers: Vec<ContentNode>,
}

impl Document {
    /// Page with the `content` container registered
    pub fn new(title: impl Into<String>) -> Self {
        Self::empty(title).with_container(CONTENT_ID)
    }

    /// Page with no containers at all
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stylesheet: PAGE_STYLES.to_string(),
            containers: Vec::new(),
        }
    }

    /// Register another container (no-op if the id exists)
    pub fn with_container(mut self, id: &str) -> Self {
        if self.container(id).is_err() {
            self.containers.push(ContentNode::new(id));
        }
        self
    }

    pub fn with_stylesheet(mut self, css: impl Into<String>) -> Self {
        self.stylesheet = css.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn container(&self, id: &str) -> Result<&ContentNode> {
        self.containers
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| Error::ContainerUnavailable(id.to_string()))
    }

    /// Look up a container for mutation; unknown ids are a fatal precondition failure
    pub fn container_mut(&mut self, id: &str) -> Result<&mut ContentNode> {
        self.containers
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| Error::ContainerUnavailable(id.to_string()))
    }

    /// Serialise the full page
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n<title>");
        escape_into(&self.title, &mut out);
        out.push_str("</title>\n<style>");
        out.push_str(&self.stylesheet);
        out.push_str("</style>\n</head>\n<body>\n");
        for container in &self.containers {
            container.write_html(&mut out);
        }
        out.push_str("</body>\n</html>\n");
        trace!(bytes = out.len(), "serialised document");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Container;
    use crate::vnode::VNode;

    #[test]
    fn test_missing_container_is_error() {
        let mut doc = Document::empty("Notes");
        let err = doc.container_mut(CONTENT_ID).unwrap_err();
        assert!(matches!(err, Error::ContainerUnavailable(ref id) if id == "content"));
    }

    #[test]
    fn test_document_html() {
        let mut doc = Document::new("Eberron <Notes>").with_stylesheet("");
        doc.container_mut(CONTENT_ID)
            .unwrap()
            .append_child(VNode::text("hi"))
            .unwrap();
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<title>Eberron &lt;Notes&gt;</title>"));
        assert!(html.contains("<main id=\"content\">\nhi\n</main>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_with_container_is_idempotent() {
        let doc = Document::new("x").with_container(CONTENT_ID).with_container("aside");
        assert!(doc.container("aside").is_ok());
        assert_eq!(doc.containers.len(), 2);
    }
}
