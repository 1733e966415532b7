//! Lightweight virtual-node tree
//!
//! Pages are described as immutable [`VNode`] trees first and attached to a
//! [`Container`](crate::container::Container) afterwards, so the description
//! can be inspected without a live document.

use std::fmt::Write as _;

/// A node in the virtual tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VNode {
    /// Element with tag, classes, attributes and children
    Element(Element),
    /// Plain text, escaped on output
    Text(String),
    /// Trusted HTML emitted verbatim
    RawHtml(String),
}

impl VNode {
    /// Start building an element node
    pub fn element(tag: impl Into<String>) -> Element {
        Element::new(tag)
    }

    /// Plain text node
    pub fn text(text: impl Into<String>) -> Self {
        VNode::Text(text.into())
    }

    /// Trusted HTML node
    pub fn raw_html(html: impl Into<String>) -> Self {
        VNode::RawHtml(html.into())
    }

    /// Element payload, if this is an element
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            VNode::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Concatenated text of this subtree. Raw HTML contributes nothing.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            VNode::Text(text) => out.push_str(text),
            VNode::RawHtml(_) => {}
        }
    }

    /// Serialize this subtree as HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Append this subtree's HTML to `out`
    pub fn write_html(&self, out: &mut String) {
        match self {
            VNode::Element(el) => el.write_html(out),
            VNode::Text(text) => escape_into(text, out),
            VNode::RawHtml(html) => out.push_str(html),
        }
    }
}

impl From<Element> for VNode {
    fn from(el: Element) -> Self {
        VNode::Element(el)
    }
}

/// Element node payload and builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<VNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add a class tag (duplicates are ignored, like `classList.add`)
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Add several class tags in order
    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, |el, c| el.class(c))
    }

    /// Set an attribute, replacing any earlier value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn child(mut self, child: impl Into<VNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<VNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append an escaped text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(VNode::text(text))
    }

    /// Append a trusted HTML child
    pub fn inner_html(self, html: impl Into<String>) -> Self {
        self.child(VNode::raw_html(html))
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> &[VNode] {
        &self.children
    }

    /// Child elements with the given tag, in order
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children
            .iter()
            .filter_map(VNode::as_element)
            .filter(move |el| el.tag == tag)
    }

    /// HTML of the children only
    pub fn inner_html_string(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            escape_into(&self.classes.join(" "), out);
            out.push('"');
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"", name);
            escape_into(value, out);
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// HTML-escape `text` into `out`
pub fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let node: VNode = VNode::element("div")
            .class("card")
            .class("row")
            .attr("id", "bar")
            .child(VNode::element("button").class("selected").text("All"))
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="card row" id="bar"><button class="selected">All</button></div>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let node: VNode = VNode::element("option")
            .attr("value", "\"Sharn\" & <Co>")
            .text("<b>Sharn's</b>")
            .into();
        assert_eq!(
            node.to_html(),
            "<option value=\"&quot;Sharn&quot; &amp; &lt;Co&gt;\">&lt;b&gt;Sharn&#39;s&lt;/b&gt;</option>"
        );
    }

    #[test]
    fn test_raw_html_is_verbatim() {
        let node: VNode = VNode::element("div").inner_html("<h1>Hello</h1>\n").into();
        assert_eq!(node.to_html(), "<div><h1>Hello</h1>\n</div>");
        assert_eq!(node.as_element().unwrap().inner_html_string(), "<h1>Hello</h1>\n");
    }

    #[test]
    fn test_duplicate_class_and_attr() {
        let el = Element::new("div")
            .classes(["card", "auto", "card"])
            .attr("value", "a")
            .attr("value", "b");
        assert_eq!(el.class_list(), ["card", "auto"]);
        assert_eq!(el.get_attr("value"), Some("b"));
        assert!(el.has_class("auto"));
        assert!(!el.has_class("large"));
    }

    #[test]
    fn test_text_content_skips_raw_html() {
        let node: VNode = VNode::element("label")
            .child(VNode::element("span").text("Campaign: "))
            .inner_html("<em>ignored</em>")
            .text("Eberron")
            .into();
        assert_eq!(node.text_content(), "Campaign: Eberron");
    }

    #[test]
    fn test_children_by_tag() {
        let el = Element::new("select")
            .child(Element::new("option").text("a"))
            .text("stray")
            .child(Element::new("option").text("b"));
        let texts: Vec<String> = el
            .children_by_tag("option")
            .map(|o| VNode::from(o.clone()).text_content())
            .collect();
        assert_eq!(texts, ["a", "b"]);
    }
}
