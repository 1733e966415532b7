//! Pure construction of the campaign notes page
//!
//! Every function here returns a fresh [`VNode`] description; nothing touches
//! a container. See [`crate::render`] for attachment.

use tracing::debug;

use crate::markdown::MarkdownConverter;
use crate::types::{CampaignOption, Entry, FilterCategory};
use crate::vnode::{Element, VNode};

/// Classes on the campaign selector card
pub const SELECTOR_CARD_CLASSES: [&str; 4] = ["card", "auto", "medium", "column"];
/// Classes on the filter bar card
pub const FILTER_BAR_CLASSES: [&str; 4] = ["card", "auto", "medium", "row"];
/// Classes on each entry card
pub const ENTRY_CARD_CLASSES: [&str; 3] = ["card", "column", "large"];
/// Class marking the selected filter button
pub const SELECTED_CLASS: &str = "selected";
/// Text preceding the campaign dropdown
pub const CAMPAIGN_LABEL: &str = "Campaign: ";

/// Fixed, non-entry parts of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub campaigns: Vec<CampaignOption>,
    pub selected_filter: FilterCategory,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            campaigns: vec![CampaignOption::default()],
            selected_filter: FilterCategory::All,
        }
    }
}

/// Campaign selector: `label > (span, select > option*)`
pub fn selector_card(campaigns: &[CampaignOption]) -> VNode {
    let options = campaigns.iter().map(|campaign| {
        Element::new("option")
            .attr("value", campaign.value.as_str())
            .text(campaign.label.as_str())
    });

    Element::new("div")
        .classes(SELECTOR_CARD_CLASSES)
        .child(
            Element::new("label")
                .child(Element::new("span").text(CAMPAIGN_LABEL))
                .child(Element::new("select").children(options)),
        )
        .into()
}

/// Row of inert category buttons
pub fn filter_bar(selected: FilterCategory) -> VNode {
    let buttons = FilterCategory::ALL.into_iter().map(|category| {
        let button = Element::new("button");
        let button = if category == selected {
            button.class(SELECTED_CLASS)
        } else {
            button
        };
        button.text(category.label())
    });

    Element::new("div")
        .classes(FILTER_BAR_CLASSES)
        .children(buttons)
        .into()
}

/// One entry card holding the converter's output verbatim
pub fn entry_card(entry: &Entry, converter: &dyn MarkdownConverter) -> VNode {
    let html = converter.parse(&entry.markdown);
    let card = Element::new("div").classes(ENTRY_CARD_CLASSES);
    let card = match &entry.source {
        Some(source) => card.attr("data-source", source.as_str()),
        None => card,
    };
    card.inner_html(html).into()
}

/// Every top-level card for one render pass, in attachment order
pub fn build_page(
    layout: &PageLayout,
    entries: &[Entry],
    converter: &dyn MarkdownConverter,
) -> Vec<VNode> {
    let mut nodes = Vec::with_capacity(entries.len() + 2);
    nodes.push(selector_card(&layout.campaigns));
    nodes.push(filter_bar(layout.selected_filter));
    for (index, entry) in entries.iter().enumerate() {
        debug!(index, bytes = entry.markdown.len(), "building entry card");
        nodes.push(entry_card(entry, converter));
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::CmarkConverter;

    #[test]
    fn test_selector_card_shape() {
        let card = selector_card(&[CampaignOption::default()]);
        let card = card.as_element().unwrap();
        assert_eq!(card.class_list(), SELECTOR_CARD_CLASSES);

        let label = card.children_by_tag("label").next().unwrap();
        let span = label.children_by_tag("span").next().unwrap();
        assert_eq!(VNode::from(span.clone()).text_content(), "Campaign: ");

        let select = label.children_by_tag("select").next().unwrap();
        let options: Vec<_> = select.children_by_tag("option").collect();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].get_attr("value"), Some("Eberron"));
    }

    #[test]
    fn test_filter_bar_selection() {
        let bar = filter_bar(FilterCategory::Sessions);
        let bar = bar.as_element().unwrap();
        let selected: Vec<_> = bar
            .children_by_tag("button")
            .filter(|b| b.has_class(SELECTED_CLASS))
            .map(|b| VNode::from(b.clone()).text_content())
            .collect();
        assert_eq!(selected, ["Sessions"]);
    }

    #[test]
    fn test_entry_card_html() {
        let card = entry_card(&Entry::new("*Sharn*"), &CmarkConverter::default());
        assert_eq!(
            card.to_html(),
            "<div class=\"card column large\"><p><em>Sharn</em></p>\n</div>"
        );
    }

    #[test]
    fn test_entry_card_source_attribute() {
        let entry = Entry::new("x").with_source("sessions/01.md");
        let card = entry_card(&entry, &|_: &str| String::new());
        assert_eq!(
            card.as_element().unwrap().get_attr("data-source"),
            Some("sessions/01.md")
        );
    }

    #[test]
    fn test_build_page_order() {
        let entries = [Entry::new("a"), Entry::new("b")];
        let nodes = build_page(&PageLayout::default(), &entries, &|t: &str| t.to_string());
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[2].as_element().unwrap().inner_html_string(), "a");
        assert_eq!(nodes[3].as_element().unwrap().inner_html_string(), "b");
    }
}
