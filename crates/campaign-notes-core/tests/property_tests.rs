//! Property-based tests for page rendering
//!
//! Uses proptest to check card count and order for arbitrary entry lists.

use campaign_notes_core::{Container, ContentNode, Entry, PageLayout, PageRenderer, CONTENT_ID};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Arbitrary note bodies, including empty ones
fn body_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 #*_\\n<>&-]{0,200}").expect("valid regex")
}

fn entries_strategy(max: usize) -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(body_strategy().prop_map(Entry::new), 0..max)
}

/// Identity converter so card content can be traced back to its entry
fn renderer() -> PageRenderer<fn(&str) -> String> {
    fn identity(text: &str) -> String {
        text.to_string()
    }
    PageRenderer::with_converter(PageLayout::default(), identity as fn(&str) -> String)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// N entries always yield N + 2 children with entry cards in input order
    #[test]
    fn entry_cards_follow_input_order(entries in entries_strategy(30)) {
        let mut content = ContentNode::new(CONTENT_ID);
        renderer().render(&mut content, &entries).unwrap();

        prop_assert_eq!(content.child_count(), entries.len() + 2);
        for (entry, card) in entries.iter().zip(&content.children()[2..]) {
            let card = card.as_element().unwrap();
            prop_assert_eq!(card.inner_html_string(), entry.markdown.clone());
        }
    }

    /// Rendering k times appends k full page sets
    #[test]
    fn repeated_renders_accumulate(entries in entries_strategy(10), times in 1usize..4) {
        let renderer = renderer();
        let mut content = ContentNode::new(CONTENT_ID);
        for _ in 0..times {
            renderer.render(&mut content, &entries).unwrap();
        }
        prop_assert_eq!(content.child_count(), times * (entries.len() + 2));
    }

    /// Building is pure: the same input always describes the same page
    #[test]
    fn build_is_deterministic(entries in entries_strategy(10)) {
        let renderer = PageRenderer::new();
        prop_assert_eq!(renderer.build(&entries), renderer.build(&entries));
    }
}
