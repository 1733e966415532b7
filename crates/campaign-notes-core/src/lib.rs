//! Campaign Notes Core Library
//!
//! Builds the campaign notes page: a campaign selector card, an inert filter
//! bar, and one markdown-rendered card per note.
//!
//! ## Overview
//!
//! Page construction is split in two steps:
//!
//! - [`page`] builds an immutable [`VNode`] description of every card
//! - [`render`] commits that description to a [`Container`]
//!
//! ## Quick Start
//!
//! ```
//! use campaign_notes_core::{Container, Document, Entry, PageRenderer, CONTENT_ID};
//!
//! let mut doc = Document::new("Campaign Notes");
//! let entries = vec![Entry::new("# Session 1\n\nThe party reached Sharn.")];
//!
//! let content = doc.container_mut(CONTENT_ID)?;
//! PageRenderer::new().render(content, &entries)?;
//! assert_eq!(content.child_count(), 3);
//!
//! let html = doc.to_html();
//! assert!(html.contains("<h1>Session 1</h1>"));
//! # Ok::<(), campaign_notes_core::Error>(())
//! ```

pub mod config;
pub mod container;
pub mod document;
pub mod error;
pub mod markdown;
pub mod page;
pub mod render;
pub mod source;
pub mod theme;
pub mod types;
pub mod vnode;

// Re-exports
pub use config::PageConfig;
pub use container::{Container, ContentNode};
pub use document::{Document, CONTENT_ID};
pub use error::{Error, Result};
pub use markdown::{CmarkConverter, MarkdownConverter, MarkdownOptions};
pub use page::PageLayout;
pub use render::{commit, render, PageRenderer};
pub use source::{load_entries, load_entries_dir, load_entries_file, parse_entries};
pub use types::*;
pub use vnode::{Element, VNode};
