//! NPR Stories - Parse NPR story documents into a typed story model.
//!
//! Two XML dialects are accepted: NPRML story lists (`<list><story>`) and
//! podcast RSS feeds (`<rss><channel><item>`). Both produce the same
//! [`Story`] records.
//!
//! # Example
//!
//! ```
//! use npr_stories::parse_story_document;
//!
//! let xml = r#"<nprml><list><story id="1"><title>Hello</title></story></list></nprml>"#;
//! let stories = parse_story_document(xml).unwrap();
//! assert_eq!(stories[0].title(), Some("Hello"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and image URL normalization
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities
//! - [`types`]: Story model
//! - [`builder`]: Story builder
//! - [`ids`]: Synthetic ids for podcast items
//! - [`registry`]: Element handlers per dialect
//! - [`factory`]: Dialect detection and story parsing
//! - [`grouping`]: Topic, program and other grouping lists
//! - [`output`]: YAML and summary rendering
//! - [`cli`]: Command-line interface

pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod factory;
pub mod grouping;
pub mod ids;
pub mod output;
pub mod registry;
pub mod types;
pub mod xml;

// Re-export main functions
pub use factory::{first_story, parse_stories, parse_story_document, Dialect, StoryFactory};
pub use grouping::{parse_groupings, GroupingKind, StoryGrouping};

// Re-export commonly used items
pub use builder::{StoryBuilder, StoryField};
pub use error::{Result, StoryError};
pub use ids::{ClockIdSource, IdSource, SequentialIdSource};
pub use types::{
    Audio, Byline, Format, Image, Layout, LayoutItem, LayoutItemKind, Organization, Parent,
    PullQuote, RelatedLink, Story, Text, TextWithHtml, Thumbnail, Toenail,
};
