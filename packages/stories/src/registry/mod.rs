//! Element registry for dialect-specific story parsing.
//!
//! Each dialect gets an [`ElementRegistry`] that maps the tag names found
//! under a story element to handlers that fill in a
//! [`StoryBuilder`](crate::builder::StoryBuilder).

mod config;
mod core;
mod handler;
pub mod handlers;

pub use config::{create_nprml_registry, create_rss_registry};
pub use core::ElementRegistry;
pub use handler::ElementHandler;
