//! Element registry for mapping tag names to handlers.

use std::collections::{HashMap, HashSet};

use roxmltree::Node;

use super::handler::ElementHandler;
use crate::builder::StoryBuilder;
use crate::error::Result;
use crate::xml::get_tag_name;

/// Registry mapping element names to handlers.
///
/// The registry allows registering handlers for specific tag names,
/// as well as marking tags to be skipped entirely. Elements that are
/// neither handled nor skipped are ignored.
pub struct ElementRegistry {
    handlers: HashMap<String, Box<dyn ElementHandler>>,
    skip_tags: HashSet<String>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            skip_tags: HashSet::new(),
        }
    }

    /// Register a handler for a specific tag name.
    pub fn register(
        &mut self,
        tag_name: impl Into<String>,
        handler: impl ElementHandler + 'static,
    ) {
        self.handlers.insert(tag_name.into(), Box::new(handler));
    }

    /// Mark tags as skip (never dispatched, even if a handler exists).
    pub fn skip(&mut self, tag_names: impl IntoIterator<Item = impl Into<String>>) {
        for tag in tag_names {
            self.skip_tags.insert(tag.into());
        }
    }

    /// Get the appropriate handler for an element.
    ///
    /// Returns `None` if the element should be skipped or has no handler.
    pub fn get_handler(&self, node: Node<'_, '_>) -> Option<&dyn ElementHandler> {
        let tag_name = get_tag_name(node);

        if self.skip_tags.contains(tag_name) {
            return None;
        }

        self.handlers.get(tag_name).map(|h| h.as_ref())
    }

    /// Route an element to its handler.
    ///
    /// Unknown and skipped elements are a no-op.
    pub fn dispatch(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        match self.get_handler(node) {
            Some(handler) => handler.handle(node, story),
            None => {
                tracing::trace!(tag = %get_tag_name(node), story = %story.id(), "Ignoring element");
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn should_skip(&self, tag_name: &str) -> bool {
        self.skip_tags.contains(tag_name)
    }

    #[cfg(test)]
    pub(crate) fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }

    #[cfg(test)]
    pub(crate) fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
