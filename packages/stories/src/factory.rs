//! Story parsing for both document dialects.
//!
//! A document whose root element is `<rss>` is read as a podcast feed
//! (`rss > channel > item`); anything else is read as NPRML
//! (`root > list > story`). Each story or item is parsed in isolation: a
//! malformed one is logged and left out, the rest of the batch continues.

use roxmltree::{Document, Node};

use crate::builder::StoryBuilder;
use crate::config::{NPRML_LIST, NPRML_STORY, RSS_CHANNEL, RSS_ITEM, RSS_ROOT};
use crate::error::{Result, StoryError};
use crate::ids::{ClockIdSource, IdSource};
use crate::registry::{create_nprml_registry, create_rss_registry, ElementRegistry};
use crate::types::Story;
use crate::xml::{
    element_children, find_children, get_tag_name, has_children, require_attribute,
};

/// Document dialect, decided by the root element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Podcast RSS feed.
    Rss,
    /// NPRML story list.
    Nprml,
}

impl Dialect {
    /// Detect the dialect of a document from its root element.
    ///
    /// There is no "unknown" dialect: every root other than `rss` is NPRML.
    #[must_use]
    pub fn detect(root: Node<'_, '_>) -> Self {
        if get_tag_name(root) == RSS_ROOT {
            Self::Rss
        } else {
            Self::Nprml
        }
    }
}

/// Parser holding one element registry per dialect.
pub struct StoryFactory {
    nprml: ElementRegistry,
    rss: ElementRegistry,
}

impl StoryFactory {
    /// Create a factory with the default registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nprml: create_nprml_registry(),
            rss: create_rss_registry(),
        }
    }

    /// Parse every story under `root`.
    ///
    /// Podcast items get ids from a fresh [`ClockIdSource`].
    pub fn parse_stories(&self, root: Node<'_, '_>) -> Vec<Story> {
        let mut ids = ClockIdSource::new();
        self.parse_stories_with_ids(root, &mut ids)
    }

    /// Parse every story under `root`, drawing podcast item ids from `ids`.
    ///
    /// # Arguments
    /// * `root` - Root element of the document
    /// * `ids` - Id source for podcast items; unused for NPRML
    ///
    /// # Returns
    /// Stories in document order. Malformed stories are omitted.
    pub fn parse_stories_with_ids(
        &self,
        root: Node<'_, '_>,
        ids: &mut dyn IdSource,
    ) -> Vec<Story> {
        match Dialect::detect(root) {
            Dialect::Rss => self.parse_feed(root, ids),
            Dialect::Nprml => self.parse_list(root),
        }
    }

    fn parse_feed(&self, root: Node<'_, '_>, ids: &mut dyn IdSource) -> Vec<Story> {
        let mut stories = Vec::new();

        for channel in find_children(root, RSS_CHANNEL) {
            for item in find_children(channel, RSS_ITEM) {
                if !has_children(item) {
                    continue;
                }

                let id = ids.next_id();
                match self.parse_item(item, id.clone()) {
                    Ok(story) => {
                        tracing::debug!(id = %story.id(), title = %story, "Parsed podcast item");
                        stories.push(story);
                    }
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "Skipping malformed podcast item");
                    }
                }
            }
        }

        stories
    }

    fn parse_item(&self, item: Node<'_, '_>, id: String) -> Result<Story> {
        let mut story = StoryBuilder::new(id);

        for child in element_children(item) {
            self.rss.dispatch(child, &mut story)?;
        }

        Ok(story.build())
    }

    fn parse_list(&self, root: Node<'_, '_>) -> Vec<Story> {
        let mut stories = Vec::new();

        for list in find_children(root, NPRML_LIST) {
            for node in find_children(list, NPRML_STORY) {
                if !has_children(node) {
                    continue;
                }

                match self.parse_story(node) {
                    Ok(story) => {
                        tracing::debug!(id = %story.id(), title = %story, "Parsed story");
                        stories.push(story);
                    }
                    Err(e) => {
                        tracing::warn!(
                            id = node.attribute("id").unwrap_or_default(),
                            error = %e,
                            "Skipping malformed story"
                        );
                    }
                }
            }
        }

        stories
    }

    fn parse_story(&self, node: Node<'_, '_>) -> Result<Story> {
        let id = require_attribute(node, "id")?;
        if id.trim().is_empty() {
            return Err(StoryError::MissingAttribute {
                attribute: "id".to_string(),
                element: NPRML_STORY.to_string(),
            });
        }
        let mut story = StoryBuilder::new(id);

        for child in element_children(node) {
            // Empty elements carry nothing worth reading
            if !has_children(child) {
                continue;
            }
            self.nprml.dispatch(child, &mut story)?;
        }

        Ok(story.build())
    }
}

impl Default for StoryFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse every story under `root` with a default [`StoryFactory`].
pub fn parse_stories(root: Node<'_, '_>) -> Vec<Story> {
    StoryFactory::new().parse_stories(root)
}

/// Parse a story document from XML text.
///
/// # Errors
/// Returns [`StoryError::XmlParse`] if
/// the text is not well-formed XML. Faults inside individual stories never fail the call.
pub fn parse_story_document(xml: &str) -> Result<Vec<Story>> {
    let doc = Document::parse(xml)?;
    Ok(parse_stories(doc.root_element()))
}

/// Parse a story document and return its first story, if any.
///
/// # Errors
/// Returns [`StoryError::XmlParse`] if
/// the text is not well-formed XML.
pub fn first_story(xml: &str) -> Result<Option<Story>> {
    Ok(parse_story_document(xml)?.into_iter().next())
}
