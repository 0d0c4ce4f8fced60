//! Element handler trait definition.

use roxmltree::Node;

use crate::builder::StoryBuilder;
use crate::error::Result;

/// Trait for element handlers.
///
/// A handler consumes one direct child of a story (or podcast item) element
/// and records what it finds on the builder. Returning an error marks the
/// whole story as malformed.
pub trait ElementHandler: Send + Sync {
    /// Process the element.
    ///
    /// # Arguments
    /// * `node` - The XML element to process
    /// * `story` - Builder of the story the element belongs to
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()>;
}
