//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

use crate::error::{Result, StoryError};

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use npr_stories::xml::get_tag_name;
///
/// let xml = r#"<list><story id="1">text</story></list>"#;
/// let doc = Document::parse(xml).unwrap();
/// let story = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(story), "story");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all element children of a node, in source order.
///
/// Text nodes, comments and processing instructions are not yielded.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use npr_stories::xml::find_child;
///
/// let xml = r#"<thumbnail><medium>http://m</medium></thumbnail>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_child(doc.root_element(), "medium").is_some());
/// assert!(find_child(doc.root_element(), "large").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use npr_stories::xml::find_children;
///
/// let xml = r#"<channel><item>1</item><title/><item>2</item></channel>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_children(doc.root_element(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Check if a node has at least one child node of any kind.
///
/// An element written as `<title/>` or `<title></title>` has none.
pub fn has_children(node: Node<'_, '_>) -> bool {
    node.first_child().is_some()
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Get an attribute value, failing when it is absent.
pub fn require_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .ok_or_else(|| StoryError::MissingAttribute {
            attribute: name.to_string(),
            element: get_tag_name(node).to_string(),
        })
}

/// Parse an integer attribute.
///
/// Returns `None` when the attribute is absent and an error when it is
/// present but not an integer.
pub fn parse_number_attribute(node: Node<'_, '_>, name: &str) -> Option<Result<i32>> {
    node.attribute(name).map(|value| {
        value.parse::<i32>().map_err(|_| StoryError::InvalidNumber {
            attribute: name.to_string(),
            value: value.to_string(),
        })
    })
}

/// Get the text content of a node, trimmed.
///
/// Concatenates every descendant text node (CDATA included), so markup
/// nested inside the element contributes its text.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use npr_stories::xml::text_content;
///
/// let xml = r#"<teaser>  Hello <b>world</b>!  </teaser>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(text_content(doc.root_element()), "Hello world!");
/// ```
pub fn text_content(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}
