//! Handlers for text-bearing story elements: scalar fields, links, body
//! paragraphs and the layout.

use std::collections::BTreeMap;

use roxmltree::Node;

use crate::builder::{StoryBuilder, StoryField};
use crate::config::LINK_TYPE_HTML;
use crate::error::Result;
use crate::registry::handler::ElementHandler;
use crate::types::{Layout, LayoutItem, Text, TextWithHtml};
use crate::xml::{
    element_children, find_children, get_attribute, get_tag_name, parse_number_attribute,
    require_attribute, text_content,
};

/// Handler for elements whose text maps to one scalar field.
pub struct TextFieldHandler(pub StoryField);

impl ElementHandler for TextFieldHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.set_field(self.0, text_content(node));
        Ok(())
    }
}

/// Handler for NPRML `<link type="...">` elements.
///
/// The `type` attribute is required.
pub struct LinkHandler;

impl ElementHandler for LinkHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        let link_type = require_attribute(node, "type")?;
        story.with_link(text_content(node), link_type);
        Ok(())
    }
}

/// Handler for podcast `<link>` elements, which are always the HTML page.
pub struct HtmlLinkHandler;

impl ElementHandler for HtmlLinkHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_link(text_content(node), LINK_TYPE_HTML);
        Ok(())
    }
}

/// Handler for `<text>` (plain body).
pub struct TextHandler;

impl ElementHandler for TextHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_text(Text::new(parse_paragraphs(node)?));
        Ok(())
    }
}

/// Handler for `<textWithHtml>` (body with inline markup).
pub struct TextWithHtmlHandler;

impl ElementHandler for TextWithHtmlHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_text_with_html(TextWithHtml::new(parse_paragraphs(node)?));
        Ok(())
    }
}

/// Handler for `<layout>`.
pub struct LayoutHandler;

impl ElementHandler for LayoutHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_layout(parse_layout(node));
        Ok(())
    }
}

/// Collect `<paragraph num="N">` children into a map ordered by number.
///
/// Paragraphs without `num` are dropped; a `num` that is not an integer is
/// an error. Paragraphs without text map to the empty string.
pub fn parse_paragraphs(node: Node<'_, '_>) -> Result<BTreeMap<i32, String>> {
    let mut paragraphs = BTreeMap::new();

    for paragraph in find_children(node, "paragraph") {
        if let Some(num) = parse_number_attribute(paragraph, "num") {
            paragraphs.insert(num?, text_content(paragraph));
        }
    }

    Ok(paragraphs)
}

/// Build the reading order from `<storytext>` children.
///
/// Each `<text>` or `<image>` entry lands at its `num` position, or at the
/// current layout size when `num` is missing or not an integer. Later entries
/// overwrite earlier ones at the same position. Image entries without a
/// `refId` are skipped.
pub fn parse_layout(node: Node<'_, '_>) -> Layout {
    let mut items: BTreeMap<i32, LayoutItem> = BTreeMap::new();

    for storytext in find_children(node, "storytext") {
        for entry in element_children(storytext) {
            let item = match get_tag_name(entry) {
                "text" => {
                    let num = layout_position(entry, items.len());
                    let paragraph = get_attribute(entry, "paragraphNum")
                        .map(str::to_string)
                        .unwrap_or_else(|| num.to_string());
                    Some((num, LayoutItem::text(paragraph)))
                }
                "image" => {
                    let num = layout_position(entry, items.len());
                    get_attribute(entry, "refId").map(|ref_id| (num, LayoutItem::image(ref_id)))
                }
                _ => None,
            };

            if let Some((num, item)) = item {
                items.insert(num, item);
            }
        }
    }

    Layout::new(items)
}

/// Position of a layout entry, appending when `num` is unusable.
fn layout_position(entry: Node<'_, '_>, current_size: usize) -> i32 {
    let fallback = i32::try_from(current_size).unwrap_or(i32::MAX);
    match parse_number_attribute(entry, "num") {
        Some(Ok(num)) => num,
        Some(Err(err)) => {
            tracing::debug!(error = %err, "Unparseable layout position, appending");
            fallback
        }
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LayoutItemKind;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    #[test]
    fn test_paragraphs_sorted_by_number() {
        let xml = r#"<text><paragraph num="3">C</paragraph><paragraph num="1">A</paragraph></text>"#;
        let doc = Document::parse(xml).unwrap();
        let paragraphs = parse_paragraphs(doc.root_element()).unwrap();

        let entries: Vec<_> = paragraphs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        assert_eq!(entries, vec![(1, "A"), (3, "C")]);
        assert!(!paragraphs.contains_key(&2));
    }

    #[test]
    fn test_paragraphs_empty_and_unnumbered() {
        let xml = r#"<text>
            <paragraph num="1"/>
            <paragraph>orphan</paragraph>
            <note num="2">not a paragraph</note>
        </text>"#;
        let doc = Document::parse(xml).unwrap();
        let paragraphs = parse_paragraphs(doc.root_element()).unwrap();

        assert_eq!(paragraphs.len(), 1);
        assert_eq!(paragraphs[&1], "");
    }

    #[test]
    fn test_paragraphs_invalid_number_is_error() {
        let xml = r#"<text><paragraph num="one">A</paragraph></text>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(parse_paragraphs(doc.root_element()).is_err());
    }

    #[test]
    fn test_layout_text_and_image() {
        let xml = r#"<layout><storytext>
            <text num="1" paragraphNum="1"/>
            <image num="2" refId="img-A"/>
        </storytext></layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.items()[&1], LayoutItem::text("1"));
        assert_eq!(layout.items()[&2], LayoutItem::image("img-A"));
    }

    #[test]
    fn test_layout_text_defaults_paragraph_to_num() {
        let xml = r#"<layout><storytext><text num="4"/></storytext></layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        assert_eq!(layout.items()[&4].item_id, "4");
        assert_eq!(layout.items()[&4].kind, LayoutItemKind::Text);
    }

    #[test]
    fn test_layout_missing_num_appends() {
        let xml = r#"<layout><storytext>
            <text paragraphNum="1"/>
            <text num="x" paragraphNum="2"/>
            <image refId="img"/>
        </storytext></layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        let positions: Vec<_> = layout.items().keys().copied().collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(layout.items()[&1].item_id, "2");
        assert_eq!(layout.items()[&2], LayoutItem::image("img"));
    }

    #[test]
    fn test_layout_missing_num_falls_back_to_decimal_of_size() {
        let xml = r#"<layout><storytext><text num="5"/><text/></storytext></layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        // The second entry lands at the size (1) and references paragraph "1"
        assert_eq!(layout.items()[&1], LayoutItem::text("1"));
    }

    #[test]
    fn test_layout_image_without_ref_is_skipped() {
        let xml = r#"<layout><storytext><image num="1"/><text num="2"/></storytext></layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        assert_eq!(layout.len(), 1);
        assert!(!layout.items().contains_key(&1));
    }

    #[test]
    fn test_layout_duplicate_num_last_wins() {
        let xml = r#"<layout><storytext>
            <text num="1" paragraphNum="1"/>
            <image num="1" refId="img"/>
        </storytext></layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        assert_eq!(layout.len(), 1);
        assert_eq!(layout.items()[&1], LayoutItem::image("img"));
    }

    #[test]
    fn test_layout_sorted_and_multiple_storytexts() {
        let xml = r#"<layout>
            <storytext><text num="9"/></storytext>
            <other><text num="5"/></other>
            <storytext><text num="3"/></storytext>
        </layout>"#;
        let doc = Document::parse(xml).unwrap();
        let layout = parse_layout(doc.root_element());

        let positions: Vec<_> = layout.items().keys().copied().collect();
        assert_eq!(positions, vec![3, 9]);
    }

    #[test]
    fn test_link_handler_requires_type() {
        let doc = Document::parse("<link>http://x</link>").unwrap();
        let mut story = StoryBuilder::new("1");
        assert!(LinkHandler.handle(doc.root_element(), &mut story).is_err());
    }

    #[test]
    fn test_link_handler_api_is_dropped() {
        let doc = Document::parse(r#"<link type="api">http://api</link>"#).unwrap();
        let mut story = StoryBuilder::new("1");
        LinkHandler.handle(doc.root_element(), &mut story).unwrap();

        let story = story.build();
        assert!(story.link().is_none());
        assert!(story.short_link().is_none());
    }
}
