//! Handlers for records that relate a story to people, organizations and
//! other resources.

use roxmltree::Node;

use crate::builder::StoryBuilder;
use crate::config::{LINK_TYPE_API, LINK_TYPE_HTML};
use crate::error::Result;
use crate::registry::handler::ElementHandler;
use crate::types::{Byline, Organization, Parent, PullQuote, RelatedLink, Thumbnail, Toenail};
use crate::xml::{element_children, find_child, get_attribute, get_tag_name, text_content};

/// Handler for `<byline>`.
pub struct BylineHandler;

impl ElementHandler for BylineHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_byline(parse_byline(node));
        Ok(())
    }
}

/// Handler for `<organization>`.
pub struct OrganizationHandler;

impl ElementHandler for OrganizationHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_organization(parse_organization(node));
        Ok(())
    }
}

/// Handler for `<parent>`.
pub struct ParentHandler;

impl ElementHandler for ParentHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_parent(parse_parent(node));
        Ok(())
    }
}

/// Handler for `<relatedLink>`.
pub struct RelatedLinkHandler;

impl ElementHandler for RelatedLinkHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_related_link(parse_related_link(node));
        Ok(())
    }
}

/// Handler for `<pullQuote>`.
pub struct PullQuoteHandler;

impl ElementHandler for PullQuoteHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_pull_quote(parse_pull_quote(node));
        Ok(())
    }
}

/// Handler for `<thumbnail>`.
pub struct ThumbnailHandler;

impl ElementHandler for ThumbnailHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_thumbnail(Thumbnail {
            medium: child_text(node, "medium"),
        });
        Ok(())
    }
}

/// Handler for `<toenail>`.
pub struct ToenailHandler;

impl ElementHandler for ToenailHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_toenail(Toenail {
            medium: child_text(node, "medium"),
        });
        Ok(())
    }
}

/// Parse a `<byline>` element.
///
/// Reads `<name>` and the `api` and `html` typed `<link>` children. Other
/// link types are ignored.
pub fn parse_byline(node: Node<'_, '_>) -> Byline {
    let mut byline = Byline::default();

    for child in element_children(node) {
        match get_tag_name(child) {
            "name" => byline.name = Some(text_content(child)),
            "link" => match get_attribute(child, "type") {
                Some(LINK_TYPE_API) => byline.api_link = Some(text_content(child)),
                Some(LINK_TYPE_HTML) => byline.html_link = Some(text_content(child)),
                _ => {}
            },
            _ => {}
        }
    }

    byline
}

/// Parse an `<organization id="...">` element.
///
/// The id comes from the `id` attribute, falling back to `orgId`.
pub fn parse_organization(node: Node<'_, '_>) -> Organization {
    Organization {
        id: get_attribute(node, "id")
            .or_else(|| get_attribute(node, "orgId"))
            .map(str::to_string),
        name: child_text(node, "name"),
        website: child_text(node, "website"),
    }
}

/// Parse a `<parent id type>` element.
///
/// Only the API link is kept; the parent is primary when its type is
/// `primaryTopic`.
pub fn parse_parent(node: Node<'_, '_>) -> Parent {
    let mut title = None;
    let mut api_link = None;

    for child in element_children(node) {
        match get_tag_name(child) {
            "title" => title = Some(text_content(child)),
            "link" if get_attribute(child, "type") == Some(LINK_TYPE_API) => {
                api_link = Some(text_content(child));
            }
            _ => {}
        }
    }

    Parent::new(
        get_attribute(node, "id").map(str::to_string),
        get_attribute(node, "type").map(str::to_string),
        title,
        api_link,
    )
}

/// Parse a `<relatedLink id type>` element.
pub fn parse_related_link(node: Node<'_, '_>) -> RelatedLink {
    let mut related = RelatedLink {
        id: get_attribute(node, "id").map(str::to_string),
        link_type: get_attribute(node, "type").map(str::to_string),
        ..RelatedLink::default()
    };

    for child in element_children(node) {
        match get_tag_name(child) {
            "caption" => related.caption = Some(text_content(child)),
            "link" if get_attribute(child, "type") == Some(LINK_TYPE_HTML) => {
                related.link = Some(text_content(child));
            }
            _ => {}
        }
    }

    related
}

/// Parse a `<pullQuote>` element.
pub fn parse_pull_quote(node: Node<'_, '_>) -> PullQuote {
    PullQuote {
        text: child_text(node, "text"),
        person: child_text(node, "person"),
        date: child_text(node, "date"),
    }
}

fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    find_child(node, tag).map(text_content)
}
