//! Accumulator used while walking a story element.

use std::collections::BTreeMap;

use crate::config::{LINK_TYPE_API, LINK_TYPE_HTML, LINK_TYPE_SHORT};
use crate::types::{
    Audio, Byline, Image, Layout, Organization, Parent, PullQuote, RelatedLink, Story, Text,
    TextWithHtml, Thumbnail, Toenail,
};

/// Scalar text fields of a story.
///
/// Lets one handler type serve every element that maps to a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryField {
    Title,
    Subtitle,
    ShortTitle,
    Teaser,
    MiniTeaser,
    Slug,
    StoryDate,
    PubDate,
    LastModifiedDate,
    Keywords,
    PriorityKeywords,
}

/// Builder for [`Story`].
///
/// Scalars are last-write-wins, collections start empty and are appended to.
/// [`StoryBuilder::build`] consumes the builder.
#[derive(Debug, Clone)]
pub struct StoryBuilder {
    id: String,
    link: Option<String>,
    short_link: Option<String>,
    title: Option<String>,
    subtitle: Option<String>,
    short_title: Option<String>,
    teaser: Option<String>,
    mini_teaser: Option<String>,
    slug: Option<String>,
    story_date: Option<String>,
    pub_date: Option<String>,
    last_modified_date: Option<String>,
    keywords: Option<String>,
    priority_keywords: Option<String>,
    bylines: Vec<Byline>,
    thumbnails: Vec<Thumbnail>,
    toenails: Vec<Toenail>,
    organizations: Vec<Organization>,
    audios: Vec<Audio>,
    images: BTreeMap<String, Image>,
    related_links: Vec<RelatedLink>,
    pull_quotes: Vec<PullQuote>,
    text: Option<Text>,
    text_with_html: Option<TextWithHtml>,
    parents: Vec<Parent>,
    layout: Option<Layout>,
}

impl StoryBuilder {
    /// Create a builder for the story with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: None,
            short_link: None,
            title: None,
            subtitle: None,
            short_title: None,
            teaser: None,
            mini_teaser: None,
            slug: None,
            story_date: None,
            pub_date: None,
            last_modified_date: None,
            keywords: None,
            priority_keywords: None,
            bylines: Vec::new(),
            thumbnails: Vec::new(),
            toenails: Vec::new(),
            organizations: Vec::new(),
            audios: Vec::new(),
            images: BTreeMap::new(),
            related_links: Vec::new(),
            pull_quotes: Vec::new(),
            text: None,
            text_with_html: None,
            parents: Vec::new(),
            layout: None,
        }
    }

    /// Id the story will be built with.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set a link according to its type.
    ///
    /// `html` sets the canonical link and `short` the short link. API links
    /// and unknown types are dropped.
    pub fn with_link(&mut self, link: impl Into<String>, link_type: &str) -> &mut Self {
        match link_type {
            LINK_TYPE_HTML => self.link = Some(link.into()),
            LINK_TYPE_SHORT => self.short_link = Some(link.into()),
            LINK_TYPE_API => {}
            _ => {}
        }
        self
    }

    /// Set a scalar text field.
    pub fn set_field(&mut self, field: StoryField, value: impl Into<String>) -> &mut Self {
        let value = Some(value.into());
        match field {
            StoryField::Title => self.title = value,
            StoryField::Subtitle => self.subtitle = value,
            StoryField::ShortTitle => self.short_title = value,
            StoryField::Teaser => self.teaser = value,
            StoryField::MiniTeaser => self.mini_teaser = value,
            StoryField::Slug => self.slug = value,
            StoryField::StoryDate => self.story_date = value,
            StoryField::PubDate => self.pub_date = value,
            StoryField::LastModifiedDate => self.last_modified_date = value,
            StoryField::Keywords => self.keywords = value,
            StoryField::PriorityKeywords => self.priority_keywords = value,
        }
        self
    }

    pub fn with_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.set_field(StoryField::Title, title)
    }

    pub fn with_teaser(&mut self, teaser: impl Into<String>) -> &mut Self {
        self.set_field(StoryField::Teaser, teaser)
    }

    pub fn with_story_date(&mut self, story_date: impl Into<String>) -> &mut Self {
        self.set_field(StoryField::StoryDate, story_date)
    }

    pub fn with_pub_date(&mut self, pub_date: impl Into<String>) -> &mut Self {
        self.set_field(StoryField::PubDate, pub_date)
    }

    pub fn with_byline(&mut self, byline: Byline) -> &mut Self {
        self.bylines.push(byline);
        self
    }

    pub fn with_thumbnail(&mut self, thumbnail: Thumbnail) -> &mut Self {
        self.thumbnails.push(thumbnail);
        self
    }

    pub fn with_toenail(&mut self, toenail: Toenail) -> &mut Self {
        self.toenails.push(toenail);
        self
    }

    pub fn with_organization(&mut self, organization: Organization) -> &mut Self {
        self.organizations.push(organization);
        self
    }

    pub fn with_audio(&mut self, audio: Audio) -> &mut Self {
        self.audios.push(audio);
        self
    }

    /// Insert an image under the given id, replacing any earlier one.
    pub fn with_image(&mut self, id: impl Into<String>, image: Image) -> &mut Self {
        self.images.insert(id.into(), image);
        self
    }

    pub fn with_related_link(&mut self, related_link: RelatedLink) -> &mut Self {
        self.related_links.push(related_link);
        self
    }

    pub fn with_pull_quote(&mut self, pull_quote: PullQuote) -> &mut Self {
        self.pull_quotes.push(pull_quote);
        self
    }

    pub fn with_text(&mut self, text: Text) -> &mut Self {
        self.text = Some(text);
        self
    }

    pub fn with_text_with_html(&mut self, text_with_html: TextWithHtml) -> &mut Self {
        self.text_with_html = Some(text_with_html);
        self
    }

    pub fn with_parent(&mut self, parent: Parent) -> &mut Self {
        self.parents.push(parent);
        self
    }

    pub fn with_layout(&mut self, layout: Layout) -> &mut Self {
        self.layout = Some(layout);
        self
    }

    /// Finish the story.
    #[must_use]
    pub fn build(self) -> Story {
        Story {
            id: self.id,
            link: self.link,
            short_link: self.short_link,
            title: self.title,
            subtitle: self.subtitle,
            short_title: self.short_title,
            teaser: self.teaser,
            mini_teaser: self.mini_teaser,
            slug: self.slug,
            story_date: self.story_date,
            pub_date: self.pub_date,
            last_modified_date: self.last_modified_date,
            keywords: self.keywords,
            priority_keywords: self.priority_keywords,
            bylines: self.bylines,
            thumbnails: self.thumbnails,
            toenails: self.toenails,
            organizations: self.organizations,
            audios: self.audios,
            images: self.images,
            related_links: self.related_links,
            pull_quotes: self.pull_quotes,
            text: self.text,
            text_with_html: self.text_with_html,
            parents: self.parents,
            layout: self.layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_has_empty_collections() {
        let story = StoryBuilder::new("100").build();

        assert_eq!(story.id(), "100");
        assert!(story.bylines().is_empty());
        assert!(story.thumbnails().is_empty());
        assert!(story.toenails().is_empty());
        assert!(story.organizations().is_empty());
        assert!(story.audios().is_empty());
        assert!(story.images().is_empty());
        assert!(story.related_links().is_empty());
        assert!(story.pull_quotes().is_empty());
        assert!(story.parents().is_empty());
        assert!(story.title().is_none());
        assert!(story.text().is_none());
        assert!(story.layout().is_none());
    }

    #[test]
    fn test_with_link_dispatch() {
        let mut builder = StoryBuilder::new("1");
        builder
            .with_link("http://npr.org/story", "html")
            .with_link("http://n.pr/abc", "short");
        let story = builder.build();

        assert_eq!(story.link(), Some("http://npr.org/story"));
        assert_eq!(story.short_link(), Some("http://n.pr/abc"));
    }

    #[test]
    fn test_with_link_api_and_unknown_are_dropped() {
        let mut builder = StoryBuilder::new("1");
        builder
            .with_link("http://api.npr.org/query?id=1", "api")
            .with_link("http://m.npr.org/1", "mobile");
        let story = builder.build();

        assert!(story.link().is_none());
        assert!(story.short_link().is_none());
    }

    #[test]
    fn test_scalars_last_write_wins() {
        let mut builder = StoryBuilder::new("1");
        builder.with_title("Draft").with_title("Final");
        builder.set_field(StoryField::Slug, "Politics");
        builder.set_field(StoryField::Keywords, "election");
        let story = builder.build();

        assert_eq!(story.title(), Some("Final"));
        assert_eq!(story.slug(), Some("Politics"));
        assert_eq!(story.keywords(), Some("election"));
    }

    #[test]
    fn test_collections_append() {
        let mut builder = StoryBuilder::new("1");
        builder
            .with_byline(Byline {
                name: Some("A".to_string()),
                ..Byline::default()
            })
            .with_byline(Byline {
                name: Some("B".to_string()),
                ..Byline::default()
            });
        let story = builder.build();

        let names: Vec<_> = story
            .bylines()
            .iter()
            .filter_map(|b| b.name.as_deref())
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_with_image_replaces_same_id() {
        let mut builder = StoryBuilder::new("1");
        builder
            .with_image(
                "img",
                Image {
                    caption: Some("first".to_string()),
                    ..Image::default()
                },
            )
            .with_image(
                "img",
                Image {
                    caption: Some("second".to_string()),
                    ..Image::default()
                },
            );
        let story = builder.build();

        assert_eq!(story.images().len(), 1);
        assert_eq!(story.images()["img"].caption.as_deref(), Some("second"));
    }
}
