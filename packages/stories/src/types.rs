//! Core data types for the story parser.
//!
//! A [`Story`] owns all of its sub-records. Layout items point at images and
//! paragraphs by opaque id only, so nothing in the model refers back to its
//! parent.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::{PRIMARY_AUDIO_TYPE, PRIMARY_TOPIC_TYPE};

/// Author credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Byline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Author page on the website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,

    /// Author resource in the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_link: Option<String>,
}

/// Thumbnail image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

/// Smallest thumbnail rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Toenail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

/// Member station or producer credited on a story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Candidate URLs for one audio rendition, one per container format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Format {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp3: Option<String>,

    /// Windows Media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm: Option<String>,

    /// RealMedia.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rm: Option<String>,
}

impl Format {
    /// Create a format with only an mp3 URL.
    #[must_use]
    pub fn mp3(url: impl Into<String>) -> Self {
        Self {
            mp3: Some(url.into()),
            wm: None,
            rm: None,
        }
    }

    /// First available URL in preference order mp3 > wm > rm.
    #[must_use]
    pub fn preferred_url(&self) -> Option<&str> {
        self.mp3
            .as_deref()
            .or(self.wm.as_deref())
            .or(self.rm.as_deref())
    }
}

/// Audio attached to a story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Audio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Rendition role, `"primary"` for the playable one.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<String>,

    /// Duration as published (usually seconds), not validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    pub formats: Vec<Format>,
}

impl Audio {
    /// Check whether this is the primary (playable) rendition.
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.audio_type.as_deref() == Some(PRIMARY_AUDIO_TYPE)
    }
}

/// Image attached to a story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,

    /// Normalized source URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_border: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl Image {
    /// Credit line built from producer and provider.
    ///
    /// # Examples
    /// ```
    /// use npr_stories::types::Image;
    ///
    /// let image = Image {
    ///     producer: Some("Jane Doe".to_string()),
    ///     provider: Some("AP".to_string()),
    ///     ..Image::default()
    /// };
    /// assert_eq!(image.attribution(), "Jane Doe/AP");
    /// ```
    #[must_use]
    pub fn attribution(&self) -> String {
        let producer = self.producer.as_deref().filter(|s| !s.is_empty());
        let provider = self.provider.as_deref().filter(|s| !s.is_empty());

        match (producer, provider) {
            (Some(producer), Some(provider)) => format!("{producer}/{provider}"),
            (Some(credit), None) | (None, Some(credit)) => credit.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// Link to a related resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RelatedLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Quotation highlighted in the story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Plain story body, keyed by paragraph number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Text {
    paragraphs: BTreeMap<i32, String>,
}

impl Text {
    #[must_use]
    pub fn new(paragraphs: BTreeMap<i32, String>) -> Self {
        Self { paragraphs }
    }

    /// Paragraphs in ascending number order.
    #[must_use]
    pub fn paragraphs(&self) -> &BTreeMap<i32, String> {
        &self.paragraphs
    }
}

/// Story body with inline HTML, keyed by paragraph number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TextWithHtml {
    paragraphs: BTreeMap<i32, String>,
}

impl TextWithHtml {
    #[must_use]
    pub fn new(paragraphs: BTreeMap<i32, String>) -> Self {
        Self { paragraphs }
    }

    /// Paragraphs in ascending number order.
    #[must_use]
    pub fn paragraphs(&self) -> &BTreeMap<i32, String> {
        &self.paragraphs
    }
}

/// Topic, program or other grouping a story belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,

    /// True iff the type is `primaryTopic`.
    pub is_primary: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_link: Option<String>,
}

impl Parent {
    /// Create a parent, deriving `is_primary` from the type.
    #[must_use]
    pub fn new(
        id: Option<String>,
        parent_type: Option<String>,
        title: Option<String>,
        api_link: Option<String>,
    ) -> Self {
        let is_primary = parent_type.as_deref() == Some(PRIMARY_TOPIC_TYPE);
        Self {
            id,
            parent_type,
            is_primary,
            title,
            api_link,
        }
    }
}

/// What a layout item points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutItemKind {
    /// A paragraph of the story body.
    Text,
    /// An entry of [`Story::images`].
    Image,
}

/// One slot of the editorial reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutItem {
    pub kind: LayoutItemKind,

    /// Paragraph number (as text) or image id.
    pub item_id: String,
}

impl LayoutItem {
    #[must_use]
    pub fn text(paragraph: impl Into<String>) -> Self {
        Self {
            kind: LayoutItemKind::Text,
            item_id: paragraph.into(),
        }
    }

    #[must_use]
    pub fn image(ref_id: impl Into<String>) -> Self {
        Self {
            kind: LayoutItemKind::Image,
            item_id: ref_id.into(),
        }
    }
}

/// Reading order interleaving paragraphs and images.
///
/// References are not checked against the story's paragraphs or images;
/// consumers must tolerate dangling ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Layout {
    items: BTreeMap<i32, LayoutItem>,
}

impl Layout {
    #[must_use]
    pub fn new(items: BTreeMap<i32, LayoutItem>) -> Self {
        Self { items }
    }

    /// Items in ascending position order.
    #[must_use]
    pub fn items(&self) -> &BTreeMap<i32, LayoutItem> {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A parsed story.
///
/// Built once by [`crate::builder::StoryBuilder`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub(crate) id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) short_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) short_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) teaser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) mini_teaser: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) story_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) pub_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last_modified_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) priority_keywords: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) bylines: Vec<Byline>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) thumbnails: Vec<Thumbnail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) toenails: Vec<Toenail>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) organizations: Vec<Organization>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) audios: Vec<Audio>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) images: BTreeMap<String, Image>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related_links: Vec<RelatedLink>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) pull_quotes: Vec<PullQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) text_with_html: Option<TextWithHtml>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) parents: Vec<Parent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) layout: Option<Layout>,
}

impl Story {
    /// Story identifier; synthesized for podcast items.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Canonical HTML page.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    #[must_use]
    pub fn short_link(&self) -> Option<&str> {
        self.short_link.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn short_title(&self) -> Option<&str> {
        self.short_title.as_deref()
    }

    #[must_use]
    pub fn teaser(&self) -> Option<&str> {
        self.teaser.as_deref()
    }

    #[must_use]
    pub fn mini_teaser(&self) -> Option<&str> {
        self.mini_teaser.as_deref()
    }

    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Story date, falling back to the publication date.
    #[must_use]
    pub fn story_date(&self) -> Option<&str> {
        self.story_date.as_deref().or(self.pub_date.as_deref())
    }

    #[must_use]
    pub fn pub_date(&self) -> Option<&str> {
        self.pub_date.as_deref()
    }

    #[must_use]
    pub fn last_modified_date(&self) -> Option<&str> {
        self.last_modified_date.as_deref()
    }

    #[must_use]
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }

    #[must_use]
    pub fn priority_keywords(&self) -> Option<&str> {
        self.priority_keywords.as_deref()
    }

    #[must_use]
    pub fn bylines(&self) -> &[Byline] {
        &self.bylines
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[Thumbnail] {
        &self.thumbnails
    }

    #[must_use]
    pub fn toenails(&self) -> &[Toenail] {
        &self.toenails
    }

    #[must_use]
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    #[must_use]
    pub fn audios(&self) -> &[Audio] {
        &self.audios
    }

    /// Images keyed by their own id.
    #[must_use]
    pub fn images(&self) -> &BTreeMap<String, Image> {
        &self.images
    }

    #[must_use]
    pub fn related_links(&self) -> &[RelatedLink] {
        &self.related_links
    }

    #[must_use]
    pub fn pull_quotes(&self) -> &[PullQuote] {
        &self.pull_quotes
    }

    #[must_use]
    pub fn text(&self) -> Option<&Text> {
        self.text.as_ref()
    }

    #[must_use]
    pub fn text_with_html(&self) -> Option<&TextWithHtml> {
        self.text_with_html.as_ref()
    }

    #[must_use]
    pub fn parents(&self) -> &[Parent] {
        &self.parents
    }

    /// Reading order; only NPRML stories carry one.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Duration of the first audio, if any.
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        self.audios.first().and_then(|a| a.duration.as_deref())
    }

    /// First audio of type `"primary"`.
    #[must_use]
    pub fn playable(&self) -> Option<&Audio> {
        self.audios.iter().find(|a| a.is_primary())
    }

    /// First mp3 URL of the playable audio.
    #[must_use]
    pub fn playable_url(&self) -> Option<&str> {
        self.playable()?
            .formats
            .iter()
            .find_map(|f| f.mp3.as_deref())
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StoryBuilder;

    fn audio(audio_type: &str, formats: Vec<Format>) -> Audio {
        Audio {
            audio_type: Some(audio_type.to_string()),
            formats,
            ..Audio::default()
        }
    }

    #[test]
    fn test_attribution() {
        let mut image = Image::default();
        assert_eq!(image.attribution(), "");

        image.provider = Some("AP".to_string());
        assert_eq!(image.attribution(), "AP");

        image.producer = Some("Jane Doe".to_string());
        assert_eq!(image.attribution(), "Jane Doe/AP");

        image.provider = Some(String::new());
        assert_eq!(image.attribution(), "Jane Doe");
    }

    #[test]
    fn test_format_preferred_url() {
        let format = Format {
            mp3: None,
            wm: Some("http://a.wm".to_string()),
            rm: Some("http://a.rm".to_string()),
        };
        assert_eq!(format.preferred_url(), Some("http://a.wm"));
        assert_eq!(Format::mp3("http://a.mp3").preferred_url(), Some("http://a.mp3"));
        assert_eq!(Format::default().preferred_url(), None);
    }

    #[test]
    fn test_parent_is_primary() {
        let primary = Parent::new(None, Some("primaryTopic".to_string()), None, None);
        assert!(primary.is_primary);

        let topic = Parent::new(None, Some("topic".to_string()), None, None);
        assert!(!topic.is_primary);

        let untyped = Parent::new(None, None, None, None);
        assert!(!untyped.is_primary);
    }

    #[test]
    fn test_story_date_falls_back_to_pub_date() {
        let mut builder = StoryBuilder::new("1");
        builder.with_pub_date("Mon, 01 Mar 2010");
        let story = builder.build();
        assert_eq!(story.story_date(), Some("Mon, 01 Mar 2010"));

        let mut builder = StoryBuilder::new("2");
        builder
            .with_pub_date("Mon, 01 Mar 2010")
            .with_story_date("Sun, 28 Feb 2010");
        let story = builder.build();
        assert_eq!(story.story_date(), Some("Sun, 28 Feb 2010"));
        assert_eq!(story.pub_date(), Some("Mon, 01 Mar 2010"));

        assert_eq!(StoryBuilder::new("3").build().story_date(), None);
    }

    #[test]
    fn test_duration_uses_first_audio() {
        let mut builder = StoryBuilder::new("1");
        assert_eq!(StoryBuilder::new("0").build().duration(), None);

        builder
            .with_audio(Audio {
                duration: Some("120".to_string()),
                ..Audio::default()
            })
            .with_audio(Audio {
                duration: Some("30".to_string()),
                ..Audio::default()
            });
        assert_eq!(builder.build().duration(), Some("120"));
    }

    #[test]
    fn test_playable_selects_first_primary() {
        let mut builder = StoryBuilder::new("1");
        builder
            .with_audio(audio("standard", vec![Format::mp3("http://standard.mp3")]))
            .with_audio(audio("primary", vec![Format::mp3("http://first.mp3")]))
            .with_audio(audio("primary", vec![Format::mp3("http://second.mp3")]));
        let story = builder.build();

        let playable = story.playable().unwrap();
        assert!(playable.is_primary());
        assert_eq!(story.playable_url(), Some("http://first.mp3"));
    }

    #[test]
    fn test_playable_none_without_primary() {
        let mut builder = StoryBuilder::new("1");
        builder.with_audio(audio("standard", vec![Format::mp3("http://a.mp3")]));
        let story = builder.build();

        assert!(story.playable().is_none());
        assert!(story.playable_url().is_none());
    }

    #[test]
    fn test_playable_url_skips_formats_without_mp3() {
        let mut builder = StoryBuilder::new("1");
        builder.with_audio(audio(
            "primary",
            vec![
                Format {
                    wm: Some("http://a.wm".to_string()),
                    ..Format::default()
                },
                Format::mp3("http://a.mp3"),
            ],
        ));
        assert_eq!(builder.build().playable_url(), Some("http://a.mp3"));
    }

    #[test]
    fn test_playable_url_without_any_mp3() {
        let mut builder = StoryBuilder::new("1");
        builder.with_audio(audio(
            "primary",
            vec![Format {
                rm: Some("http://a.rm".to_string()),
                ..Format::default()
            }],
        ));
        let story = builder.build();
        assert!(story.playable().is_some());
        assert_eq!(story.playable_url(), None);
    }

    #[test]
    fn test_display_writes_title() {
        let mut builder = StoryBuilder::new("1");
        builder.with_title("Morning Edition");
        assert_eq!(builder.build().to_string(), "Morning Edition");
        assert_eq!(StoryBuilder::new("2").build().to_string(), "");
    }

    #[test]
    fn test_layout_item_kind_serialization() {
        let yaml = serde_yaml_ng::to_string(&LayoutItem::image("img-A")).unwrap();
        assert!(yaml.contains("kind: image"));
        assert!(yaml.contains("item_id: img-A"));
    }
}
