//! Registry configuration for the two story dialects.

use super::core::ElementRegistry;
use super::handlers::{
    AudioHandler, BylineHandler, EnclosureHandler, HtmlLinkHandler, ImageHandler, LayoutHandler,
    LinkHandler, OrganizationHandler, ParentHandler, PullQuoteHandler, RelatedLinkHandler,
    TextFieldHandler, TextHandler, TextWithHtmlHandler, ThumbnailHandler, ToenailHandler,
};
use crate::builder::StoryField;

/// Create a registry for NPRML `<story>` children.
#[must_use]
pub fn create_nprml_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Scalar fields
    registry.register("title", TextFieldHandler(StoryField::Title));
    registry.register("subtitle", TextFieldHandler(StoryField::Subtitle));
    registry.register("shortTitle", TextFieldHandler(StoryField::ShortTitle));
    registry.register("teaser", TextFieldHandler(StoryField::Teaser));
    registry.register("miniTeaser", TextFieldHandler(StoryField::MiniTeaser));
    registry.register("slug", TextFieldHandler(StoryField::Slug));
    registry.register("storyDate", TextFieldHandler(StoryField::StoryDate));
    registry.register("pubDate", TextFieldHandler(StoryField::PubDate));
    registry.register(
        "lastModifiedDate",
        TextFieldHandler(StoryField::LastModifiedDate),
    );
    registry.register("keywords", TextFieldHandler(StoryField::Keywords));
    registry.register(
        "priorityKeywords",
        TextFieldHandler(StoryField::PriorityKeywords),
    );
    registry.register("link", LinkHandler);

    // Body
    registry.register("text", TextHandler);
    registry.register("textWithHtml", TextWithHtmlHandler);
    registry.register("layout", LayoutHandler);

    // Media
    registry.register("audio", AudioHandler);
    registry.register("image", ImageHandler);

    // Relations
    registry.register("byline", BylineHandler);
    registry.register("organization", OrganizationHandler);
    registry.register("parent", ParentHandler);
    registry.register("relatedLink", RelatedLinkHandler);
    registry.register("pullQuote", PullQuoteHandler);
    registry.register("thumbnail", ThumbnailHandler);
    registry.register("toenail", ToenailHandler);

    // Known elements the story model has no place for
    registry.skip([
        "show",
        "transcript",
        "container",
        "multimedia",
        "album",
        "externalAsset",
    ]);

    registry
}

/// Create a registry for podcast `<item>` children.
#[must_use]
pub fn create_rss_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    registry.register("title", TextFieldHandler(StoryField::Title));
    registry.register("link", HtmlLinkHandler);
    registry.register("description", TextFieldHandler(StoryField::Teaser));
    registry.register("pubDate", TextFieldHandler(StoryField::PubDate));
    registry.register("enclosure", EnclosureHandler);

    registry
}
