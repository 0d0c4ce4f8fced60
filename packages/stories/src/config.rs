//! Configuration constants and URL helpers for the story parser.

use regex::Regex;
use std::sync::LazyLock;

/// Root element name of a podcast feed.
pub const RSS_ROOT: &str = "rss";

/// Container element for podcast items.
pub const RSS_CHANNEL: &str = "channel";

/// Podcast item element.
pub const RSS_ITEM: &str = "item";

/// Container element for NPRML stories.
pub const NPRML_LIST: &str = "list";

/// NPRML story element.
pub const NPRML_STORY: &str = "story";

/// Audio type that marks the playable rendition.
pub const PRIMARY_AUDIO_TYPE: &str = "primary";

/// Enclosure MIME type recognized as an mp3 rendition.
pub const MPEG_MIME_TYPE: &str = "audio/mpeg";

/// Parent type that marks the primary topic.
pub const PRIMARY_TOPIC_TYPE: &str = "primaryTopic";

/// Crop type preferred as the image source.
pub const SQUARE_CROP_TYPE: &str = "square";

/// Size selector appended to every image URL.
///
/// The service stores several renditions per image and picks one with the
/// `s=` query parameter.
pub const IMAGE_SIZE_SELECTOR: &str = "&s=13";

/// Link type for the canonical HTML page.
pub const LINK_TYPE_HTML: &str = "html";

/// Link type for the short URL.
pub const LINK_TYPE_SHORT: &str = "short";

/// Link type for the API resource.
pub const LINK_TYPE_API: &str = "api";

/// Grouping list element.
pub const GROUPING_ITEM: &str = "item";

/// API list ids, one per grouping kind.
pub const TOPICS_LIST_ID: &str = "3002";
pub const COLUMNS_LIST_ID: &str = "3003";
pub const PROGRAMS_LIST_ID: &str = "3004";
pub const SERIES_LIST_ID: &str = "3006";
pub const BIOS_LIST_ID: &str = "3007";
pub const BLOGS_LIST_ID: &str = "3013";
pub const MUSIC_GENRES_LIST_ID: &str = "3018";

/// Matches an existing size selector in an image URL.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SIZE_SELECTOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&s=[0-9]+").expect("valid regex"));

/// Force an image URL to the standard rendition.
///
/// Strips every `&s=<digits>` selector and appends [`IMAGE_SIZE_SELECTOR`].
///
/// # Examples
/// ```
/// use npr_stories::config::normalize_image_url;
///
/// assert_eq!(normalize_image_url("http://i?w=1&s=9"), "http://i?w=1&s=13");
/// assert_eq!(normalize_image_url("http://c"), "http://c&s=13");
/// ```
pub fn normalize_image_url(url: &str) -> String {
    let mut normalized = SIZE_SELECTOR_PATTERN.replace_all(url, "").into_owned();
    normalized.push_str(IMAGE_SIZE_SELECTOR);
    normalized
}
