//! Media element handlers: audio renditions, podcast enclosures and images.

use roxmltree::Node;

use crate::builder::StoryBuilder;
use crate::config::{normalize_image_url, MPEG_MIME_TYPE, PRIMARY_AUDIO_TYPE, SQUARE_CROP_TYPE};
use crate::error::Result;
use crate::registry::handler::ElementHandler;
use crate::types::{Audio, Format, Image};
use crate::xml::{element_children, get_attribute, get_tag_name, text_content};

/// Handler for NPRML `<audio>` elements.
pub struct AudioHandler;

impl ElementHandler for AudioHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_audio(parse_audio(node));
        Ok(())
    }
}

/// Handler for podcast `<enclosure>` elements.
pub struct EnclosureHandler;

impl ElementHandler for EnclosureHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        story.with_audio(parse_podcast_enclosure(node));
        Ok(())
    }
}

/// Handler for NPRML `<image>` elements.
///
/// Images are stored under their own id; an image without one cannot be
/// referenced by the layout and is dropped.
pub struct ImageHandler;

impl ElementHandler for ImageHandler {
    fn handle(&self, node: Node<'_, '_>, story: &mut StoryBuilder) -> Result<()> {
        let image = parse_image(node);
        match image.id.clone() {
            Some(id) => {
                story.with_image(id, image);
            }
            None => {
                tracing::warn!(story = %story.id(), "Image without id, dropping");
            }
        }
        Ok(())
    }
}

/// Parse an NPRML `<audio type="...">` element.
///
/// Reads the duration and one [`Format`] per `<format>` child. The audio
/// id is not read.
pub fn parse_audio(node: Node<'_, '_>) -> Audio {
    let mut audio = Audio {
        audio_type: get_attribute(node, "type").map(str::to_string),
        ..Audio::default()
    };

    for child in element_children(node) {
        match get_tag_name(child) {
            "duration" => audio.duration = Some(text_content(child)),
            "format" => audio.formats.push(parse_format(child)),
            _ => {}
        }
    }

    audio
}

/// Parse a `<format>` element with `<mp3>`, `<wm>` and `<rm>` children.
pub fn parse_format(node: Node<'_, '_>) -> Format {
    let mut format = Format::default();

    for child in element_children(node) {
        match get_tag_name(child) {
            "mp3" => format.mp3 = Some(text_content(child)),
            "wm" => format.wm = Some(text_content(child)),
            "rm" => format.rm = Some(text_content(child)),
            _ => {}
        }
    }

    format
}

/// Turn a podcast `<enclosure url type duration>` into a primary audio.
///
/// Only `audio/mpeg` enclosures contribute a format; other types still
/// yield an audio, with no formats.
pub fn parse_podcast_enclosure(node: Node<'_, '_>) -> Audio {
    let url = get_attribute(node, "url");
    let is_mpeg = get_attribute(node, "type") == Some(MPEG_MIME_TYPE);

    let formats = match url {
        Some(url) if is_mpeg => vec![Format::mp3(url)],
        _ => Vec::new(),
    };

    Audio {
        id: None,
        audio_type: Some(PRIMARY_AUDIO_TYPE.to_string()),
        duration: get_attribute(node, "duration").map(str::to_string),
        formats,
    }
}

/// Parse an NPRML `<image>` element.
///
/// Children are read in order until the first square crop that has a
/// `src`; that crop supplies the source and ends the walk, so children
/// after it are not read. Without such a crop the image's own `src` is
/// used. Either way the source is normalized with [`normalize_image_url`].
pub fn parse_image(node: Node<'_, '_>) -> Image {
    let mut image = Image {
        id: get_attribute(node, "id").map(str::to_string),
        image_type: get_attribute(node, "type").map(str::to_string),
        width: get_attribute(node, "width").map(str::to_string),
        has_border: get_attribute(node, "hasBorder").map(str::to_string),
        ..Image::default()
    };

    let mut crop_src = None;
    for child in element_children(node) {
        match get_tag_name(child) {
            "crop" => {
                if let Some(src) = square_crop_src(child) {
                    crop_src = Some(src);
                    break;
                }
            }
            "caption" => image.caption = Some(text_content(child)),
            "producer" => image.producer = Some(text_content(child)),
            "provider" => image.provider = Some(text_content(child)),
            "copyright" => image.copyright = Some(text_content(child)),
            "link" => image.link_url = get_attribute(child, "url").map(str::to_string),
            _ => {}
        }
    }

    let src = crop_src.or_else(|| get_attribute(node, "src"));
    image.src = match src {
        Some(src) => Some(normalize_image_url(src)),
        None => {
            tracing::warn!(
                image = image.id.as_deref().unwrap_or_default(),
                "Image has no source URL, skipping size normalization"
            );
            None
        }
    };

    image
}

/// Source of a `<crop>` when it is a square crop that has one.
fn square_crop_src<'a>(crop: Node<'a, '_>) -> Option<&'a str> {
    if get_attribute(crop, "type") == Some(SQUARE_CROP_TYPE) {
        get_attribute(crop, "src")
    } else {
        None
    }
}
