//! Element handlers for story documents.

mod media;
mod relations;
mod text;

pub use media::*;
pub use relations::*;
pub use text::*;
