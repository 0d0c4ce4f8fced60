//! XML navigation helpers over `roxmltree` nodes.

mod utils;

pub use utils::{
    element_children, find_child, find_children, get_attribute, get_tag_name, has_children,
    has_tag, parse_number_attribute, require_attribute, text_content,
};
