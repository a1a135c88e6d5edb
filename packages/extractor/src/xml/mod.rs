//! XML navigation helpers.

mod utils;

pub use utils::{
    direct_text, element_children, find_child, find_child_by_attribute, find_children, get_text,
    get_tag_name, has_tag,
};
