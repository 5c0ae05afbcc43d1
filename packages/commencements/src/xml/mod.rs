//! XML helpers built on `roxmltree`.

mod utils;

pub use utils::{
    collect_text_excluding, element_children, find_child, find_descendant, get_tag_name, get_text,
    has_tag,
};
