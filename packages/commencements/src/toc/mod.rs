//! Table of contents for legislation.
//!
//! A table of contents (TOC) is the hierarchical outline of a document:
//! chapters, parts, sections and the subsections and items below them.
//! Sections (or whatever the locale calls them) are "basic units", the
//! smallest independently citable provisions.

mod builder;
mod rules;
mod types;
mod walk;

pub use builder::TocBuilder;
pub use rules::{
    capitalize, create_default_toc_rules, create_za_toc_rules, toc_rules_for_country, TitleStyle,
    TocRules,
};
pub use types::TocElement;
pub use walk::{descend_toc_post_order, descend_toc_pre_order, find_toc_element};
