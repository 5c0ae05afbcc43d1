//! Types for the table of contents.

use serde::{Deserialize, Serialize};

use crate::config::MAIN_COMPONENT;

fn main_component() -> String {
    MAIN_COMPONENT.to_string()
}

/// An entry in the table of contents of a document, such as a chapter,
/// part, section or item.
///
/// The tree is strictly owned: a parent owns its children, children are in
/// document order, and no operation in this crate reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocElement {
    /// Element type, e.g. `chapter`, `part`, `section`, `item`.
    ///
    /// Open-ended: only used for labels and locale rules, never for
    /// structural decisions beyond [`TocElement::basic_unit`].
    #[serde(rename = "type")]
    pub kind: String,

    /// Component this entry belongs to (`main` for the body of the document).
    #[serde(default = "main_component")]
    pub component: String,

    /// Path of this entry within its component, e.g. `chapter/2/part/A`.
    #[serde(default)]
    pub subcomponent: Option<String>,

    /// Friendly title, e.g. `Section 2` or `Chapter 1 – Definitions`.
    #[serde(default)]
    pub title: String,

    /// Nested entries, in document order.
    #[serde(default)]
    pub children: Vec<TocElement>,

    /// Whether this is the smallest independently citable unit (usually a section).
    #[serde(default)]
    pub basic_unit: bool,

    /// Heading, excluding the number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Display number, e.g. `1.`, `(a)` or `A`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num: Option<String>,

    /// Element id (`eId`), unique within the document. Empty when the
    /// source element has none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Id qualified by the component id for entries outside the main component.
    #[serde(skip)]
    pub qualified_id: String,
}

impl TocElement {
    /// Create a new entry in the main component.
    #[must_use]
    pub fn new(kind: impl Into<String>, id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            kind: kind.into(),
            component: main_component(),
            subcomponent: None,
            title: String::new(),
            children: Vec::new(),
            basic_unit: false,
            heading: None,
            num: None,
            qualified_id: id.clone(),
            id,
        }
    }

    /// Set the display number.
    #[must_use]
    pub fn with_num(mut self, num: impl Into<String>) -> Self {
        self.num = Some(num.into());
        self
    }

    /// Set the heading.
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set whether this entry is a basic unit.
    #[must_use]
    pub fn with_basic_unit(mut self, basic_unit: bool) -> Self {
        self.basic_unit = basic_unit;
        self
    }

    /// Set the children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = TocElement>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Set the subcomponent path.
    #[must_use]
    pub fn with_subcomponent(mut self, subcomponent: Option<String>) -> Self {
        self.subcomponent = subcomponent;
        self
    }

    /// Place this entry in a component other than `main`.
    ///
    /// The qualified id becomes `{component_id}/{id}`.
    #[must_use]
    pub fn with_component(mut self, component: impl Into<String>, component_id: Option<&str>) -> Self {
        self.component = component.into();
        self.qualified_id = match component_id {
            Some(cid) if self.component != MAIN_COMPONENT => format!("{cid}/{}", self.id),
            _ => self.id.clone(),
        };
        self
    }

    /// Number with surrounding periods removed, e.g. `1.` becomes `1`.
    #[must_use]
    pub fn clean_num(&self) -> String {
        self.num
            .as_deref()
            .map(|n| n.trim_matches('.').to_string())
            .unwrap_or_default()
    }

    /// Whether this entry is in the main component.
    #[must_use]
    pub fn is_main(&self) -> bool {
        self.component == MAIN_COMPONENT
    }
}
