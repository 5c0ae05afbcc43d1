//! Locale-specific conventions for building a table of contents.

use std::collections::HashMap;

use super::types::TocElement;
use crate::config::DEFAULT_COUNTRY;

/// How the title of a TOC entry of a given type is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// The heading if there is one, otherwise the capitalised type and number.
    Default,

    /// `"{label} {num}"`, followed by `" – {heading}"` when there is a heading.
    Labelled(&'static str),

    /// `"{num} – {heading}"`, or just the heading; empty without a heading.
    NumberedHeading,

    /// `"{num} {heading}"`, or `"Section {num}"` without a heading.
    Section,
}

impl TitleStyle {
    /// Render the title for `item`.
    #[must_use]
    pub fn render(&self, item: &TocElement) -> String {
        let num = item.num.as_deref().filter(|n| !n.is_empty());
        let heading = item.heading.as_deref().filter(|h| !h.is_empty());

        match self {
            Self::Default => match heading {
                Some(h) => h.to_string(),
                None => labelled(&capitalize(&item.kind), num),
            },
            Self::Labelled(label) => {
                let mut title = format!("{label} {}", num.unwrap_or_default());
                if let Some(h) = heading {
                    title.push_str(" – ");
                    title.push_str(h);
                }
                title
            }
            Self::NumberedHeading => match (num, heading) {
                (Some(n), Some(h)) => format!("{n} – {h}"),
                (None, Some(h)) => h.to_string(),
                (_, None) => String::new(),
            },
            Self::Section => match (num, heading) {
                (Some(n), Some(h)) => format!("{n} {h}"),
                (None, Some(h)) => h.to_string(),
                (_, None) => labelled("Section", num),
            },
        }
    }
}

fn labelled(label: &str, num: Option<&str>) -> String {
    match num {
        Some(n) if !n.is_empty() => format!("{label} {n}"),
        _ => label.to_string(),
    }
}

/// Uppercase the first character and lowercase the rest, e.g. `subPart` becomes `Subpart`.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Declarative rules for building the TOC of documents from one legal tradition.
#[derive(Debug, Clone)]
pub struct TocRules {
    /// Country these rules apply to (`default` for the fallback rules).
    pub country: String,

    /// Element types that are basic units.
    pub basic_units: Vec<String>,

    /// Element types included in the TOC (local names, without namespace).
    pub toc_elements: Vec<String>,

    /// Elements that are never descended into, because they hold
    /// metadata, nested documents or subflows.
    pub deadends: Vec<String>,

    /// Element types not numbered uniquely throughout the document; they
    /// need their parent for context (e.g. `chapter/1/part/2`).
    pub non_unique_components: Vec<String>,

    /// Element types that start a component of their own.
    pub component_elements: Vec<String>,

    /// Top-level element types that can never commence.
    pub non_commenceable_types: Vec<String>,

    titles: HashMap<String, TitleStyle>,
}

impl TocRules {
    /// Create empty rules for a country.
    #[must_use]
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            basic_units: Vec::new(),
            toc_elements: Vec::new(),
            deadends: Vec::new(),
            non_unique_components: Vec::new(),
            component_elements: Vec::new(),
            non_commenceable_types: Vec::new(),
            titles: HashMap::new(),
        }
    }

    /// Set the basic unit types.
    #[must_use]
    pub fn with_basic_units(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.basic_units = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the element types included in the TOC.
    #[must_use]
    pub fn with_toc_elements(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.toc_elements = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the elements that are not descended into.
    #[must_use]
    pub fn with_deadends(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.deadends = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the types that need their parent for context.
    #[must_use]
    pub fn with_non_unique_components(
        mut self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.non_unique_components = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the component element types.
    #[must_use]
    pub fn with_component_elements(
        mut self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.component_elements = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the types that never commence.
    #[must_use]
    pub fn with_non_commenceable_types(
        mut self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.non_commenceable_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Register a title style for a type.
    #[must_use]
    pub fn with_title(mut self, kind: impl Into<String>, style: TitleStyle) -> Self {
        self.titles.insert(kind.into(), style);
        self
    }

    /// Check if `kind` is included in the TOC.
    #[must_use]
    pub fn is_toc_element(&self, kind: &str) -> bool {
        self.toc_elements.iter().any(|t| t == kind)
    }

    /// Check if `tag` is never descended into.
    #[must_use]
    pub fn is_deadend(&self, tag: &str) -> bool {
        self.deadends.iter().any(|t| t == tag)
    }

    /// Check if `kind` is a basic unit.
    #[must_use]
    pub fn is_basic_unit(&self, kind: &str) -> bool {
        self.basic_units.iter().any(|t| t == kind)
    }

    /// Check if `kind` needs its parent for context.
    #[must_use]
    pub fn is_non_unique(&self, kind: &str) -> bool {
        self.non_unique_components.iter().any(|t| t == kind)
    }

    /// Check if `kind` starts a component.
    #[must_use]
    pub fn is_component_element(&self, kind: &str) -> bool {
        self.component_elements.iter().any(|t| t == kind)
    }

    /// Friendly title for an entry, using the style registered for its type.
    #[must_use]
    pub fn friendly_title(&self, item: &TocElement) -> String {
        self.titles
            .get(&item.kind)
            .or_else(|| self.titles.get("default"))
            .unwrap_or(&TitleStyle::Default)
            .render(item)
    }

    /// Those top-level items in `toc` that can be commenced.
    ///
    /// These are the numbered entries of the main component, except the
    /// preface, preamble, conclusions and other non-commenceable types.
    #[must_use]
    pub fn commenceable_items(&self, toc: &[TocElement]) -> Vec<TocElement> {
        toc.iter()
            .filter(|item| {
                item.is_main()
                    && item.num.is_some()
                    && !self.non_commenceable_types.iter().any(|t| *t == item.kind)
            })
            .cloned()
            .collect()
    }
}

/// Create the default TOC rules, used when no locale-specific rules exist.
#[must_use]
pub fn create_default_toc_rules() -> TocRules {
    TocRules::new(DEFAULT_COUNTRY)
        .with_basic_units(["section"])
        .with_toc_elements([
            // top-level
            "coverpage", "preface", "preamble", "conclusions", "attachment", "component",
            // hierarchical elements
            "article", "chapter", "clause", "division", "paragraph", "part", "point", "rule",
            "section", "subchapter", "subclause", "subdivision", "subparagraph", "subpart",
            "subrule", "subsection",
            // block elements
            "item",
        ])
        .with_deadends([
            "meta",
            "attachments",
            "components",
            "embeddedStructure",
            "quotedStructure",
            "subFlow",
        ])
        .with_non_unique_components(["chapter", "part"])
        .with_component_elements(["component", "attachment"])
        .with_non_commenceable_types([
            "coverpage",
            "preface",
            "preamble",
            "conclusions",
            "attachment",
            "component",
        ])
}

/// Create TOC rules for South African legislation.
#[must_use]
pub fn create_za_toc_rules() -> TocRules {
    let mut rules = create_default_toc_rules()
        .with_non_unique_components(["chapter", "part", "subpart"])
        .with_title("article", TitleStyle::Labelled("Article"))
        .with_title("chapter", TitleStyle::Labelled("Chapter"))
        .with_title("part", TitleStyle::Labelled("Part"))
        .with_title("subpart", TitleStyle::NumberedHeading)
        .with_title("section", TitleStyle::Section);
    rules.country = "za".to_string();
    rules
}

/// Find the TOC rules for a country, falling back to the default rules.
#[must_use]
pub fn toc_rules_for_country(country: &str) -> TocRules {
    match country {
        "za" => create_za_toc_rules(),
        DEFAULT_COUNTRY => create_default_toc_rules(),
        other => {
            tracing::warn!(country = %other, "No TOC rules for country, using defaults");
            create_default_toc_rules()
        }
    }
}
