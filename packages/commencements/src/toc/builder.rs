//! Builds a table of contents from an Akoma Ntoso document.

use roxmltree::{Document, Node};

use super::rules::{capitalize, TocRules};
use super::types::TocElement;
use crate::config::MAIN_COMPONENT;
use crate::error::{CommencementsError, Result};
use crate::xml::{
    collect_text_excluding, element_children, find_child, find_descendant, get_tag_name, get_text,
};

/// Tag of the heading child of a TOC element.
const HEADING_TAG: &str = "heading";

/// Tag of the number child of a TOC element.
const NUM_TAG: &str = "num";

/// Notes inside headings are not part of the heading text.
const AUTHORIAL_NOTE_TAG: &str = "authorialNote";

/// Builds the table of contents for a document.
///
/// A table of contents is a tree of [`TocElement`]s, one for each element of
/// interest (chapters, parts, sections, ...). It is assembled from the
/// element types listed in [`TocRules::toc_elements`]; other elements are
/// transparent and their TOC descendants are hoisted into the nearest
/// TOC ancestor.
pub struct TocBuilder {
    rules: TocRules,
}

/// A component of a document: its name, id and root element.
struct Component<'a, 'input> {
    name: String,
    id: Option<String>,
    element: Node<'a, 'input>,
}

impl TocBuilder {
    /// Create a new builder for the given rules.
    #[must_use]
    pub fn new(rules: TocRules) -> Self {
        Self { rules }
    }

    /// The rules this builder applies.
    #[must_use]
    pub fn rules(&self) -> &TocRules {
        &self.rules
    }

    /// Parse `xml` and build its table of contents.
    pub fn table_of_contents_from_str(&self, xml: &str) -> Result<Vec<TocElement>> {
        let doc = Document::parse(xml)?;
        self.table_of_contents(&doc)
    }

    /// Build the table of contents of a parsed document.
    ///
    /// Entries of the main body come first, followed by those of each
    /// attachment or component, in document order.
    pub fn table_of_contents(&self, doc: &Document<'_>) -> Result<Vec<TocElement>> {
        let mut toc = Vec::new();
        for component in self.components(doc)? {
            toc.extend(self.process_elements(
                &component.name,
                component.id.as_deref(),
                [component.element],
                None,
            ));
        }
        Ok(toc)
    }

    /// The top-level items of `toc` that can be commenced.
    #[must_use]
    pub fn commenceable_items(&self, toc: &[TocElement]) -> Vec<TocElement> {
        self.rules.commenceable_items(toc)
    }

    /// Find the main document element and its attachments.
    fn components<'a, 'input: 'a>(
        &self,
        doc: &'a Document<'input>,
    ) -> Result<Vec<Component<'a, 'input>>> {
        let root = doc.root_element();

        // <akomaNtoso><act>...</act></akomaNtoso>; a bare <act> is accepted too
        let main = if get_tag_name(root) == "akomaNtoso" {
            element_children(root)
                .next()
                .ok_or_else(|| CommencementsError::MissingElement {
                    element: "document".to_string(),
                    context: "akomaNtoso".to_string(),
                })?
        } else {
            root
        };

        let mut components = vec![Component {
            name: MAIN_COMPONENT.to_string(),
            id: None,
            element: main,
        }];

        for element in main.descendants().skip(1) {
            if element.is_element() && self.rules.is_component_element(get_tag_name(element)) {
                let id = element_id(element);
                components.push(Component {
                    name: id.clone(),
                    id: Some(id),
                    element,
                });
            }
        }

        Ok(components)
    }

    /// Process `elements` and their descendants into a (possibly empty) list of entries.
    fn process_elements<'a, 'input: 'a>(
        &self,
        component: &str,
        component_id: Option<&str>,
        elements: impl IntoIterator<Item = Node<'a, 'input>>,
        parent: Option<&TocElement>,
    ) -> Vec<TocElement> {
        let mut items = Vec::new();

        for element in elements {
            if !element.is_element() {
                continue;
            }

            let tag = get_tag_name(element);

            // nested documents, subflows and metadata are never part of the TOC
            if self.rules.is_deadend(tag) {
                continue;
            }

            if let Some(kind) = self.toc_kind(element) {
                let mut item = self.make_toc_entry(element, kind, component, component_id, parent);
                let children =
                    self.process_elements(component, component_id, element.children(), Some(&item));
                item.children = children;
                items.push(item);
            } else {
                items.extend(self.process_elements(
                    component,
                    component_id,
                    element.children(),
                    parent,
                ));
            }
        }

        items
    }

    /// The TOC type of an element, if it belongs in the TOC.
    ///
    /// Akoma Ntoso 2.0 crossheadings are `<hcontainer name="crossheading">`.
    fn toc_kind<'a>(&self, element: Node<'a, '_>) -> Option<&'a str> {
        let tag = get_tag_name(element);
        if self.rules.is_toc_element(tag) {
            Some(tag)
        } else if tag == "hcontainer"
            && element.attribute("name") == Some("crossheading")
            && self.rules.is_toc_element("crossheading")
        {
            Some("crossheading")
        } else {
            None
        }
    }

    fn make_toc_entry(
        &self,
        element: Node<'_, '_>,
        kind: &str,
        component: &str,
        component_id: Option<&str>,
        parent: Option<&TocElement>,
    ) -> TocElement {
        let id = element_id(element);
        if id.is_empty() {
            tracing::warn!(kind = %kind, component = %component, "TOC element without eId");
        }

        let mut heading = find_child(element, HEADING_TAG)
            .map(|h| collect_text_excluding(h, AUTHORIAL_NOTE_TAG).trim().to_string())
            .filter(|h| !h.is_empty());

        let is_component = self.rules.is_component_element(kind);
        if heading.is_none() && is_component {
            heading = component_heading(element);
        }

        let num = find_child(element, NUM_TAG)
            .map(get_text)
            .filter(|n| !n.is_empty());

        let subcomponent = if is_component {
            None
        } else {
            // chapters and parts aren't numbered uniquely, so a part inside a
            // chapter needs the chapter for context, e.g. chapter/1/part/2
            let mut path = match parent {
                Some(p) if self.rules.is_non_unique(kind) && self.rules.is_non_unique(&p.kind) => {
                    p.subcomponent
                        .as_deref()
                        .map(|s| format!("{s}/"))
                        .unwrap_or_default()
                }
                _ => String::new(),
            };
            path.push_str(kind);
            if let Some(n) = &num {
                path.push('/');
                path.push_str(n.trim_matches(|c| c == '.' || c == '(' || c == ')'));
            }
            Some(path)
        };

        let mut item = TocElement::new(kind, id)
            .with_component(component, component_id)
            .with_subcomponent(subcomponent)
            .with_basic_unit(self.rules.is_basic_unit(kind));
        item.heading = heading;
        item.num = num;
        item.title = self.rules.friendly_title(&item);
        item
    }
}

/// The id of an element: `eId` (Akoma Ntoso 3), falling back to `id` (Akoma Ntoso 2).
fn element_id(element: Node<'_, '_>) -> String {
    element
        .attribute("eId")
        .or_else(|| element.attribute("id"))
        .unwrap_or_default()
        .to_string()
}

/// Heading for an attachment or component without a `<heading>`.
///
/// Uses the FRBR alias from the component's metadata, then the name of its document.
fn component_heading(element: Node<'_, '_>) -> Option<String> {
    let alias = find_descendant(element, "FRBRalias")
        .and_then(|alias| alias.attribute("value"))
        .map(str::trim)
        .filter(|alias| !alias.is_empty());
    if let Some(alias) = alias {
        return Some(alias.to_string());
    }

    element_children(element)
        .find_map(|doc| doc.attribute("name"))
        .map(capitalize)
        .filter(|name| !name.is_empty())
}
