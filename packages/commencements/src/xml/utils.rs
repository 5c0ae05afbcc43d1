//! XML utility functions for navigating Akoma Ntoso documents.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use akn_commencements::xml::get_tag_name;
///
/// let xml = r#"<act xmlns="http://docs.oasis-open.org/legaldocml/ns/akn/3.0"><body/></act>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "act");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use akn_commencements::xml::find_child;
///
/// let xml = r#"<section><num>1.</num><heading>Definitions</heading></section>"#;
/// let doc = Document::parse(xml).unwrap();
/// let section = doc.root_element();
///
/// assert!(find_child(section, "num").is_some());
/// assert!(find_child(section, "subsection").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find the first descendant element (excluding `node` itself) with the given tag name.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|child| has_tag(*child, tag))
}

/// Get all element children of a node.
///
/// Text nodes, comments and processing instructions are skipped.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the direct text content of a node, trimmed.
///
/// Returns an empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Collect all descendant text of a node, skipping subtrees rooted at `skip_tag`.
///
/// Used for headings, which may contain inline markup and authorial notes;
/// the notes are not part of the heading text.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use akn_commencements::xml::collect_text_excluding;
///
/// let xml = r#"<heading>Short <b>title</b><authorialNote><p>note</p></authorialNote></heading>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(collect_text_excluding(doc.root_element(), "authorialNote"), "Short title");
/// ```
pub fn collect_text_excluding(node: Node<'_, '_>, skip_tag: &str) -> String {
    let mut text = String::new();
    push_text_excluding(node, skip_tag, &mut text);
    text
}

fn push_text_excluding(node: Node<'_, '_>, skip_tag: &str, text: &mut String) {
    for child in node.children() {
        if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        } else if child.is_element() && get_tag_name(child) != skip_tag {
            push_text_excluding(child, skip_tag, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:root xmlns:ns="http://example.com"><ns:child/></ns:root>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "root");
    }

    #[test]
    fn test_find_descendant_skips_self() {
        let xml = r#"<doc><meta><doc name="schedule"/></meta></doc>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        let nested = find_descendant(root, "doc").unwrap();
        assert_eq!(nested.attribute("name"), Some("schedule"));
    }

    #[test]
    fn test_get_text_trims() {
        let xml = r#"<num>  (a)  </num>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), "(a)");
    }

    #[test]
    fn test_element_children() {
        let xml = r#"<chapter>text<num>1</num>more<part/></chapter>"#;
        let doc = Document::parse(xml).unwrap();

        let children: Vec<_> = element_children(doc.root_element()).collect();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_collect_text_excluding_nested_markup() {
        let xml = r#"<heading>Application <i>of</i> <term>Act</term></heading>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            collect_text_excluding(doc.root_element(), "authorialNote"),
            "Application of Act"
        );
    }
}
