//! Depth-first walks over a table of contents.

use super::types::TocElement;

/// Iterate over `items` and all their descendants, parents before children.
///
/// # Examples
/// ```
/// use akn_commencements::toc::{descend_toc_pre_order, TocElement};
///
/// let toc = vec![
///     TocElement::new("part", "part_A").with_children([TocElement::new("section", "sec_1")]),
///     TocElement::new("section", "sec_2"),
/// ];
/// let ids: Vec<_> = descend_toc_pre_order(&toc).map(|i| i.id.as_str()).collect();
/// assert_eq!(ids, vec!["part_A", "sec_1", "sec_2"]);
/// ```
pub fn descend_toc_pre_order(items: &[TocElement]) -> impl Iterator<Item = &TocElement> {
    PreOrder {
        stack: items.iter().rev().collect(),
    }
}

/// Iterate over `items` and all their descendants, children before parents.
pub fn descend_toc_post_order(items: &[TocElement]) -> impl Iterator<Item = &TocElement> {
    let mut out = Vec::new();
    for item in items {
        push_post_order(item, &mut out);
    }
    out.into_iter()
}

fn push_post_order<'a>(item: &'a TocElement, out: &mut Vec<&'a TocElement>) {
    for child in &item.children {
        push_post_order(child, out);
    }
    out.push(item);
}

/// Find the entry with the given id anywhere in `items`.
#[must_use]
pub fn find_toc_element<'a>(items: &'a [TocElement], id: &str) -> Option<&'a TocElement> {
    descend_toc_pre_order(items).find(|item| item.id == id)
}

struct PreOrder<'a> {
    stack: Vec<&'a TocElement>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TocElement;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        self.stack.extend(item.children.iter().rev());
        Some(item)
    }
}
