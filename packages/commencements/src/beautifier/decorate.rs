//! Commencement state of each provision in a table of contents.

use std::collections::HashSet;

use crate::toc::TocElement;

/// A TOC entry annotated with its commencement state.
///
/// Built by [`decorate`](super::CommencementsBeautifier::decorate_provisions);
/// the underlying [`TocElement`] tree is only borrowed, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratedProvision<'a> {
    pub element: &'a TocElement,

    /// Number with surrounding `.` removed, e.g. `1` for `1.`.
    pub num: String,

    /// Whether this entry's own id is in the assessed id list.
    pub matched: bool,

    /// Commencement status: the beautifier's mode when matched, otherwise its opposite.
    pub commenced: bool,

    /// Whether this entry has no children.
    pub last_node: bool,

    /// Whether every descendant shares this entry's status.
    pub all_descendants_same: bool,

    /// Whether every child has the opposite status to this entry, with each
    /// child's own descendants uniform.
    pub all_descendants_opposite: bool,

    /// Whether any child is a basic unit or a container.
    pub container: bool,

    /// A container whose descendants all share its status, e.g. a commenced
    /// Part whose sections are all commenced.
    pub full_container: bool,

    pub children: Vec<DecoratedProvision<'a>>,
}

impl<'a> DecoratedProvision<'a> {
    pub(crate) fn new(element: &'a TocElement, ids: &HashSet<&str>, mode: bool) -> Self {
        let children: Vec<_> = element
            .children
            .iter()
            .map(|c| Self::new(c, ids, mode))
            .collect();

        let matched = ids.contains(element.id.as_str());
        let has_children = !children.is_empty();
        let uniform = |c: &Self| c.all_descendants_same || c.last_node;

        let all_descendants_same =
            has_children && children.iter().all(|c| c.matched == matched && uniform(c));
        let all_descendants_opposite =
            has_children && children.iter().all(|c| c.matched != matched && uniform(c));
        let container = children
            .iter()
            .any(|c| c.element.basic_unit || c.container);

        Self {
            element,
            num: element.clean_num(),
            matched,
            commenced: if matched { mode } else { !mode },
            last_node: !has_children,
            all_descendants_same,
            all_descendants_opposite,
            container,
            full_container: container && all_descendants_same,
            children,
        }
    }

    /// Element id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        &self.element.id
    }

    /// Element type, e.g. `section`.
    #[must_use]
    pub fn kind(&self) -> &'a str {
        &self.element.kind
    }

    #[must_use]
    pub fn is_basic_unit(&self) -> bool {
        self.element.basic_unit
    }

    /// Whether this entry can commence in its own right: a basic unit, or a
    /// container of basic units. Subsections and items only commence as part
    /// of their section.
    #[must_use]
    pub fn is_commenceable(&self) -> bool {
        self.is_basic_unit() || self.container
    }
}
