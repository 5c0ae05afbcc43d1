//! Completing the provision list of a commencement.
//!
//! A commencement lists the ids of the provisions it commences. Older lists
//! often only name the top of a subtree (`sec_1` but not its subsections),
//! or name every section of a Part without naming the Part itself. Expanding
//! fills both gaps.

use std::collections::HashSet;

use crate::beautifier::{CommencementsBeautifier, DecoratedProvision};
use crate::toc::{descend_toc_pre_order, TocElement};

/// Result of expanding a commencement's provisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedProvisions {
    /// The complete provision list, in document order.
    pub provisions: Vec<String>,

    /// Ids that were not in the original list, in document order.
    pub added: Vec<String>,
}

impl ExpandedProvisions {
    /// Whether expanding changed anything.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Expand the provisions commenced by one commencement.
///
/// * every descendant of a listed provision is added;
/// * a container that is not commenced, but whose children all are (by this
///   commencement or by `previously` commenced ids), is added too. Nested
///   containers cascade upwards.
///
/// The result is in the order of `toc`; listed ids that are not in `toc` are
/// kept at the end, in their original order.
#[must_use]
pub fn expand_commenced_provisions<S: AsRef<str>>(
    toc: &[TocElement],
    commenced: &[S],
    previously: &[S],
) -> ExpandedProvisions {
    let original: Vec<&str> = commenced.iter().map(AsRef::as_ref).collect();
    let mut listed: HashSet<String> = original.iter().map(|id| (*id).to_string()).collect();

    add_descendants(toc, &mut listed);

    let all_commenced: HashSet<String> = previously
        .iter()
        .map(|id| id.as_ref().to_string())
        .chain(listed.iter().cloned())
        .collect();
    let ids: Vec<&str> = all_commenced.iter().map(String::as_str).collect();
    let decorated = CommencementsBeautifier::new(true).decorate_provisions(toc, &ids);

    let mut containers = Vec::new();
    let mut commenced_ids: HashSet<&str> = ids.iter().copied().collect();
    for p in &decorated {
        add_containers(p, &mut commenced_ids, &mut containers);
    }
    for id in containers {
        tracing::debug!(id, "Adding fully commenced container");
        listed.insert(id.to_string());
    }

    let in_toc: HashSet<&str> = descend_toc_pre_order(toc).map(|p| p.id.as_str()).collect();
    let provisions: Vec<String> = descend_toc_pre_order(toc)
        .filter(|p| listed.contains(&p.id))
        .map(|p| p.id.clone())
        .chain(
            original
                .iter()
                .filter(|id| !in_toc.contains(**id))
                .map(|id| (*id).to_string()),
        )
        .collect();

    let original: HashSet<&str> = original.into_iter().collect();
    let added = provisions
        .iter()
        .filter(|id| !original.contains(id.as_str()))
        .cloned()
        .collect();

    ExpandedProvisions { provisions, added }
}

fn add_descendants(items: &[TocElement], listed: &mut HashSet<String>) {
    for p in items {
        if listed.contains(&p.id) {
            listed.extend(descend_toc_pre_order(&p.children).map(|c| c.id.clone()));
        } else {
            // e.g. Chapter 1 isn't listed, but section 1 may be
            add_descendants(&p.children, listed);
        }
    }
}

/// Post-order, so a Part completed here can complete its Chapter.
///
/// Only commenceable children count: a crossheading between sections never
/// commences, so it can't hold its Part back.
fn add_containers<'a>(
    p: &DecoratedProvision<'a>,
    commenced: &mut HashSet<&'a str>,
    added: &mut Vec<&'a str>,
) {
    for c in &p.children {
        add_containers(c, commenced, added);
    }

    if p.container
        && !commenced.contains(p.id())
        && p
            .children
            .iter()
            .filter(|c| c.is_commenceable())
            .all(|c| commenced.contains(c.id()))
    {
        commenced.insert(p.id());
        added.push(p.id());
    }
}
