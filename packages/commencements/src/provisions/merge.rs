//! Merging the provisions of successive points in time into one ordered list.

use std::collections::HashSet;

use crate::toc::TocElement;

/// Anything that can take part in a provision merge.
///
/// A provision needs a stable identifier; provisions with nested
/// provisions (a part containing sections) also expose their children so
/// they can be merged level by level.
pub trait Provision: Clone {
    /// Stable identifier. Empty identifiers are never merged.
    fn id(&self) -> &str;

    /// Nested provisions, in document order.
    fn children(&self) -> &[Self] {
        &[]
    }

    /// Mutable access to the nested provisions, if this type can have any.
    fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        None
    }
}

impl Provision for TocElement {
    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        Some(&mut self.children)
    }
}

impl Provision for String {
    fn id(&self) -> &str {
        self
    }
}

/// Insert the provisions of one point in time at their positions in `provisions`.
///
/// `provisions` is the list of provisions for a work, built up by calling
/// this once per point in time, oldest first. `id_set` holds the ids already
/// in `provisions`. `items` are the commenceable provisions of the current
/// point in time.
///
/// Provisions are never removed: one that is absent from `items` stays where
/// it is, and the target index of every later item is bumped past it. A new
/// provision that appears where a removed one used to be therefore lands
/// after the removed one; there is no way to tell whether it belongs before
/// or after it.
///
/// Children of each item are merged recursively into the children of the
/// matching entry in `provisions`.
pub fn insert_provisions<P: Provision>(
    provisions: &mut Vec<P>,
    id_set: &mut HashSet<String>,
    items: &[P],
) {
    // TODO: handle structural moves (e.g. sections moved into a new Part),
    // which currently show up as a removal plus an insertion.
    let item_ids: HashSet<&str> = items.iter().map(Provision::id).collect();
    let removed_indexes: Vec<usize> = provisions
        .iter()
        .enumerate()
        .filter(|(_, p)| !item_ids.contains(p.id()))
        .map(|(i, _)| i)
        .collect();

    if !removed_indexes.is_empty() {
        tracing::debug!(
            removed = removed_indexes.len(),
            "Provisions absent from this point in time, compensating insertion indexes"
        );
    }

    for (position, item) in items.iter().enumerate() {
        let index = removed_indexes
            .iter()
            .fold(position, |index, &removed| if index >= removed { index + 1 } else { index });

        if !item.id().is_empty() && !id_set.contains(item.id()) {
            let index = index.min(provisions.len());
            tracing::debug!(id = %item.id(), index, "Inserting provision");
            id_set.insert(item.id().to_string());
            provisions.insert(index, item.clone());
        }

        // the ToC can be deeply nested, so merge the children too
        if item.children().is_empty() || item.id().is_empty() {
            continue;
        }
        let Some(existing) = provisions.iter_mut().find(|p| p.id() == item.id()) else {
            continue;
        };
        if let Some(existing_children) = existing.children_mut() {
            let mut existing_ids: HashSet<String> = existing_children
                .iter()
                .map(|c| c.id().to_string())
                .collect();
            insert_provisions(existing_children, &mut existing_ids, item.children());
        }
    }
}

/// Owns the merged provision list of one work while points in time are added.
///
/// Create a fresh merger per work; state is never shared between works.
#[derive(Debug, Clone)]
pub struct ProvisionMerger<P> {
    provisions: Vec<P>,
    id_set: HashSet<String>,
}

impl<P: Provision> ProvisionMerger<P> {
    /// Create an empty merger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provisions: Vec::new(),
            id_set: HashSet::new(),
        }
    }

    /// Merge in the provisions of the next point in time.
    pub fn add_point_in_time(&mut self, items: &[P]) {
        insert_provisions(&mut self.provisions, &mut self.id_set, items);
    }

    /// The merged provisions so far.
    #[must_use]
    pub fn provisions(&self) -> &[P] {
        &self.provisions
    }

    /// Ids of the merged top-level provisions, in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.provisions.iter().map(Provision::id).collect()
    }

    /// Number of merged top-level provisions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.provisions.len()
    }

    /// Whether nothing has been merged yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provisions.is_empty()
    }

    /// Consume the merger, returning the merged provisions.
    #[must_use]
    pub fn into_provisions(self) -> Vec<P> {
        self.provisions
    }
}

impl<P: Provision> Default for ProvisionMerger<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the provisions of several points in time, oldest first.
pub fn merge_points_in_time<P, S>(points_in_time: impl IntoIterator<Item = S>) -> Vec<P>
where
    P: Provision,
    S: AsRef<[P]>,
{
    let mut merger = ProvisionMerger::new();
    for items in points_in_time {
        merger.add_point_in_time(items.as_ref());
    }
    merger.into_provisions()
}
