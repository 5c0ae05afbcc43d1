//! Points in time of a work and the provisions they make commenceable.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::merge::ProvisionMerger;
use crate::toc::{TocElement, TocRules};

/// The table of contents of one point-in-time expression of a work.
#[derive(Debug, Clone, PartialEq)]
pub struct PointInTime {
    /// Expression date.
    pub date: NaiveDate,

    /// Table of contents of the document at this date.
    pub toc: Vec<TocElement>,
}

impl PointInTime {
    /// Create a point in time from its date and table of contents.
    #[must_use]
    pub fn new(date: NaiveDate, toc: Vec<TocElement>) -> Self {
        Self { date, toc }
    }
}

/// All points in time of a single work, oldest first.
///
/// Points in time sharing a date keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    points_in_time: Vec<PointInTime>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder variant of [`Timeline::add_point_in_time`].
    #[must_use]
    pub fn with_point_in_time(mut self, point_in_time: PointInTime) -> Self {
        self.add_point_in_time(point_in_time);
        self
    }

    /// Add a point in time, keeping the timeline in date order.
    pub fn add_point_in_time(&mut self, point_in_time: PointInTime) {
        let index = self
            .points_in_time
            .partition_point(|p| p.date <= point_in_time.date);
        self.points_in_time.insert(index, point_in_time);
    }

    /// The points in time, oldest first.
    #[must_use]
    pub fn points_in_time(&self) -> &[PointInTime] {
        &self.points_in_time
    }

    /// Dates of the points in time, oldest first.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points_in_time.iter().map(|p| p.date).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points_in_time.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points_in_time.is_empty()
    }

    /// Every commenceable provision that has existed in the work, in document order.
    ///
    /// Only points in time on or before `up_to` are considered; `None`
    /// considers them all. Provisions that were later repealed or removed
    /// are still included.
    #[must_use]
    pub fn commenceable_provisions(
        &self,
        rules: &TocRules,
        up_to: Option<NaiveDate>,
    ) -> Vec<TocElement> {
        let mut merger: ProvisionMerger<TocElement> = ProvisionMerger::new();

        for point_in_time in &self.points_in_time {
            if up_to.is_some_and(|date| point_in_time.date > date) {
                break;
            }
            let items = rules.commenceable_items(&point_in_time.toc);
            tracing::debug!(
                date = %point_in_time.date,
                items = items.len(),
                "Merging commenceable provisions"
            );
            merger.add_point_in_time(&items);
        }

        merger.into_provisions()
    }
}

/// Combine the commenceable provisions of several documents for the same point in time.
///
/// Used for the language versions of one expression: pass the primary
/// language document first. Entries are de-duplicated by id and the first
/// document wins; nested children are not merged.
#[must_use]
pub fn merge_documents<T: AsRef<[TocElement]>>(rules: &TocRules, tocs: &[T]) -> Vec<TocElement> {
    let mut id_set = HashSet::new();
    let mut provisions = Vec::new();

    for toc in tocs {
        for item in rules.commenceable_items(toc.as_ref()) {
            if !item.id.is_empty() && id_set.insert(item.id.clone()) {
                provisions.push(item);
            }
        }
    }

    provisions
}
