//! Provisions of a work across its points in time.
//!
//! A work is amended over time, so each point-in-time expression may have a
//! different table of contents. The merge engine combines them into one list
//! of every provision that has ever existed, and the expander completes the
//! provision lists of commencements against that list.

mod expand;
mod merge;
mod timeline;

pub use expand::{expand_commenced_provisions, ExpandedProvisions};
pub use merge::{insert_provisions, merge_points_in_time, Provision, ProvisionMerger};
pub use timeline::{merge_documents, PointInTime, Timeline};
