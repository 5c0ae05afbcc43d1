//! akn-commencements - Describe which provisions of Akoma Ntoso legislation
//! have commenced.
//!
//! This crate builds tables of contents from Akoma Ntoso documents, merges
//! the provisions of a work's points in time into a single ordered list, and
//! describes sets of commenced (or uncommenced) provisions in short prose.
//!
//! # Example
//!
//! ```
//! use akn_commencements::{CommencementsBeautifier, TocElement};
//!
//! let toc: Vec<TocElement> = (1..=5)
//!     .map(|n| {
//!         TocElement::new("section", format!("sec_{n}"))
//!             .with_num(format!("{n}."))
//!             .with_basic_unit(true)
//!     })
//!     .collect();
//!
//! let beautifier = CommencementsBeautifier::new(true);
//! assert_eq!(
//!     beautifier.describe(&toc, &["sec_1", "sec_2", "sec_3", "sec_5"]),
//!     "section 1–3; section 5"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and input validation
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML utilities
//! - [`toc`]: Table of contents model, locale rules and the Akoma Ntoso TOC builder
//! - [`provisions`]: Merging provisions across points in time, expanding commencements
//! - [`beautifier`]: Commencement descriptions
//! - [`output`]: JSON and YAML output
//! - [`cli`]: Command-line interface

pub mod beautifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod provisions;
pub mod toc;
pub mod xml;

// Re-export commonly used items
pub use beautifier::{CommencementsBeautifier, DecoratedProvision};
pub use error::{CommencementsError, Result};
pub use provisions::{
    expand_commenced_provisions, insert_provisions, ExpandedProvisions, PointInTime, Provision,
    ProvisionMerger, Timeline,
};
pub use toc::{toc_rules_for_country, TocBuilder, TocElement, TocRules};
