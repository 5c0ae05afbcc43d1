//! Human-readable descriptions of which provisions of a work have commenced.
//!
//! Given a table of contents and the ids of the commenced (or uncommenced)
//! provisions, [`CommencementsBeautifier`] produces the shortest description
//! that still identifies every provision, for example
//! `Chapter 1, Part A, section 1–3; Part B (in part); Part B, section 5`.

mod decorate;
mod run;

use std::collections::HashSet;

use crate::config::{GROUP_SEPARATOR, IN_PART};
use crate::toc::TocElement;

pub use decorate::DecoratedProvision;
pub use run::{display_type, Run};

/// Describes commenced or uncommenced provisions.
///
/// With `commenced` set, the ids given are those of commenced provisions and
/// the description lists what has commenced; otherwise the ids are those of
/// uncommenced provisions. The same ids produce the same text in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommencementsBeautifier {
    commenced: bool,
}

impl CommencementsBeautifier {
    #[must_use]
    pub fn new(commenced: bool) -> Self {
        Self { commenced }
    }

    /// Whether this beautifier describes commenced provisions.
    #[must_use]
    pub fn commenced(&self) -> bool {
        self.commenced
    }

    /// Annotate `provisions` with their commencement state against `ids`.
    ///
    /// Ids that match no provision are ignored.
    #[must_use]
    pub fn decorate_provisions<'a, S: AsRef<str>>(
        &self,
        provisions: &'a [TocElement],
        ids: &[S],
    ) -> Vec<DecoratedProvision<'a>> {
        let ids: HashSet<&str> = ids.iter().map(AsRef::as_ref).collect();
        let decorated: Vec<_> = provisions
            .iter()
            .map(|p| DecoratedProvision::new(p, &ids, self.commenced))
            .collect();

        if tracing::enabled!(tracing::Level::DEBUG) {
            let known: HashSet<&str> = crate::toc::descend_toc_pre_order(provisions)
                .map(|p| p.id.as_str())
                .collect();
            let unknown: Vec<&str> = ids.difference(&known).copied().collect();
            if !unknown.is_empty() {
                tracing::debug!(?unknown, "Ignoring ids that match no provision");
            }
        }

        decorated
    }

    /// Describe the decorated provisions, e.g. `section 1–3; section 5`.
    ///
    /// Returns an empty string when nothing matches.
    #[must_use]
    pub fn make_beautiful(&self, provisions: &[DecoratedProvision<'_>]) -> String {
        let mut description = Description::default();
        for p in provisions {
            description.process_provision(p);
        }
        description.end_current();
        description.runs.join(GROUP_SEPARATOR)
    }

    /// Decorate `provisions` against `ids` and describe them.
    #[must_use]
    pub fn describe<S: AsRef<str>>(&self, provisions: &[TocElement], ids: &[S]) -> String {
        self.make_beautiful(&self.decorate_provisions(provisions, ids))
    }
}

impl Default for CommencementsBeautifier {
    fn default() -> Self {
        Self::new(true)
    }
}

/// State of one walk over a decorated table of contents.
#[derive(Debug, Default)]
struct Description {
    current_run: Run,
    runs: Vec<String>,
    /// The last provision looked at was added to the current run.
    previous_in_run: bool,
}

impl Description {
    fn end_current(&mut self) {
        if !self.current_run.is_empty() {
            self.runs.push(self.current_run.render());
            self.current_run = Run::new();
            self.previous_in_run = false;
        }
    }

    fn add(&mut self, p: &DecoratedProvision<'_>, label: impl Into<String>) {
        self.current_run.push(p.kind(), label);
    }

    fn process_provision(&mut self, p: &DecoratedProvision<'_>) {
        let partial = !p.last_node && !p.all_descendants_same;

        if !(p.matched || partial) {
            // e.g. section 1–3; section 5–8
            if self.previous_in_run {
                self.end_current();
            }
            return;
        }

        if p.full_container {
            // Chapter 1 (section 1–5)
            let label = match all_basic_units(p) {
                Some(units) => format!("{} ({units})", p.num),
                None => p.num.clone(),
            };
            self.add(p, label);
            self.end_current();
        } else if p.container {
            if p.matched {
                // Chapter 1 (in part); Chapter 1, ...
                self.add(p, format!("{}{IN_PART}", p.num));
                self.end_current();
            }
            if !p.all_descendants_opposite || !p.matched {
                self.add(p, p.num.clone());
            }
        } else if p.is_basic_unit() {
            self.process_basic_unit(p);
            self.previous_in_run = true;
        } else if p.matched {
            // lonely subprovision, e.g. Chapter 1 item (a)
            self.add(p, p.num.clone());
            self.previous_in_run = true;
        }

        if !(p.full_container || p.is_basic_unit())
            && (!p.all_descendants_opposite || !p.matched)
        {
            for c in &p.children {
                self.process_provision(c);
            }
            // e.g. end of Part A, its sections were described individually
            if p.container {
                self.end_current();
            }
        }
    }

    /// Add a basic unit, listing its matched subprovisions unless the whole
    /// unit is matched, e.g. `2(1), 2(3), 2(4)`.
    fn process_basic_unit(&mut self, p: &DecoratedProvision<'_>) {
        let partial = !p.last_node && !p.all_descendants_same;
        let mut subs = Vec::new();

        if partial {
            for c in &p.children {
                collect_subprovisions(c, &p.num, &mut subs);
            }
        }

        let label = if subs.is_empty() {
            p.num.clone()
        } else {
            subs.join(", ")
        };
        self.add(p, label);

        // a unit with subprovisions doesn't continue into a range
        if partial {
            self.end_current();
        }
    }
}

/// Push the breadcrumbs of matched subprovisions below `p`, stopping at the
/// first one that is uniformly matched or unmatched below.
fn collect_subprovisions(p: &DecoratedProvision<'_>, prefix: &str, subs: &mut Vec<String>) {
    if p.matched && (p.last_node || p.all_descendants_same || p.all_descendants_opposite) {
        subs.push(format!("{prefix}{}", p.num));
    } else if !p.all_descendants_same {
        let prefix = format!("{prefix}{}", p.num);
        for c in &p.children {
            collect_subprovisions(c, &prefix, subs);
        }
    }
}

/// Describe every basic unit below a container, e.g. `section 1–3`.
fn all_basic_units(p: &DecoratedProvision<'_>) -> Option<String> {
    fn collect(p: &DecoratedProvision<'_>, run: &mut Run) {
        if p.is_basic_unit() {
            run.push(p.kind(), p.num.as_str());
        }
        for c in &p.children {
            collect(c, run);
        }
    }

    let mut run = Run::new();
    for c in &p.children {
        collect(c, &mut run);
    }
    (!run.is_empty()).then(|| run.render())
}
