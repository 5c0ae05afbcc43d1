//! Runs of consecutive provisions, rendered as ranges.

use crate::config::EN_DASH;
use crate::toc::capitalize;

/// Types whose name is capitalised in descriptions.
const CAPITALISED_TYPES: [&str; 2] = ["part", "chapter"];

/// Display name of an element type: `Chapter` and `Part` are capitalised,
/// every other type is used as is.
#[must_use]
pub fn display_type(kind: &str) -> String {
    if CAPITALISED_TYPES.contains(&kind) {
        capitalize(kind)
    } else {
        kind.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunEntry {
    kind: String,
    label: String,
    /// First entry of its type in this run, after the run's first type.
    new_type: bool,
}

/// Consecutive provisions that are described together, e.g. `section 1–5`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    entries: Vec<RunEntry>,
}

impl Run {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a provision of type `kind`, described by `label`.
    pub fn push(&mut self, kind: &str, label: impl Into<String>) {
        let kind = display_type(kind);
        let new_type =
            !self.entries.is_empty() && !self.entries.iter().any(|e| e.kind == kind);
        self.entries.push(RunEntry {
            kind,
            label: label.into(),
            new_type,
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Describe the run.
    ///
    /// A run of one type collapses to its first and last labels, e.g.
    /// `section 1–3`. A mixed run gets one range per type, in the order the
    /// types first appear: `section 1–3, article 1–2, regulation 1`.
    #[must_use]
    pub fn render(&self) -> String {
        let Some(first) = self.entries.first() else {
            return String::new();
        };
        let mut text = format!("{} {}", first.kind, first.label);

        if self.entries.len() == 1 {
            return text;
        }

        if !self.entries.iter().any(|e| e.new_type) {
            if let Some(last) = self.entries.last() {
                text.push_str(EN_DASH);
                text.push_str(&last.label);
            }
            return text;
        }

        text.push_str(&self.range_end(&first.kind));
        for entry in self.entries.iter().filter(|e| e.new_type) {
            text.push_str(&format!(", {} {}", entry.kind, entry.label));
            text.push_str(&self.range_end(&entry.kind));
        }
        text
    }

    /// `–{last label}` when the run holds more than one entry of `kind`.
    fn range_end(&self, kind: &str) -> String {
        let mut of_kind = self.entries.iter().filter(|e| e.kind == kind);
        let first = of_kind.next();
        match (first, of_kind.last()) {
            (Some(_), Some(last)) => format!("{EN_DASH}{}", last.label),
            _ => String::new(),
        }
    }
}
