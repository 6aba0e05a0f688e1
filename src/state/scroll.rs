#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::collections::HashSet;

use crate::config;

/// Tracks which section currently owns the nav highlight. Observer entries
/// are fed in delivery order; the last intersecting one of a batch wins,
/// and entries that leave the viewport never clear the highlight.
#[derive(Debug, Default)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one observer entry. Returns the now-current section id when the
    /// entry is intersecting, `None` otherwise.
    pub fn observe(&mut self, id: &str, intersecting: bool) -> Option<String> {
        if intersecting {
            self.current = Some(id.to_string());
        } else {
            return None;
        }
        self.current.clone()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// One-shot bookkeeping for reveal animations: each element index fires
/// exactly once, no matter how often it re-enters the viewport.
#[derive(Debug, Default)]
pub struct RevealSet {
    vistos: HashSet<usize>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time an index is marked.
    pub fn mark(&mut self, idx: usize) -> bool {
        self.vistos.insert(idx)
    }
}

/// The back-to-top button shows strictly past the configured offset.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_OFFSET_PX
}
