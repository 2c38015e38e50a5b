//! Single-open expand/collapse controller.
//!
//! One controller per screen, keyed by section id and built from that screen's
//! static key list. At most one key is expanded at a time, and only keys from
//! the list are ever expanded.

/// Accordion-style expansion state over a fixed key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandController<K> {
    keys: Vec<K>,
    expanded: Option<K>,
}

impl<K> ExpandController<K>
where
    K: Clone + PartialEq,
{
    /// Create a controller over `keys` with everything collapsed.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            expanded: None,
        }
    }

    /// Keys this controller knows, in declaration order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The expanded key, if any.
    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    /// True if `key` is the expanded key.
    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    /// Expand `key`, collapsing whatever was open. Unknown keys are ignored.
    ///
    /// Returns true if `key` is known.
    pub fn expand(&mut self, key: &K) -> bool {
        if !self.keys.contains(key) {
            return false;
        }
        self.expanded = Some(key.clone());
        true
    }

    /// Collapse everything.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Collapse `key` if it is expanded, otherwise expand it alone.
    /// Unknown keys are ignored.
    ///
    /// Returns true if the state changed.
    pub fn toggle(&mut self, key: &K) -> bool {
        if self.is_expanded(key) {
            self.expanded = None;
            true
        } else {
            self.expand(key)
        }
    }
}
