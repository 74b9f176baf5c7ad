// ---------------------------------------------------------------------------
// Channel selection: which columns are plotted, in pick order
// ---------------------------------------------------------------------------

/// Ordered set of chosen channel names.  Trace order follows the order in
/// which channels were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSelection {
    names: Vec<String>,
}

impl ChannelSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection from a list of names; repeats are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for name in names {
            selection.insert(name);
        }
        selection
    }

    /// Append a channel.  Returns `false` if it was already selected.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Select if absent, deselect if present.
    pub fn toggle(&mut self, name: &str) {
        if !self.remove(name) {
            self.names.push(name.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Drop names that are not among `available`.
    pub fn retain_available(&mut self, available: &[String]) {
        self.names.retain(|n| available.contains(n));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
