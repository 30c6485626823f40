use std::collections::HashSet;

/// Renderings already emitted during the current run.
///
/// Membership is purely textual: `1 + 2` and `2 + 1` are different entries.
#[derive(Debug, Default, Clone)]
pub struct SolutionSet {
    seen: HashSet<String>,
}

impl SolutionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `rendered` and returns true the first time it is seen
    pub fn admit(&mut self, rendered: &str) -> bool {
        if self.seen.contains(rendered) {
            return false;
        }
        self.seen.insert(rendered.to_owned())
    }

    pub fn contains(&self, rendered: &str) -> bool {
        self.seen.contains(rendered)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
