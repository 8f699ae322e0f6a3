use std::collections::HashSet;

/// (owner, name) pairs already recorded in this run. Exact, case-sensitive matching.
#[derive(Debug, Default)]
pub struct SeenSet {
    pairs: HashSet<(String, String)>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time a pair is offered and records it.
    pub fn is_new(&mut self, owner: &str, name: &str) -> bool {
        self.pairs.insert((owner.to_string(), name.to_string()))
    }
}
