use std::collections::BTreeSet;

/// A permission a navigation entry (or page) may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Manage user accounts.
    ManageUsers,
}

impl Capability {
    pub const ALL: &'static [Capability] = &[Capability::ManageUsers];
}

/// Set of capabilities granted to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, capability: Capability) {
        self.0.insert(capability);
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// True when every capability in `required` is granted. An empty
    /// requirement is always satisfied.
    pub fn contains_all(&self, required: &[Capability]) -> bool {
        required.iter().all(|c| self.0.contains(c))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_requirement_always_satisfied() {
        assert!(CapabilitySet::empty().contains_all(&[]));
    }

    #[test]
    fn missing_capability_fails_check() {
        let granted = CapabilitySet::empty();
        assert!(!granted.contains_all(&[Capability::ManageUsers]));
    }

    #[test]
    fn inserted_capability_satisfies_check() {
        let mut granted = CapabilitySet::empty();
        granted.insert(Capability::ManageUsers);
        granted.insert(Capability::ManageUsers);
        assert!(granted.contains(Capability::ManageUsers));
        assert!(granted.contains_all(Capability::ALL));
    }
}
