//! Groups of candidate names and input parsing.

use std::collections::BTreeMap;

/// Persisted form of all groups: group name to ordered member list.
pub type GroupMap = BTreeMap<String, Vec<String>>;

/// A named list of unique candidate names in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    members: Vec<String>,
}

impl Group {
    /// Create an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Create a group from stored members, dropping invalid and duplicate entries.
    #[must_use]
    pub fn from_members(name: impl Into<String>, members: &[String]) -> Self {
        let mut group = Self::new(name);
        for member in members {
            group.add(member);
        }
        group
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Exact, case-sensitive membership check.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Add a name after trimming it.
    ///
    /// Returns `false` (and leaves the group unchanged) for empty or duplicate names.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(name) = normalize_name(raw) else {
            return false;
        };
        if self.contains(&name) {
            return false;
        }
        self.members.push(name);
        true
    }

    /// Remove a member. Returns `false` if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != name);
        self.members.len() != before
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// Trim a raw name; `None` if nothing is left.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split user input into candidate names.
///
/// Input containing commas is split on them; every piece is trimmed and empty
/// pieces are dropped. Input without commas yields at most one name.
#[must_use]
pub fn parse_names(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    if !input.contains(',') {
        return vec![input.to_string()];
    }
    input.split(',').filter_map(normalize_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_appends() {
        let mut group = Group::new("Team");
        assert!(group.add("  Alice "));
        assert!(group.add("Bob"));
        assert_eq!(group.members(), ["Alice", "Bob"]);
    }

    #[test]
    fn add_rejects_empty_and_duplicates() {
        let mut group = Group::new("Team");
        assert!(group.add("Alice"));
        assert!(!group.add("Alice"));
        assert!(!group.add(" Alice"));
        assert!(!group.add(""));
        assert!(!group.add("   \t"));
        assert_eq!(group.members(), ["Alice"]);
    }

    #[test]
    fn duplicates_are_case_sensitive() {
        let mut group = Group::new("Team");
        assert!(group.add("alice"));
        assert!(group.add("Alice"));
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn remove_member() {
        let mut group = Group::from_members("Team", &["A".into(), "B".into(), "C".into()]);
        assert!(group.remove("B"));
        assert!(!group.remove("B"));
        assert_eq!(group.members(), ["A", "C"]);
    }

    #[test]
    fn from_members_drops_invalid_entries() {
        let stored = vec!["A".to_string(), String::new(), "A".to_string(), " B ".to_string()];
        let group = Group::from_members("Team", &stored);
        assert_eq!(group.members(), ["A", "B"]);
    }

    #[test]
    fn parse_single_name() {
        assert_eq!(parse_names("  Alice  "), ["Alice"]);
    }

    #[test]
    fn parse_comma_list() {
        assert_eq!(parse_names("A, B,,C , "), ["A", "B", "C"]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_names("").is_empty());
        assert!(parse_names("   ").is_empty());
        assert!(parse_names(" , ,").is_empty());
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_name(" x "), Some("x".to_string()));
        assert_eq!(normalize_name(" "), None);
    }
}
