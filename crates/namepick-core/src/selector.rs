//! Name selector: sampling without replacement over the active group.
//!
//! The selector owns the cached group mapping and writes it back through an
//! injected [`GroupStore`] after every mutation. Draw progress (the remaining
//! names) lives only in memory.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::DEFAULT_GROUP_NAME;
use crate::error::PickerError;
use crate::group::{normalize_name, Group, GroupMap};
use crate::storage::GroupStore;

/// Holds the active group and the names not yet drawn from it.
pub struct Selector {
    store: Box<dyn GroupStore>,
    groups: GroupMap,
    group: Group,
    remaining: Vec<String>,
    rng: StdRng,
}

impl Selector {
    /// Open the store and activate its first group (sorted by name).
    ///
    /// An empty store gets a `Default` group, written out on the first mutation.
    #[must_use]
    pub fn new(store: Box<dyn GroupStore>) -> Self {
        let groups = store.load();
        let name = groups
            .keys()
            .next()
            .cloned()
            .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string());
        Self::with_active(store, groups, name).0
    }

    /// Open the store and activate `group`, creating it if needed.
    pub fn open(store: Box<dyn GroupStore>, group: &str) -> Result<Self, PickerError> {
        let name = validate_group_name(group)?;
        let groups = store.load();
        let (mut selector, created) = Self::with_active(store, groups, name);
        if created {
            tracing::info!(group = selector.group_name(), "group created");
            selector.persist()?;
        }
        Ok(selector)
    }

    /// Build a selector over `groups` with `name` active, adding it when absent.
    fn with_active(
        store: Box<dyn GroupStore>,
        mut groups: GroupMap,
        name: String,
    ) -> (Self, bool) {
        let created = !groups.contains_key(&name);
        let members = groups.entry(name.clone()).or_default().clone();
        let group = Group::from_members(name, &members);
        tracing::debug!(group = group.name(), members = group.len(), "selector opened");
        let remaining = group.members().to_vec();
        let selector = Self {
            store,
            groups,
            group,
            remaining,
            rng: StdRng::from_entropy(),
        };
        (selector, created)
    }

    /// Replace the random source with a seeded one.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Name of the active group.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group.name()
    }

    /// Every member of the active group, in insertion order.
    #[must_use]
    pub fn original_names(&self) -> &[String] {
        self.group.members()
    }

    /// Members not yet drawn since the last reset.
    #[must_use]
    pub fn remaining_names(&self) -> &[String] {
        &self.remaining
    }

    #[must_use]
    pub fn has_names_remaining(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// Whether `name` is a member that has already been drawn.
    #[must_use]
    pub fn is_chosen(&self, name: &str) -> bool {
        self.group.contains(name) && !self.remaining.iter().any(|n| n == name)
    }

    /// Add a name to the active group and reset the draw.
    ///
    /// Empty and duplicate names are ignored (`Ok(false)`).
    pub fn add_name(&mut self, raw: &str) -> Result<bool, PickerError> {
        if !self.group.add(raw) {
            return Ok(false);
        }
        self.reset();
        self.persist()?;
        Ok(true)
    }

    /// Draw one remaining name uniformly at random and remove it from the pool.
    pub fn choose_name(&mut self) -> Option<String> {
        if self.remaining.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.remaining.len());
        let name = self.remaining.remove(index);
        tracing::debug!(group = self.group.name(), %name, left = self.remaining.len(), "name drawn");
        Some(name)
    }

    /// Make every member available to draw again.
    pub fn reset(&mut self) {
        self.remaining = self.group.members().to_vec();
    }

    /// Remove every member of the active group.
    pub fn clear(&mut self) -> Result<(), PickerError> {
        self.group.clear();
        self.reset();
        self.persist()
    }

    /// Remove a single member from the group and from the pool.
    pub fn remove_name(&mut self, name: &str) -> Result<bool, PickerError> {
        if !self.group.remove(name) {
            return Ok(false);
        }
        self.remaining.retain(|n| n != name);
        self.persist()?;
        Ok(true)
    }

    /// Sorted names of all groups.
    #[must_use]
    pub fn list_groups(&self) -> Vec<String> {
        self.groups.keys().cloned().collect()
    }

    /// Activate `name`, creating an empty group if it does not exist.
    ///
    /// Draw progress is not kept across switches: the loaded group starts full.
    pub fn load_group(&mut self, name: &str) -> Result<(), PickerError> {
        let name = validate_group_name(name)?;
        let created = !self.groups.contains_key(&name);
        let members = self.groups.entry(name.clone()).or_default().clone();
        self.group = Group::from_members(name, &members);
        self.reset();
        if created {
            tracing::info!(group = self.group.name(), "group created");
            self.persist()?;
        } else {
            tracing::debug!(group = self.group.name(), "group loaded");
        }
        Ok(())
    }

    /// Create a new empty group without switching to it.
    pub fn create_group(&mut self, name: &str) -> Result<String, PickerError> {
        let name = validate_group_name(name)?;
        if self.groups.contains_key(&name) {
            return Err(PickerError::GroupExists(name));
        }
        self.groups.insert(name.clone(), Vec::new());
        self.persist()?;
        tracing::info!(group = %name, "group created");
        Ok(name)
    }

    /// Delete a group and its stored entry.
    ///
    /// Deleting the active group activates the first remaining group, or a
    /// fresh `Default` group when none are left.
    pub fn delete_group(&mut self, name: &str) -> Result<(), PickerError> {
        if self.groups.remove(name).is_none() {
            return Err(PickerError::GroupNotFound(name.to_string()));
        }
        tracing::info!(group = name, "group deleted");
        if self.group.name() == name {
            let next = self
                .groups
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string());
            let members = self.groups.entry(next.clone()).or_default().clone();
            self.group = Group::from_members(next, &members);
            self.reset();
        }
        self.persist()
    }

    /// Rename a group, keeping its members. The active group follows the rename.
    pub fn rename_group(&mut self, old: &str, new: &str) -> Result<String, PickerError> {
        let new = validate_group_name(new)?;
        if !self.groups.contains_key(old) {
            return Err(PickerError::GroupNotFound(old.to_string()));
        }
        if old == new {
            return Ok(new);
        }
        if self.groups.contains_key(&new) {
            return Err(PickerError::GroupExists(new));
        }
        let members = self.groups.remove(old).unwrap_or_default();
        self.groups.insert(new.clone(), members);
        if self.group.name() == old {
            self.group.set_name(new.clone());
        }
        tracing::info!(from = old, to = %new, "group renamed");
        self.persist()?;
        Ok(new)
    }

    fn persist(&mut self) -> Result<(), PickerError> {
        self.groups
            .insert(self.group.name().to_string(), self.group.members().to_vec());
        self.store.save(&self.groups)
    }
}

fn validate_group_name(raw: &str) -> Result<String, PickerError> {
    normalize_name(raw).ok_or_else(|| PickerError::InvalidGroupName(raw.to_string()))
}
