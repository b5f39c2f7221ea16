//! Key/value storage for profiles.

use std::collections::BTreeMap;

use crate::Profile;

/// Named profile storage.
///
/// Implement this to back profiles with something other than memory; the
/// CSV loader fills any store through [`put`][Self::put].
pub trait ProfileStore {
    fn get(&self, name: &str) -> Option<&Profile>;

    /// Insert or replace, returning the previous profile under that name.
    fn put(&mut self, profile: Profile) -> Option<Profile>;

    fn remove(&mut self, name: &str) -> Option<Profile>;

    /// All stored names, sorted.
    fn names(&self) -> Vec<String>;
}

/// `BTreeMap`-backed [`ProfileStore`].  Iteration order is by name.
#[derive(Clone, Debug, Default)]
pub struct MemoryProfileStore {
    profiles: BTreeMap<String, Profile>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    fn put(&mut self, profile: Profile) -> Option<Profile> {
        self.profiles.insert(profile.name.clone(), profile)
    }

    fn remove(&mut self, name: &str) -> Option<Profile> {
        self.profiles.remove(name)
    }

    fn names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }
}

impl FromIterator<Profile> for MemoryProfileStore {
    fn from_iter<I: IntoIterator<Item = Profile>>(iter: I) -> Self {
        let mut store = Self::new();
        for profile in iter {
            store.put(profile);
        }
        store
    }
}
