//! Uniqueness checks over keyed records.

use std::collections::HashSet;

use crate::spec::{EnvVar, File, Volume, VolumeMount};

/// A record identified by a string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Volume {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for File {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Keyed for VolumeMount {
    fn key(&self) -> &str {
        &self.volume_ref
    }
}

impl Keyed for EnvVar {
    fn key(&self) -> &str {
        &self.name
    }
}

/// Outcome of a uniqueness scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet<'a> {
    /// Keys seen before the first duplicate, or all keys when unique.
    pub keys: HashSet<&'a str>,
    /// First key that appeared twice.
    pub duplicate: Option<&'a str>,
}

impl<'a> KeySet<'a> {
    /// True when no key appeared twice.
    pub fn is_unique(&self) -> bool {
        self.duplicate.is_none()
    }

    /// Whether `key` was seen during the scan.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// Scan `items` in order, stopping at the first repeated key.
pub fn key_set<T: Keyed>(items: &[T]) -> KeySet<'_> {
    let mut keys = HashSet::with_capacity(items.len());
    for item in items {
        let key = item.key();
        if !keys.insert(key) {
            return KeySet {
                keys,
                duplicate: Some(key),
            };
        }
    }
    KeySet {
        keys,
        duplicate: None,
    }
}
