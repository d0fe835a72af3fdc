//! Integer tags and per-entity tag sets.

use serde::{Deserialize, Serialize};

/// An opaque integer tag used to classify entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IntTag(pub i32);

impl From<i32> for IntTag {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for IntTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A set of [`IntTag`]s.
///
/// Entities carry only a handful of tags, so membership is a linear scan over
/// a small vector. Iteration order is insertion order but callers must not
/// rely on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tags {
    tags: Vec<IntTag>,
}

impl Tags {
    /// Create an empty tag set.
    #[must_use]
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    /// Returns `true` if `tag` is a member of the set.
    #[must_use]
    pub fn have(&self, tag: IntTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Add a tag. Returns `false` if it was already present.
    pub fn add(&mut self, tag: IntTag) -> bool {
        if self.have(tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns `true` if it was present.
    pub fn remove(&mut self, tag: IntTag) -> bool {
        match self.tags.iter().position(|t| *t == tag) {
            Some(pos) => {
                self.tags.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every tag.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Returns the number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the set has no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns an iterator over the tags.
    pub fn iter(&self) -> impl Iterator<Item = IntTag> + '_ {
        self.tags.iter().copied()
    }
}

impl FromIterator<IntTag> for Tags {
    fn from_iter<I: IntoIterator<Item = IntTag>>(iter: I) -> Self {
        let mut tags = Self::new();
        for tag in iter {
            tags.add(tag);
        }
        tags
    }
}

impl Extend<IntTag> for Tags {
    fn extend<I: IntoIterator<Item = IntTag>>(&mut self, iter: I) {
        for tag in iter {
            self.add(tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_have_after_add() {
        let mut tags = Tags::new();
        assert!(!tags.have(IntTag(1)));
        assert!(tags.add(IntTag(1)));
        assert!(tags.have(IntTag(1)));
        assert!(!tags.have(IntTag(2)));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut tags = Tags::new();
        assert!(tags.add(IntTag(7)));
        assert!(!tags.add(IntTag(7)));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut tags: Tags = [IntTag(1), IntTag(2), IntTag(3)].into_iter().collect();
        assert!(tags.remove(IntTag(1)));
        assert!(!tags.remove(IntTag(1)));
        assert!(!tags.have(IntTag(1)));
        assert!(tags.have(IntTag(2)));
        assert!(tags.have(IntTag(3)));
        let mut left: Vec<IntTag> = tags.iter().collect();
        left.sort();
        assert_eq!(left, vec![IntTag(2), IntTag(3)]);
    }

    #[test]
    fn test_collect_dedups() {
        let tags: Tags = [1, 2, 2, 1].into_iter().map(IntTag::from).collect();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut tags: Tags = [IntTag(4)].into_iter().collect();
        tags.extend([IntTag(5), IntTag(4)]);
        assert_eq!(tags.len(), 2);
        tags.clear();
        assert!(tags.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(IntTag(-3).to_string(), "#-3");
    }
}
