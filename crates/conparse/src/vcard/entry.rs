//! vCard entry model: ordered, queryable per-entry tag collections.

use crate::error::LookupError;
use crate::vcard::tag::VCardTag;

/// An insertion-ordered association from tag name to the tags bearing it.
///
/// Entries hold a handful of tags, so lookups are linear scans over a
/// list of pairs; insertion order of distinct names is part of the API
/// contract (see [`VCardEntry::get_tag_indexes`]).
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    slots: Vec<(String, Vec<VCardTag>)>,
}

impl TagMap {
    /// Appends a tag under its name, creating the slot on first use.
    pub fn push(&mut self, tag: VCardTag) {
        if let Some((_, tags)) = self.slots.iter_mut().find(|(name, _)| *name == tag.name) {
            tags.push(tag);
        } else {
            self.slots.push((tag.name.clone(), vec![tag]));
        }
    }

    /// Returns the tags stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[VCardTag]> {
        self.slots
            .iter()
            .find(|(slot_name, _)| slot_name == name)
            .map(|(_, tags)| tags.as_slice())
    }

    /// Returns whether any tag is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates distinct tag names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(name, _)| name.as_str())
    }

    /// Returns whether the map holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// One logical BEGIN…END block of a vCard document.
///
/// Tags are indexed by name in `values`; a tag with a group is additionally
/// indexed under `groups[group][name]`. The group index holds copies of the
/// same immutable tags.
#[derive(Debug, Clone, Default)]
pub struct VCardEntry {
    values: TagMap,
    groups: Vec<(String, TagMap)>,
}

impl VCardEntry {
    /// Creates an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag to the entry.
    pub fn add(&mut self, tag: VCardTag) {
        if let Some(group) = tag.group.clone() {
            if let Some((_, map)) = self.groups.iter_mut().find(|(name, _)| *name == group) {
                map.push(tag.clone());
            } else {
                let mut map = TagMap::default();
                map.push(tag.clone());
                self.groups.push((group, map));
            }
        }

        self.values.push(tag);
    }

    /// Returns the tags with the given name.
    ///
    /// ## Errors
    /// Returns [`LookupError::FoundInGroup`] if the name is absent at the
    /// top level but present under a group, or [`LookupError::TagNotFound`]
    /// if it is absent everywhere.
    pub fn get(&self, name: &str) -> Result<&[VCardTag], LookupError> {
        let name = name.to_ascii_uppercase();

        if let Some(tags) = self.values.get(&name) {
            return Ok(tags);
        }

        for (group, map) in &self.groups {
            if map.contains(&name) {
                return Err(LookupError::FoundInGroup {
                    name,
                    group: group.clone(),
                });
            }
        }

        Err(LookupError::TagNotFound { name })
    }

    /// Returns the tags with the given name inside a group.
    ///
    /// ## Errors
    /// Returns [`LookupError::GroupNotFound`] if the group is absent, or
    /// [`LookupError::TagNotFoundInGroup`] if the group exists but lacks
    /// the tag.
    pub fn get_in_group(&self, group: &str, name: &str) -> Result<&[VCardTag], LookupError> {
        let name = name.to_ascii_uppercase();

        let Some((_, map)) = self.groups.iter().find(|(g, _)| g == group) else {
            return Err(LookupError::GroupNotFound {
                group: group.to_string(),
            });
        };

        map.get(&name).ok_or_else(|| LookupError::TagNotFoundInGroup {
            name,
            group: group.to_string(),
        })
    }

    /// Returns the first tag with the given name.
    ///
    /// ## Errors
    /// Same failure modes as [`VCardEntry::get`].
    pub fn get_single(&self, name: &str) -> Result<&VCardTag, LookupError> {
        Ok(&self.get(name)?[0])
    }

    /// Returns the first tag with the given name inside a group.
    ///
    /// ## Errors
    /// Same failure modes as [`VCardEntry::get_in_group`].
    pub fn get_single_in_group(&self, group: &str, name: &str) -> Result<&VCardTag, LookupError> {
        Ok(&self.get_in_group(group, name)?[0])
    }

    /// Returns the positions of `name` within the insertion order of
    /// distinct tag names.
    ///
    /// Each distinct name occupies one position regardless of how many tags
    /// share it, so the result holds at most one index. This mirrors the
    /// historical behavior of the format's reference tooling and is relied
    /// on by the version-4.0 placement check; do not change it to count
    /// repeated tags.
    ///
    /// ## Errors
    /// Returns [`LookupError::TagNotFound`] if the name is absent.
    pub fn get_tag_indexes(&self, name: &str) -> Result<Vec<usize>, LookupError> {
        let name = name.to_ascii_uppercase();

        let indexes: Vec<usize> = self
            .values
            .names()
            .enumerate()
            .filter(|(_, slot_name)| *slot_name == name)
            .map(|(index, _)| index)
            .collect();

        if indexes.is_empty() {
            return Err(LookupError::TagNotFound { name });
        }

        Ok(indexes)
    }

    /// Returns the first position of `name` per [`VCardEntry::get_tag_indexes`].
    ///
    /// ## Errors
    /// Returns [`LookupError::TagNotFound`] if the name is absent.
    pub fn get_tag_index(&self, name: &str) -> Result<usize, LookupError> {
        Ok(self.get_tag_indexes(name)?[0])
    }

    /// Returns how many index slots `name` occupies (see
    /// [`VCardEntry::get_tag_indexes`] for the counting semantics).
    #[must_use]
    pub fn count_tag(&self, name: &str) -> usize {
        self.get_tag_indexes(name).map_or(0, |indexes| indexes.len())
    }

    /// Returns whether the entry contains at least one tag with the name.
    #[must_use]
    pub fn has_tag(&self, name: &str) -> bool {
        self.values.contains(&name.to_ascii_uppercase())
    }

    /// Iterates distinct tag names in insertion order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.values.names()
    }

    /// Returns whether the entry holds no tags at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
