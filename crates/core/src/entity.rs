//! Entity trait: identity within an ordered sequence.

use std::collections::HashSet;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Returns every identifier that appears more than once, in order of its
/// second occurrence.
pub fn find_duplicate_ids<E: Entity>(entities: &[E]) -> Vec<E::Id> {
    let mut seen = HashSet::with_capacity(entities.len());
    let mut duplicates = Vec::new();

    for entity in entities {
        let id = entity.id();
        if !seen.insert(id) && !duplicates.contains(id) {
            duplicates.push(id.clone());
        }
    }

    duplicates
}
