//! Fixed-capacity entity pool with dense-pack removal.
//!
//! Removal swaps the last active entity into the vacated slot, so the
//! active range stays contiguous. Callers that collect several indices
//! to remove in one pass must apply them in descending order (or
//! re-fetch after each removal); `Removal` reports the relocation so
//! iterating callers can account for it.

use crate::entity::Entity;
use crate::enums::Owner;
use crate::model::ModelTable;

/// Result of a successful `remove`: which index (if any) was relocated
/// into the vacated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    /// Former index of the entity that now occupies the removed slot,
    /// or `None` when the removed entity was already last.
    pub relocated_from: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Entity>,
    capacity: usize,
    player_backup: Option<Entity>,
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::with_capacity(crate::constants::MAX_ENTITIES)
    }
}

impl EntityPool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            player_backup: None,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entities and the player backup.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.player_backup = None;
    }

    /// Add an entity at the end of the active range.
    /// Returns false (no-op) when the pool is full.
    pub fn append(&mut self, entity: Entity) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots.push(entity);
        true
    }

    /// Swap-with-last removal, O(1). Returns `None` for an out-of-range
    /// index. Relocation invalidates the moved entity's cached envelope
    /// position in iteration order — see the module docs.
    pub fn remove(&mut self, index: usize) -> Option<Removal> {
        if index >= self.slots.len() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap_remove(index);
        Some(Removal {
            relocated_from: (index != last).then_some(last),
        })
    }

    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.slots.get_mut(index)
    }

    /// The active entities, in pool order.
    pub fn entities(&self) -> &[Entity] {
        &self.slots
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.slots
    }

    /// The player entity (slot 0), if a match is set up.
    pub fn player(&self) -> Option<&Entity> {
        self.slots.first()
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.slots.first_mut()
    }

    /// Save the player's current pose as the respawn snapshot.
    pub fn snapshot_player(&mut self) {
        self.player_backup = self.slots.first().copied();
    }

    /// Overwrite the player slot from the respawn snapshot (full pose).
    /// Returns false when either side is missing.
    pub fn restore_player(&mut self) -> bool {
        match (self.player_backup, self.slots.first_mut()) {
            (Some(backup), Some(slot)) => {
                *slot = backup;
                true
            }
            _ => false,
        }
    }

    /// Live enemies, derived by scanning the model-id partition.
    pub fn enemy_count(&self) -> usize {
        self.slots.iter().filter(|e| e.is_enemy()).count()
    }

    /// Live shots belonging to `owner`.
    pub fn shot_count(&self, owner: Owner) -> usize {
        self.slots.iter().filter(|e| e.is_shot_of(owner)).count()
    }

    /// Recompute every active entity's envelope. Must run before any
    /// collision decision in a tick, and again after any removal.
    pub fn refresh_envelopes(&mut self, models: &ModelTable) {
        for entity in &mut self.slots {
            entity.refresh_envelope(models);
        }
    }
}
