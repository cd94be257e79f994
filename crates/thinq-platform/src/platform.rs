//! Entity registration with unique-id deduplication

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::entity::SelectEntity;

/// The platform's entity store
///
/// Registration is reconciled by unique id: the first entity registered
/// under an id wins and later submissions with the same id are dropped, so
/// integrations may resubmit the same batch on every discovery pass.
pub struct EntityPlatform {
    entities: DashMap<String, Arc<dyn SelectEntity>>,
}

impl EntityPlatform {
    pub fn new() -> Self {
        Self {
            entities: DashMap::new(),
        }
    }

    /// Register a batch of entities; returns how many were actually added
    pub fn add_entities(&self, new_entities: Vec<Arc<dyn SelectEntity>>) -> usize {
        let mut added = 0;
        for entity in new_entities {
            let unique_id = entity.unique_id().to_string();
            match self.entities.entry(unique_id.clone()) {
                dashmap::mapref::entry::Entry::Occupied(_) => {
                    debug!(unique_id = %unique_id, "entity already registered, skipping");
                }
                dashmap::mapref::entry::Entry::Vacant(slot) => {
                    slot.insert(entity);
                    added += 1;
                }
            }
        }
        if added > 0 {
            info!(added, total = self.entities.len(), "registered select entities");
        }
        added
    }

    /// Look up a registered entity by unique id
    pub fn entity(&self, unique_id: &str) -> Option<Arc<dyn SelectEntity>> {
        self.entities.get(unique_id).map(|e| e.clone())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for EntityPlatform {
    fn default() -> Self {
        Self::new()
    }
}
