//! Generic in-memory repository keyed by entity id.

use std::collections::BTreeMap;

use crate::entity::{Entity, Quantified};
use crate::error::{DomainError, DomainResult};

/// An ownership container keyed by entity id, holding at most one record
/// per id.
///
/// Invariant: no two stored records share an id. The backing map is ordered
/// so [`Repository::list`] returns records in ascending id order.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    records: BTreeMap<T::Id, T>,
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Insert a record, rejecting a duplicate id.
    ///
    /// On failure the previously stored record is unchanged.
    pub fn add(&mut self, record: T) -> DomainResult<()> {
        let id = record.id();
        if self.records.contains_key(&id) {
            return Err(DomainError::duplicate_key(format!("id {id}")));
        }
        self.records.insert(id, record);
        Ok(())
    }

    /// Fetch a record by id.
    pub fn get(&self, id: T::Id) -> DomainResult<&T> {
        self.records
            .get(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))
    }

    /// Delete a record by id, returning it.
    pub fn remove(&mut self, id: T::Id) -> DomainResult<T> {
        self.records
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

impl<T: Entity + Clone> Repository<T> {
    /// Snapshot of all records in ascending id order.
    ///
    /// The returned collection is a copy; mutating it does not affect
    /// repository state.
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }
}

impl<T: Entity + Quantified> Repository<T> {
    /// Overwrite the stored quantity of a record.
    ///
    /// A negative `new_quantity` is rejected before the id is looked up, so
    /// an invalid value on an absent id reports `InvalidQuantity`, not
    /// `NotFound`.
    pub fn update_quantity(&mut self, id: T::Id, new_quantity: i64) -> DomainResult<()> {
        if new_quantity < 0 {
            return Err(DomainError::invalid_quantity(format!(
                "quantity cannot be negative (got {new_quantity})"
            )));
        }
        let record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("id {id}")))?;
        record.set_quantity(new_quantity);
        Ok(())
    }
}
