//! Ordered list of saved entries where at most one is the default.
//!
//! Shared by the address book and the payment-method list: both append new
//! entries as non-default, remove by id, and mark a single default.

use core::fmt::Display;

use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult, Entity};

pub(crate) trait DefaultFlag: Entity {
    fn is_default(&self) -> bool;
    fn set_default_flag(&mut self, is_default: bool);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct DefaultList<T> {
    items: Vec<T>,
}

impl<T> Default for DefaultList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> DefaultList<T>
where
    T: DefaultFlag,
    T::Id: Display,
{
    /// Append `item` as non-default. `kind` names the entry in error messages.
    pub(crate) fn insert(&mut self, mut item: T, kind: &str) -> DomainResult<()> {
        if self.get(item.id()).is_some() {
            return Err(DomainError::conflict(format!(
                "{kind} {} already exists",
                item.id()
            )));
        }
        item.set_default_flag(false);
        self.items.push(item);
        Ok(())
    }

    /// Removing the default leaves the list without one.
    pub(crate) fn remove(&mut self, id: &T::Id, kind: &str) -> DomainResult<T> {
        let i = self.position(id, kind)?;
        Ok(self.items.remove(i))
    }

    pub(crate) fn set_default(&mut self, id: &T::Id, kind: &str) -> DomainResult<()> {
        self.position(id, kind)?;
        for item in &mut self.items {
            let chosen = item.id() == id;
            item.set_default_flag(chosen);
        }
        Ok(())
    }

    pub(crate) fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn default_entry(&self) -> Option<&T> {
        self.items.iter().find(|item| item.is_default())
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    fn position(&self, id: &T::Id, kind: &str) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("{kind} {id}")))
    }
}
