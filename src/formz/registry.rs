//! Ordered collection of the fields making up one form.
//!
//! Insertion order is display order, so the registry is backed by a `Vec`
//! with name lookup rather than a hash map. The registry key is always the
//! descriptor's own `name`, which keeps the "key equals name" invariant
//! structural instead of something to check.
//!
//! Registries are cheap to clone on purpose: the form controller replaces
//! the whole registry on every input change instead of mutating a shared
//! snapshot (validator closures are shared via `Arc`, so a clone copies
//! strings and flags, not rules).

use crate::model::FieldDescriptor;

#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, keeping insertion order.
    ///
    /// Inserting a name that is already present replaces the existing
    /// descriptor in its original position.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.insert(field);
        self
    }

    /// Insert or replace a field by name.
    pub fn insert(&mut self, field: FieldDescriptor) {
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldRegistry {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
