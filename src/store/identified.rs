//! Ordered arena of state slices keyed by stable identifiers.

/// A state slice that carries its own stable identity.
pub trait Identifiable {
    type Id: Copy + Eq;

    fn id(&self) -> Self::Id;
}

/// Ordered collection of child state slices addressed by id.
///
/// Used by parent reducers to route keyed child actions: an action for an id
/// that is no longer present (the row was removed while an effect was in
/// flight) falls through as a no-op.
///
/// Lookup is linear; screens hold at most a few dozen slices.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifiedList<T: Identifiable> {
    items: Vec<T>,
}

impl<T: Identifiable> IdentifiedList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the whole collection, keeping the first slice for each id.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        for item in items {
            if self.get(item.id()).is_none() {
                self.items.push(item);
            }
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }
}

impl<T: Identifiable> Default for IdentifiedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> FromIterator<T> for IdentifiedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.replace_all(iter);
        list
    }
}
