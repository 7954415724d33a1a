use super::types::{TouchContact, TouchId};
use crate::coords::Vec2;

/// Tracked state of one active contact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Vec2,
}

impl From<TouchContact> for TouchPoint {
    #[inline]
    fn from(c: TouchContact) -> Self {
        Self { id: c.id, position: c.position }
    }
}

/// Result of applying a move to the tracked contacts.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchUpdate {
    /// Number of tracked points with the contact's id that were overwritten.
    Updated(usize),
    /// Contact is not tracked (it may have started before tracking began).
    NoMatch,
}

/// Result of ending a contact.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TouchRemoval {
    Removed(TouchPoint),
    NoMatch,
}

/// Active touch contacts in start order.
#[derive(Debug, Default, Clone)]
pub struct TouchTracker {
    points: Vec<TouchPoint>,
}

impl TouchTracker {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn get(&self, id: TouchId) -> Option<&TouchPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Appends a point for a new contact.
    #[inline]
    pub fn track(&mut self, contact: TouchContact) {
        self.points.push(contact.into());
    }

    /// Overwrites the position of every tracked point with the contact's id.
    pub fn update(&mut self, contact: TouchContact) -> TouchUpdate {
        let mut hits = 0;
        for point in self.points.iter_mut().filter(|p| p.id == contact.id) {
            point.position = contact.position;
            hits += 1;
        }
        if hits == 0 { TouchUpdate::NoMatch } else { TouchUpdate::Updated(hits) }
    }

    /// Removes the first tracked point with `id`.
    pub fn remove(&mut self, id: TouchId) -> TouchRemoval {
        match self.points.iter().position(|p| p.id == id) {
            Some(index) => TouchRemoval::Removed(self.points.remove(index)),
            None => TouchRemoval::NoMatch,
        }
    }
}
