//! Repository layer holding the in-memory catalog

pub mod shelves;

use crate::models::Shelf;

/// Main repository struct; clones share the same shelves
#[derive(Clone, Default)]
pub struct Repository {
    pub shelves: shelves::ShelvesRepository,
}

impl Repository {
    /// Create a repository seeded with the given shelves
    pub fn new(shelves: Vec<Shelf>) -> Self {
        Self {
            shelves: shelves::ShelvesRepository::new(shelves),
        }
    }
}
