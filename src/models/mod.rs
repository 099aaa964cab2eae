//! Data models for the bookshelf catalog

pub mod book;
pub mod shelf;

pub use book::Book;
pub use shelf::{Shelf, ShelfId};
