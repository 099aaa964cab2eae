//! In-memory shelf storage guarded by a single reader-writer lock

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Book, Shelf, ShelfId},
};

/// Resolve `id` against shelves borrowed from a held guard.
pub fn find_shelf<'a>(shelves: &'a [Shelf], id: &str) -> AppResult<&'a Shelf> {
    let shelf_id: ShelfId = id.parse()?;
    shelves
        .iter()
        .find(|shelf| shelf.matches(shelf_id))
        .ok_or_else(|| AppError::ShelfNotFound(id.to_string()))
}

/// Mutable counterpart of [`find_shelf`], for use under a write guard.
pub fn find_shelf_mut<'a>(shelves: &'a mut [Shelf], id: &str) -> AppResult<&'a mut Shelf> {
    let shelf_id: ShelfId = id.parse()?;
    shelves
        .iter_mut()
        .find(|shelf| shelf.matches(shelf_id))
        .ok_or_else(|| AppError::ShelfNotFound(id.to_string()))
}

#[derive(Clone)]
pub struct ShelvesRepository {
    shelves: Arc<RwLock<Vec<Shelf>>>,
}

impl ShelvesRepository {
    pub fn new(shelves: Vec<Shelf>) -> Self {
        Self {
            shelves: Arc::new(RwLock::new(shelves)),
        }
    }

    /// Check that `id` names an existing shelf
    pub async fn exists(&self, id: &str) -> AppResult<()> {
        let shelves = self.shelves.read().await;
        find_shelf(&shelves, id).map(|_| ())
    }

    /// Shelf ids in fixed shelf order
    pub async fn list_ids(&self) -> Vec<String> {
        let shelves = self.shelves.read().await;
        shelves.iter().map(|shelf| shelf.id().to_string()).collect()
    }

    /// Number of shelves and total number of books across them
    pub async fn counts(&self) -> (usize, usize) {
        let shelves = self.shelves.read().await;
        let books: usize = shelves.iter().map(|shelf| shelf.books.len()).sum();
        (shelves.len(), books)
    }

    /// Snapshot of a shelf's books
    pub async fn get_books(&self, id: &str) -> AppResult<Vec<Book>> {
        let shelves = self.shelves.read().await;
        Ok(find_shelf(&shelves, id)?.books.clone())
    }

    /// First book on the shelf whose ISBN equals `isbn`
    pub async fn get_book(&self, id: &str, isbn: &str) -> AppResult<Book> {
        let shelves = self.shelves.read().await;
        find_shelf(&shelves, id)?
            .books
            .iter()
            .find(|book| book.isbn == isbn)
            .cloned()
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))
    }

    /// Append `book` to the shelf. With `reject_duplicates` the shelf is scanned
    /// for `book.isbn` inside the same critical section first.
    pub async fn create_book(&self, id: &str, book: Book, reject_duplicates: bool) -> AppResult<()> {
        let mut shelves = self.shelves.write().await;
        let shelf = find_shelf_mut(&mut shelves, id)?;

        if reject_duplicates && shelf.position_of(&book.isbn).is_some() {
            return Err(AppError::DuplicateIsbn(book.isbn));
        }

        shelf.books.push(book);
        Ok(())
    }

    /// Replace the first book matching `isbn` wholesale
    pub async fn update_book(&self, id: &str, isbn: &str, book: Book) -> AppResult<()> {
        let mut shelves = self.shelves.write().await;
        let shelf = find_shelf_mut(&mut shelves, id)?;

        let index = shelf
            .position_of(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        shelf.books[index] = book;
        Ok(())
    }

    /// Remove the first book matching `isbn`. The last book takes its slot,
    /// so the order of the remaining books is not preserved.
    pub async fn delete_book(&self, id: &str, isbn: &str) -> AppResult<Book> {
        let mut shelves = self.shelves.write().await;
        let shelf = find_shelf_mut(&mut shelves, id)?;

        let index = shelf
            .position_of(isbn)
            .ok_or_else(|| AppError::BookNotFound(isbn.to_string()))?;
        Ok(shelf.books.swap_remove(index))
    }
}

impl Default for ShelvesRepository {
    fn default() -> Self {
        Self::new(Shelf::defaults())
    }
}
