//! Catalog management service

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::Book,
    repository::Repository,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub shelves: usize,
    pub books: usize,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(repository: Repository, config: CatalogConfig) -> Self {
        Self { repository, config }
    }

    /// Fail early when `shelf_id` does not resolve to a shelf
    pub async fn require_shelf(&self, shelf_id: &str) -> AppResult<()> {
        self.repository.shelves.exists(shelf_id).await
    }

    /// Ids of all shelves in fixed order
    pub async fn list_shelves(&self) -> Vec<String> {
        self.repository.shelves.list_ids().await
    }

    /// Shelf and book totals
    pub async fn summary(&self) -> CatalogSummary {
        let (shelves, books) = self.repository.shelves.counts().await;
        CatalogSummary { shelves, books }
    }

    /// Books currently on a shelf
    pub async fn get_shelf_books(&self, shelf_id: &str) -> AppResult<Vec<Book>> {
        self.repository.shelves.get_books(shelf_id).await
    }

    /// Get a book by ISBN
    pub async fn get_book(&self, shelf_id: &str, isbn: &str) -> AppResult<Book> {
        self.repository.shelves.get_book(shelf_id, isbn).await
    }

    /// Create a book keyed by `isbn`. The body ISBN must match the path.
    pub async fn create_book(&self, shelf_id: &str, isbn: &str, book: Book) -> AppResult<()> {
        if book.isbn != isbn {
            return Err(AppError::IsbnMismatch {
                path: isbn.to_string(),
                body: book.isbn,
            });
        }

        self.repository
            .shelves
            .create_book(shelf_id, book, self.config.reject_duplicate_isbn)
            .await?;

        tracing::info!(shelf = shelf_id, isbn, "Book created");
        Ok(())
    }

    /// Replace the book stored under `isbn`. The new book may carry another ISBN.
    pub async fn update_book(&self, shelf_id: &str, isbn: &str, book: Book) -> AppResult<()> {
        let new_isbn = book.isbn.clone();
        self.repository.shelves.update_book(shelf_id, isbn, book).await?;

        tracing::info!(shelf = shelf_id, isbn, new_isbn = %new_isbn, "Book updated");
        Ok(())
    }

    /// Delete a book by ISBN
    pub async fn delete_book(&self, shelf_id: &str, isbn: &str) -> AppResult<()> {
        let removed = self.repository.shelves.delete_book(shelf_id, isbn).await?;

        tracing::info!(shelf = shelf_id, isbn, title = %removed.title, "Book deleted");
        Ok(())
    }
}
