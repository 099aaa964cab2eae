//! Bookshelf catalog server
//!
//! A small REST JSON API over an in-memory catalog of books kept on four
//! fixed alphabetical shelves (`A-G`, `H-J`, `K-T`, `U-Z`).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use models::Shelf;
use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<Services>,
}

impl AppState {
    /// Build state around a catalog seeded with the four empty shelves
    pub fn new(config: &AppConfig) -> Self {
        let repository = Repository::new(Shelf::defaults());
        let services = Services::new(repository, config.catalog.clone());

        Self {
            services: Arc::new(services),
        }
    }
}
