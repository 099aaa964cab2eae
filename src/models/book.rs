//! Book model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A book stored on a shelf. The ISBN is the lookup key within its shelf.
///
/// Absent fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Book {
    /// Author name
    pub author: String,
    /// ISBN, unique per shelf only by convention
    pub isbn: String,
    /// Title
    pub title: String,
    /// Page count
    pub pages: u64,
}
