//! Shelf and book endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Book, AppState};

/// List shelf ids
#[utoipa::path(
    get,
    path = "/shelves",
    tag = "shelves",
    responses(
        (status = 200, description = "Shelf ids in fixed order", body = Vec<String>)
    )
)]
pub async fn list_shelves(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.services.catalog.list_shelves().await)
}

/// Get the books on a shelf
#[utoipa::path(
    get,
    path = "/shelves/{id}",
    tag = "shelves",
    params(
        ("id" = String, Path, description = "Shelf id, e.g. A-G")
    ),
    responses(
        (status = 200, description = "Books on the shelf", body = Vec<Book>),
        (status = 404, description = "Shelf not found or malformed id", body = String)
    )
)]
pub async fn get_shelf(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.get_shelf_books(&id).await?;
    Ok(Json(books))
}

/// Get a book by ISBN
#[utoipa::path(
    get,
    path = "/shelves/{id}/{isbn}",
    tag = "shelves",
    params(
        ("id" = String, Path, description = "Shelf id, e.g. A-G"),
        ("isbn" = String, Path, description = "Book ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Shelf or book not found", body = String)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path((id, isbn)): Path<(String, String)>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id, &isbn).await?;
    Ok(Json(book))
}

/// Create a book on a shelf
#[utoipa::path(
    post,
    path = "/shelves/{id}/{isbn}",
    tag = "shelves",
    params(
        ("id" = String, Path, description = "Shelf id, e.g. A-G"),
        ("isbn" = String, Path, description = "Book ISBN, must equal the body's isbn")
    ),
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = String),
        (status = 400, description = "Malformed body or ISBN mismatch", body = String),
        (status = 404, description = "Shelf not found", body = String),
        (status = 409, description = "ISBN already on shelf (when duplicates are rejected)", body = String)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Path((id, isbn)): Path<(String, String)>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<(StatusCode, &'static str)> {
    let catalog = &state.services.catalog;
    catalog.require_shelf(&id).await?;
    let Json(book) = payload?;

    catalog.create_book(&id, &isbn, book).await?;
    Ok((StatusCode::CREATED, "Success!"))
}

/// Replace a book on a shelf
#[utoipa::path(
    patch,
    path = "/shelves/{id}/{isbn}",
    tag = "shelves",
    params(
        ("id" = String, Path, description = "Shelf id, e.g. A-G"),
        ("isbn" = String, Path, description = "ISBN of the book to replace")
    ),
    request_body = Book,
    responses(
        (status = 200, description = "Book updated", body = String),
        (status = 400, description = "Malformed body", body = String),
        (status = 404, description = "Shelf or book not found", body = String)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path((id, isbn)): Path<(String, String)>,
    payload: Result<Json<Book>, JsonRejection>,
) -> AppResult<&'static str> {
    let catalog = &state.services.catalog;
    catalog.require_shelf(&id).await?;
    let Json(book) = payload?;

    catalog.update_book(&id, &isbn, book).await?;
    Ok("Success!")
}

/// Delete a book from a shelf
#[utoipa::path(
    delete,
    path = "/shelves/{id}/{isbn}",
    tag = "shelves",
    params(
        ("id" = String, Path, description = "Shelf id, e.g. A-G"),
        ("isbn" = String, Path, description = "ISBN of the book to delete")
    ),
    responses(
        (status = 200, description = "Book deleted", body = String),
        (status = 404, description = "Shelf or book not found", body = String)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path((id, isbn)): Path<(String, String)>,
) -> AppResult<&'static str> {
    state.services.catalog.delete_book(&id, &isbn).await?;
    Ok("Deleted!")
}
