//! HTTP handlers for the books catalog routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use estante_http::error::AppError;

use super::models::{Book, Confirmation, DonateRequest};
use super::store::BookStore;

const LANDING_PAGE: &str = include_str!("../../../../templates/index.html");

/// Build the books router with its storage gateway as state.
pub fn router(store: BookStore) -> Router {
    Router::new()
        .route("/", get(homepage))
        .route("/doar", post(donate))
        .route("/livros", get(list_books))
        .route("/livros/{id}", delete(delete_book))
        .with_state(store)
}

/// Static landing page
async fn homepage() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Register a donated book
async fn donate(
    State(store): State<BookStore>,
    Json(payload): Json<DonateRequest>,
) -> Result<(StatusCode, Json<Confirmation>), AppError> {
    let book = payload.validate().map_err(|missing| {
        let details = missing
            .iter()
            .map(|field| json!({"field": field, "error": "required"}))
            .collect();
        AppError::validation(details, "Todos os campos são obrigatórios")
    })?;

    let id = store.insert(&book).await?;
    tracing::info!(id, titulo = %book.titulo, "book registered");

    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("Livro cadastrado com sucesso")),
    ))
}

/// List the whole catalog
async fn list_books(State(store): State<BookStore>) -> Result<Json<Vec<Book>>, AppError> {
    let books = store.list_all().await?;
    Ok(Json(books))
}

/// Remove a book by id; zero rows affected means the id never existed
async fn delete_book(
    State(store): State<BookStore>,
    Path(id): Path<i64>,
) -> Result<Json<Confirmation>, AppError> {
    let removed = store.delete_by_id(id).await?;

    if removed == 0 {
        return Err(AppError::not_found("Livro não encontrado"));
    }

    tracing::info!(id, "book removed");
    Ok(Json(Confirmation::new("Livro excluído com sucesso")))
}
