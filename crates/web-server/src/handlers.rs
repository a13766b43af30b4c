use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use database::{Book, NewBook, NewPerson, Person};
use std::sync::Arc;

// ----- People -----

/// # GET /people
pub async fn get_people(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Person>>, AppError> {
    let people = state.repo.list_people().await?;
    Ok(Json(people))
}

/// # GET /person/:id
///
/// Two-step fetch: the person row first, then every book whose owner
/// reference equals the id, attached as the `Books` collection.
pub async fn get_person(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Person>, AppError> {
    let Some(mut person) = state.repo.get_person(id).await? else {
        return Err(AppError::NotFound(format!("person {id} not found")));
    };
    person.books = state.repo.books_owned_by(id).await?;
    Ok(Json(person))
}

/// # POST /create/person
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewPerson>,
) -> Result<Json<Person>, AppError> {
    let person = state.repo.create_person(&payload).await?;
    Ok(Json(person))
}

/// # DELETE /delete/person/:id
///
/// Idempotent: a miss answers 200 with the zero-valued person rather than an
/// error. Owned books are never cascaded.
pub async fn delete_person(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Person>, AppError> {
    let person = state.repo.delete_person(id).await?;
    Ok(Json(person.unwrap_or_else(Person::zeroed)))
}

// ----- Books -----

/// # GET /books
pub async fn get_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.repo.list_books().await?;
    Ok(Json(books))
}

/// # GET /book/:id
pub async fn get_book(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Book>, AppError> {
    let Some(book) = state.repo.get_book(id).await? else {
        return Err(AppError::NotFound(format!("book {id} not found")));
    };
    Ok(Json(book))
}

/// # POST /create/book
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewBook>,
) -> Result<Json<Book>, AppError> {
    let book = state.repo.create_book(&payload).await?;
    Ok(Json(book))
}

/// # DELETE /delete/book/:id
pub async fn delete_book(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Book>, AppError> {
    let book = state.repo.delete_book(id).await?;
    Ok(Json(book.unwrap_or_else(Book::zeroed)))
}
