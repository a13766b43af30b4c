use crate::models::{Book, NewBook, NewPerson, Person};
use crate::DbError;
use sqlx::postgres::PgPool;

const PERSON_COLUMNS: &str = "id, created_at, updated_at, deleted_at, name, email";
const BOOK_COLUMNS: &str =
    "id, created_at, updated_at, deleted_at, title, author, call_number, person_id";

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
///
/// Deletes are soft: rows get a `deleted_at` timestamp and every read filters
/// them out. Ids are assigned by the database on insert.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ----- People -----

    /// Fetches all live people. No pagination; this is a full-table read.
    pub async fn list_people(&self) -> Result<Vec<Person>, DbError> {
        let query = format!("SELECT {PERSON_COLUMNS} FROM people WHERE deleted_at IS NULL");
        let people = sqlx::query_as::<_, Person>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(people)
    }

    /// Fetches a single person by id, or `None` if no live row matches.
    ///
    /// This is step one of the two-step relationship contract: fetch the
    /// parent here, then call [`Self::books_owned_by`] for the children.
    pub async fn get_person(&self, id: i64) -> Result<Option<Person>, DbError> {
        let query =
            format!("SELECT {PERSON_COLUMNS} FROM people WHERE id = $1 AND deleted_at IS NULL");
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(person)
    }

    /// Inserts a person and returns the stored row with its assigned id.
    /// A duplicate email surfaces as `DbError::UniqueViolation`.
    pub async fn create_person(&self, new: &NewPerson) -> Result<Person, DbError> {
        let query = format!(
            "INSERT INTO people (name, email) VALUES ($1, $2) RETURNING {PERSON_COLUMNS}"
        );
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(&new.name)
            .bind(&new.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(person)
    }

    /// Soft-deletes a person, returning the deleted row, or `None` when no
    /// live row matched. Owned books are untouched (no cascade).
    pub async fn delete_person(&self, id: i64) -> Result<Option<Person>, DbError> {
        let query = format!(
            "UPDATE people SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {PERSON_COLUMNS}"
        );
        let person = sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(person)
    }

    // ----- Books -----

    /// Fetches all live books.
    pub async fn list_books(&self) -> Result<Vec<Book>, DbError> {
        let query = format!("SELECT {BOOK_COLUMNS} FROM books WHERE deleted_at IS NULL");
        let books = sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Fetches a single book by id, or `None` if no live row matches.
    pub async fn get_book(&self, id: i64) -> Result<Option<Book>, DbError> {
        let query =
            format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = $1 AND deleted_at IS NULL");
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Fetches all live books whose owner reference equals `person_id`.
    ///
    /// Step two of the two-step relationship contract; storage order, no
    /// ordering guarantee.
    pub async fn books_owned_by(&self, person_id: i64) -> Result<Vec<Book>, DbError> {
        let query = format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE person_id = $1 AND deleted_at IS NULL"
        );
        let books = sqlx::query_as::<_, Book>(&query)
            .bind(person_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Inserts a book and returns the stored row with its assigned id.
    /// A duplicate call number surfaces as `DbError::UniqueViolation`. The
    /// owner reference is stored as given, existing person or not.
    pub async fn create_book(&self, new: &NewBook) -> Result<Book, DbError> {
        let query = format!(
            "INSERT INTO books (title, author, call_number, person_id) \
             VALUES ($1, $2, $3, $4) RETURNING {BOOK_COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(&new.title)
            .bind(&new.author)
            .bind(new.call_number)
            .bind(new.person_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(book)
    }

    /// Soft-deletes a book, returning the deleted row, or `None` when no
    /// live row matched.
    pub async fn delete_book(&self, id: i64) -> Result<Option<Book>, DbError> {
        let query = format!(
            "UPDATE books SET deleted_at = now(), updated_at = now() \
             WHERE id = $1 AND deleted_at IS NULL RETURNING {BOOK_COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }
}
