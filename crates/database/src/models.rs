use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registry member. The `Books` collection is not a column; it is filled
/// in by the explicit two-step fetch (parent by id, then children by owner
/// reference) and stays empty everywhere else.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Books", default)]
    #[sqlx(skip)]
    pub books: Vec<Book>,
}

/// A book with an owner reference. `person_id` points at `people.id` but is
/// not constrained to it; it may dangle after the owner is deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "CallNumber")]
    pub call_number: i64,
    #[serde(rename = "PersonID")]
    pub person_id: i64,
}

impl Person {
    /// The zero-valued representation returned when a delete matches no row.
    pub fn zeroed() -> Self {
        Self {
            id: 0,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            deleted_at: None,
            name: String::new(),
            email: String::new(),
            books: Vec::new(),
        }
    }
}

impl Book {
    /// The zero-valued representation returned when a delete matches no row.
    pub fn zeroed() -> Self {
        Self {
            id: 0,
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
            deleted_at: None,
            title: String::new(),
            author: String::new(),
            call_number: 0,
            person_id: 0,
        }
    }
}

/// Creation payload for a person. Missing fields decode to their zero values,
/// matching the lenient decoding of the published API. A nested `Books` array
/// is accepted but not persisted (nested creation is not wired up).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPerson {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Books", default)]
    pub books: Vec<NewBook>,
}

/// Creation payload for a book.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBook {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Author", default)]
    pub author: String,
    #[serde(rename = "CallNumber", default)]
    pub call_number: i64,
    #[serde(rename = "PersonID", default)]
    pub person_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_serializes_with_wire_field_names() {
        let mut person = Person::zeroed();
        person.id = 1;
        person.name = "Jack".to_string();
        person.email = "jack@email.com".to_string();

        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["ID"], 1);
        assert_eq!(value["Name"], "Jack");
        assert_eq!(value["Email"], "jack@email.com");
        assert_eq!(value["Books"], json!([]));
        assert!(value["DeletedAt"].is_null());
    }

    #[test]
    fn book_serializes_with_wire_field_names() {
        let mut book = Book::zeroed();
        book.id = 3;
        book.title = "X".to_string();
        book.author = "Y".to_string();
        book.call_number = 9999;
        book.person_id = 1;

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["ID"], 3);
        assert_eq!(value["Title"], "X");
        assert_eq!(value["CallNumber"], 9999);
        assert_eq!(value["PersonID"], 1);
    }

    #[test]
    fn new_person_tolerates_missing_fields() {
        let payload: NewPerson = serde_json::from_value(json!({"Name": "Jack"})).unwrap();
        assert_eq!(payload.name, "Jack");
        assert_eq!(payload.email, "");
        assert!(payload.books.is_empty());
    }

    #[test]
    fn new_book_decodes_spec_payload() {
        let payload: NewBook = serde_json::from_value(json!({
            "Title": "X",
            "Author": "Y",
            "CallNumber": 9999,
            "PersonID": 1
        }))
        .unwrap();
        assert_eq!(payload.title, "X");
        assert_eq!(payload.author, "Y");
        assert_eq!(payload.call_number, 9999);
        assert_eq!(payload.person_id, 1);
    }

    #[test]
    fn zeroed_entities_carry_zero_identity() {
        assert_eq!(Person::zeroed().id, 0);
        assert_eq!(Book::zeroed().id, 0);
        assert_eq!(Book::zeroed().call_number, 0);
    }
}
