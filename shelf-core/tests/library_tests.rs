//! Library behaviour driven through JSON payloads, as the server uses it

use shelf_core::{BookPatch, Library, NewBook, ShelfError, Status};
use std::sync::Arc;
use std::thread;

fn create(library: &Library, body: &str) -> uuid::Uuid {
    let payload: NewBook = serde_json::from_str(body).unwrap();
    let book = payload.validate().unwrap();
    let id = book.id;
    library.add(book);
    id
}

#[test]
fn test_patch_flow_keeps_untouched_fields() {
    let library = Library::new();
    let id = create(
        &library,
        r#"{"title":"Dune","author":"Frank Herbert","publish_date":"1965-08-01T00:00:00Z","rating":3}"#,
    );

    let patch: BookPatch = serde_json::from_str(r#"{"status":1}"#).unwrap();
    library.modify(id, patch.validate().unwrap()).unwrap();

    let book = library.get_by_id(id).unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert!(book.publish_date.is_some());
    assert_eq!(book.rating.get(), 3);
    assert_eq!(book.status, Status::CheckedOut);
}

#[test]
fn test_patch_null_date_clears_it() {
    let library = Library::new();
    let id = create(
        &library,
        r#"{"title":"Dune","publish_date":"1965-08-01T00:00:00Z","rating":3}"#,
    );

    let patch: BookPatch = serde_json::from_str(r#"{"publish_date":null}"#).unwrap();
    library.modify(id, patch.validate().unwrap()).unwrap();

    assert_eq!(library.get_by_id(id).unwrap().publish_date, None);
}

#[test]
fn test_invalid_patch_never_reaches_store() {
    let library = Library::new();
    let id = create(&library, r#"{"title":"Kept","rating":2}"#);

    let patch: BookPatch = serde_json::from_str(r#"{"title":"Lost","rating":0}"#).unwrap();
    assert_eq!(patch.validate(), Err(ShelfError::InvalidRating(0)));

    assert_eq!(library.get_by_id(id).unwrap().title, "Kept");
}

#[test]
fn test_concurrent_writers_and_readers() {
    let library = Arc::new(Library::new());

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let library = Arc::clone(&library);
            thread::spawn(move || {
                for i in 0..100 {
                    create(&library, &format!(r#"{{"title":"w{t}-{i}","rating":1}}"#));
                }
            })
        })
        .collect();

    let reader = {
        let library = Arc::clone(&library);
        thread::spawn(move || {
            for _ in 0..100 {
                let books = library.list();
                assert!(books.windows(2).all(|w| w[0].title <= w[1].title));
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    assert_eq!(library.len(), 400);
}
