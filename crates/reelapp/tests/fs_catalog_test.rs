use reelapp::model::{MovieUpdate, NewMovie};
use reelapp::store::backend::StorageBackend;
use reelapp::store::fs::FileCatalog;
use reelapp::store::fs_backend::FsBackend;
use reelapp::store::DataStore;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

fn read_doc(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_missing_file_creates_parents_and_empty_document() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data").join("catalog").join("movies.json");

    let store = FileCatalog::open_path(&path);

    assert!(store.is_empty());
    assert_eq!(read_doc(&path), json!({ "movies": [], "next_id": 1 }));
}

#[test]
fn test_empty_file_self_heals() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");
    fs::write(&path, "").unwrap();

    let store = FileCatalog::open_path(&path);

    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
    assert_eq!(read_doc(&path), json!({ "movies": [], "next_id": 1 }));
}

#[test]
fn test_corrupt_file_self_heals() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");
    fs::write(&path, "{\"movies\": [ {\"id\": 1, ").unwrap();

    let mut store = FileCatalog::open_path(&path);
    assert!(store.is_empty());

    let movie = store.add(NewMovie::new("Heat", "Michael Mann", 1995, "Crime"));
    assert_eq!(movie.id, 1);
    assert_eq!(read_doc(&path)["next_id"], 2);
}

#[test]
fn test_reopen_sees_previous_session() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");

    {
        let mut store = FileCatalog::open_path(&path);
        store.add(NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi").with_rating(8.8));
        store.add(NewMovie::new("Dunkirk", "Christopher Nolan", 2017, "War"));
        store.add(NewMovie::new("Heat", "Michael Mann", 1995, "Crime"));
        store.delete(2).unwrap();
        store
            .update(
                3,
                &MovieUpdate {
                    is_watched: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    let mut store = FileCatalog::open_path(&path);
    let titles: Vec<_> = store.list().into_iter().map(|m| m.title).collect();
    assert_eq!(titles, vec!["Inception", "Heat"]);
    assert_eq!(store.get(1).unwrap().rating, Some(8.8));
    assert!(store.get(3).unwrap().is_watched);

    // The counter survives the restart, so id 2 stays retired
    let tenet = store.add(NewMovie::new("Tenet", "Christopher Nolan", 2020, "Sci-Fi"));
    assert_eq!(tenet.id, 4);
}

#[test]
fn test_document_without_next_id_derives_counter() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");
    fs::write(
        &path,
        r#"{"movies": [
            {"id": 4, "title": "Heat", "director": "Michael Mann", "year": 1995, "genre": "Crime"},
            {"id": 2, "title": "Dunkirk", "director": "Christopher Nolan", "year": 2017, "genre": "War"}
        ]}"#,
    )
    .unwrap();

    let mut store = FileCatalog::open_path(&path);

    assert_eq!(store.next_id(), 5);
    assert_eq!(store.list()[0].id, 2);
    assert!(!store.get(4).unwrap().is_watched);
    assert_eq!(store.add(NewMovie::new("Tenet", "Christopher Nolan", 2020, "Sci-Fi")).id, 5);
}

#[test]
fn test_document_on_disk_uses_snake_case_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");
    let mut store = FileCatalog::open_path(&path);
    store.add(NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi").watched());

    let doc = read_doc(&path);
    let movie = &doc["movies"][0];
    assert_eq!(movie["id"], 1);
    assert_eq!(movie["is_watched"], true);
    assert_eq!(movie["rating"], Value::Null);
}

#[test]
fn test_atomic_write_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");
    let mut store = FileCatalog::open_path(&path);
    for year in 2000..2005 {
        store.add(NewMovie::new("Memento", "Christopher Nolan", year, "Thriller"));
    }

    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn test_fs_backend_read_write() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("doc.json");
    let backend = FsBackend::new(&path);

    assert_eq!(backend.read_document().unwrap(), None);
    backend.write_document("{\"movies\": []}").unwrap();
    assert_eq!(
        backend.read_document().unwrap().as_deref(),
        Some("{\"movies\": []}")
    );
    assert_eq!(backend.location(), path);
}

#[test]
fn test_incomplete_entries_outlive_the_next_write() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("movies.json");
    fs::write(
        &path,
        r#"{"movies": [{"id": 2, "title": "Legacy", "year": 1990}], "next_id": 3}"#,
    )
    .unwrap();

    let mut store = FileCatalog::open_path(&path);
    store.add(NewMovie::new("Heat", "Michael Mann", 1995, "Crime"));

    let doc = read_doc(&path);
    assert_eq!(doc["movies"][0]["id"], 2);
    assert_eq!(doc["movies"][0]["title"], "Legacy");
    assert_eq!(doc["movies"][1]["id"], 3);
    assert_eq!(doc["next_id"], 4);
}
