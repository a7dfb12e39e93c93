#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `reel` command isolated from the user's config and working directory.
fn reel_cmd(temp: &TempDir) -> Command {
    let global_dir = temp.path().join("global");
    fs::create_dir_all(&global_dir).unwrap();
    let mut cmd = Command::new(cargo_bin("reel"));
    cmd.env("REEL_CONFIG_DIR", global_dir.as_os_str())
        .env_remove("RUST_LOG")
        .current_dir(temp.path());
    cmd
}

fn add(temp: &TempDir, title: &str, director: &str, year: &str, genre: &str) {
    reel_cmd(temp)
        .args(["add", title, "-d", director, "-y", year, "-g", genre])
        .assert()
        .success();
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn read_doc(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_add_creates_catalog_in_working_directory() {
    let temp = TempDir::new().unwrap();

    reel_cmd(&temp)
        .args(["add", "Inception", "-d", "Christopher Nolan", "-y", "2010", "-g", "Sci-Fi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie created successfully"));

    let doc = read_doc(&temp.path().join("movies.json"));
    assert_eq!(doc["movies"][0]["title"], "Inception");
    assert_eq!(doc["next_id"], 2);
}

#[test]
fn test_naked_invocation_lists() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Heat", "Michael Mann", "1995", "Crime");

    reel_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Heat"))
        .stdout(predicate::str::contains("1 movies found"));
}

#[test]
fn test_ids_survive_between_runs() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Inception", "Christopher Nolan", "2010", "Sci-Fi");
    add(&temp, "Dunkirk", "Christopher Nolan", "2017", "War");

    reel_cmd(&temp).args(["delete", "1"]).assert().success();
    add(&temp, "Tenet", "Christopher Nolan", "2020", "Sci-Fi");

    let listing = json_output(reel_cmd(&temp).args(["list", "--json"]));
    let ids: Vec<u64> = listing["movies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_get_unknown_id_fails() {
    let temp = TempDir::new().unwrap();

    reel_cmd(&temp)
        .args(["get", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Movie not found with id: 42"));
}

#[test]
fn test_invalid_movie_is_rejected() {
    let temp = TempDir::new().unwrap();

    reel_cmd(&temp)
        .args(["add", "Old", "-d", "Nobody", "-y", "1700", "-g", "Drama"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year"));

    let doc = read_doc(&temp.path().join("movies.json"));
    assert_eq!(doc["movies"].as_array().unwrap().len(), 0);
}

#[test]
fn test_update_and_clear() {
    let temp = TempDir::new().unwrap();
    reel_cmd(&temp)
        .args([
            "add", "Inception", "-d", "Christopher Nolan", "-y", "2010", "-g", "Sci-Fi",
            "--rating", "8.8",
        ])
        .assert()
        .success();

    reel_cmd(&temp)
        .args(["update", "1", "--genre", "Thriller", "--clear", "rating", "--watched", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie with id 1 updated successfully"));

    let movie = &read_doc(&temp.path().join("movies.json"))["movies"][0];
    assert_eq!(movie["genre"], "Thriller");
    assert_eq!(movie["title"], "Inception");
    assert!(movie["rating"].is_null());
    assert_eq!(movie["is_watched"], true);
}

#[test]
fn test_filters_and_search() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Inception", "Christopher Nolan", "2010", "Sci-Fi");
    add(&temp, "The Dark Knight", "Christopher Nolan", "2008", "Action");
    add(&temp, "Heat", "Michael Mann", "1995", "Crime");

    let by_year = json_output(reel_cmd(&temp).args(["year", "2010", "--json"]));
    assert_eq!(by_year["movies"].as_array().unwrap().len(), 1);

    let by_director = json_output(reel_cmd(&temp).args(["director", "CHRISTOPHER NOLAN", "--json"]));
    assert_eq!(by_director["movies"].as_array().unwrap().len(), 2);

    let by_genre = json_output(reel_cmd(&temp).args(["genre", "crime", "--json"]));
    assert_eq!(by_genre["movies"][0]["title"], "Heat");

    let hits = json_output(reel_cmd(&temp).args(["search", "dark", "--json"]));
    assert_eq!(hits["movies"][0]["title"], "The Dark Knight");
}

#[test]
fn test_empty_filter_is_not_an_error() {
    let temp = TempDir::new().unwrap();
    add(&temp, "Heat", "Michael Mann", "1995", "Crime");

    reel_cmd(&temp)
        .args(["year", "1999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies found for year 1999"));

    reel_cmd(&temp)
        .args(["search", "ark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies found"));
}

#[test]
fn test_data_flag_overrides_location() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("nested").join("catalog.json");

    reel_cmd(&temp)
        .args(["add", "Heat", "-d", "Michael Mann", "-y", "1995", "-g", "Crime", "--data"])
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!temp.path().join("movies.json").exists());
}

#[test]
fn test_corrupt_catalog_heals() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("movies.json"), "not json at all").unwrap();

    reel_cmd(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 movies found"));

    let doc = read_doc(&temp.path().join("movies.json"));
    assert_eq!(doc, serde_json::json!({ "movies": [], "next_id": 1 }));
}

#[test]
fn test_local_config_sets_database_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("reel.toml"),
        "database_file = \"data/catalog.json\"\n",
    )
    .unwrap();

    add(&temp, "Heat", "Michael Mann", "1995", "Crime");
    assert!(temp.path().join("data").join("catalog.json").exists());

    reel_cmd(&temp)
        .args(["config", "get", "database_file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data/catalog.json"));
}

#[test]
fn test_config_does_not_create_catalog() {
    let temp = TempDir::new().unwrap();

    reel_cmd(&temp)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 8000"))
        .stdout(predicate::str::contains("app_name = Movie Catalog API"));

    assert!(!temp.path().join("movies.json").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    reel_cmd(&temp)
        .args(["config", "get", "no_such_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
