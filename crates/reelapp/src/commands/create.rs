use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewMovie;
use crate::store::DataStore;
use crate::validation::validate_new_movie;

pub fn run<S: DataStore>(store: &mut S, movie: NewMovie) -> Result<CmdResult> {
    let movie = validate_new_movie(movie)?;
    let created = store.add(movie);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie created successfully: {} ({})",
        created.title, created.id
    )));
    result.affected_movies.push(created);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReelError;
    use crate::store::memory::InMemoryCatalog;

    #[test]
    fn creates_with_assigned_id() {
        let mut store = InMemoryCatalog::new();
        let result = run(
            &mut store,
            NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi"),
        )
        .unwrap();

        assert_eq!(result.affected_movies.len(), 1);
        assert_eq!(result.affected_movies[0].id, 1);
        assert!(result.summary().contains("Movie created successfully"));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn stores_trimmed_title() {
        let mut store = InMemoryCatalog::new();
        run(
            &mut store,
            NewMovie::new("  Dunkirk ", "Christopher Nolan", 2017, "War"),
        )
        .unwrap();
        assert_eq!(store.get(1).unwrap().title, "Dunkirk");
    }

    #[test]
    fn invalid_payload_is_not_stored() {
        let mut store = InMemoryCatalog::new();
        let result = run(&mut store, NewMovie::new("Old", "Someone", 1700, "Drama"));

        match result {
            Err(ReelError::Validation(errors)) => assert_eq!(errors.fields(), vec!["year"]),
            other => panic!("Expected validation error, got {:?}", other),
        }
        assert!(store.list().is_empty());
        assert_eq!(store.next_id(), 1);
    }
}
