use crate::commands::{CmdMessage, CmdResult};
use crate::store::DataStore;

/// Whole-word title search. The query is trimmed before matching.
pub fn run<S: DataStore>(store: &S, query: &str) -> CmdResult {
    let query = query.trim();
    let movies = if query.is_empty() {
        Vec::new()
    } else {
        store.search_title_word(query)
    };

    let mut result = CmdResult::default();
    if movies.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No movies found matching search query: {}",
            query
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} movies found matching search query: {}",
            movies.len(),
            query
        )));
    }
    result.with_listed_movies(movies)
}
