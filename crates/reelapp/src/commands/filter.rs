use crate::commands::{CmdMessage, CmdResult};
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieFilter {
    Year(i32),
    Director(String),
    Genre(String),
}

impl MovieFilter {
    fn describe(&self) -> String {
        match self {
            MovieFilter::Year(year) => format!("for year {}", year),
            MovieFilter::Director(name) => format!("for director {}", name),
            MovieFilter::Genre(genre) => format!("for genre {}", genre),
        }
    }
}

/// Apply one filter. No match is an empty list, never an error.
pub fn run<S: DataStore>(store: &S, filter: &MovieFilter) -> CmdResult {
    let movies = match filter {
        MovieFilter::Year(year) => store.by_year(*year),
        MovieFilter::Director(name) => store.by_director(name),
        MovieFilter::Genre(genre) => store.by_genre(genre),
    };

    let mut result = CmdResult::default();
    if movies.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No movies found {}",
            filter.describe()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} movies found {}",
            movies.len(),
            filter.describe()
        )));
    }
    result.with_listed_movies(movies)
}
