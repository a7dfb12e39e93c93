use crate::commands::{CmdMessage, CmdResult};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> CmdResult {
    let movies = store.list();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} movies found", movies.len())));
    result.with_listed_movies(movies)
}
