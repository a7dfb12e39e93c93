use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let movie = store.get(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Movie found with id: {}", id)));
    result.listed_movies.push(movie);
    Ok(result)
}
