use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let movie = store.get(id)?;
    store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie with id {} deleted successfully",
        id
    )));
    result.affected_movies.push(movie);
    Ok(result)
}
