use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::MovieUpdate;
use crate::store::DataStore;
use crate::validation::validate_update;

pub fn run<S: DataStore>(store: &mut S, id: u64, changes: MovieUpdate) -> Result<CmdResult> {
    // Unknown ids are reported before payload problems
    store.get(id)?;
    let changes = validate_update(changes)?;
    let updated = store.update(id, &changes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Movie with id {} updated successfully",
        id
    )));
    if changes.is_empty() {
        result.add_message(CmdMessage::warning("No fields to update"));
    }
    result.affected_movies.push(updated);
    Ok(result)
}
