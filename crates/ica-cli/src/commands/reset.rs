//! The `ica reset` command.

use anyhow::Result;

use ica_core::store::ALL_KEYS;

use super::Session;

pub fn execute(session: &mut Session) -> Result<()> {
    for key in ALL_KEYS {
        session.store.remove(key)?;
    }
    println!(
        "Removed all saved data from {}",
        session.store.backend().root().display()
    );
    Ok(())
}
