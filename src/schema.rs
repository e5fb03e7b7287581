//! JSON schemas for the state and action types

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::action::Action;
use crate::state::ItemsState;

pub const STATE_SCHEMA_FILE: &str = "state.schema.json";
pub const ACTIONS_SCHEMA_FILE: &str = "actions.schema.json";

pub fn state_schema() -> RootSchema {
    schema_for!(ItemsState)
}

pub fn actions_schema() -> RootSchema {
    schema_for!(Action)
}

/// Write both schemas into `dir`, creating it if needed. Returns the written paths.
pub fn write_schemas(dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();
    for (file, schema) in [
        (STATE_SCHEMA_FILE, state_schema()),
        (ACTIONS_SCHEMA_FILE, actions_schema()),
    ] {
        let path = dir.join(file);
        let json = serde_json::to_string_pretty(&schema).map_err(io::Error::other)?;
        fs::write(&path, json)?;
        written.push(path);
    }
    Ok(written)
}
