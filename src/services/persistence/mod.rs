//! Snapshot persistence for hosts that keep the picker's state between runs.
//!
//! The engine itself is stateless; a host that wants "uncontrolled" behaviour
//! stores the last selection and view here as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::{self, Error as SerdeError};

use crate::models::picker::{Selection, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSnapshot {
    pub selection: Selection,
    pub view_state: ViewState,
}

const SNAPSHOT_FILE: &str = "picker_state.json";

/// `picker_state.json` in the platform data directory.
pub fn default_snapshot_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Ken24T", "CalendarPicker")
        .map(|dirs| dirs.data_dir().join(SNAPSHOT_FILE))
}

/// Read a snapshot. A missing file is `Ok(None)`.
pub fn load_snapshot(path: &Path) -> Result<Option<PickerSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read picker snapshot from {}", path.display()))?;
    let snapshot = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    log::info!("Loaded picker snapshot from {}", path.display());
    Ok(Some(snapshot))
}

pub fn save_snapshot(path: &Path, snapshot: &PickerSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    // The hover preview is transient and never persisted.
    let snapshot = PickerSnapshot {
        view_state: ViewState {
            hover_candidate: None,
            ..snapshot.view_state
        },
        ..*snapshot
    };

    let data = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write picker snapshot to {}", path.display()))?;
    log::info!("Saved picker snapshot to {}", path.display());
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize picker snapshot from {}",
        path.display()
    ))
}
