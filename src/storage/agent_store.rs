// Persistent credential storage, the file-backed stand-in for localStorage
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::v_debug;

/// One saved credential. Uniqueness is not enforced: registering the same
/// callsign twice records two entries, newest last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAgent {
    pub callsign: String,
    pub token: String,
}

/// On-disk shape: `{"agents": [{"callsign": .., "token": ..}, ..]}`
#[derive(Debug, Default, Serialize, Deserialize)]
struct AgentsFile {
    agents: Vec<SavedAgent>,
}

/// Append-only list of `{callsign, token}` pairs in a JSON file.
pub struct AgentStore {
    path: PathBuf,
}

impl AgentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        AgentStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved credentials in insertion order. A missing file reads as an
    /// empty list.
    pub fn list(&self) -> Result<Vec<SavedAgent>, Error> {
        Ok(self.load()?.agents)
    }

    /// Append a credential and write the file back.
    pub fn append(&self, callsign: &str, token: &str) -> Result<(), Error> {
        let mut file = self.load()?;
        file.agents.push(SavedAgent {
            callsign: callsign.to_string(),
            token: token.to_string(),
        });
        self.save(&file)?;
        v_debug!("💾 {} credentials in {}", file.agents.len(), self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<AgentsFile, Error> {
        if !self.path.exists() {
            return Ok(AgentsFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, file: &AgentsFile) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
