use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const STATE_VERSION: u32 = 4;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("I/O error on state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("state file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported state version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },
}

/// One managed resource instance, keyed by `type` + `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceInstance {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub attributes: serde_json::Value,
}

/// Local state document in the shape of a v4 tfstate file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    pub version: u32,
    pub serial: u64,
    #[serde(default)]
    pub resources: Vec<ResourceInstance>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            serial: 0,
            resources: Vec::new(),
        }
    }
}

impl StateFile {
    /// Loads a state file; a missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        let state: StateFile = serde_json::from_str(&raw)?;
        if state.version != STATE_VERSION {
            return Err(StateError::Version {
                found: state.version,
                expected: STATE_VERSION,
            });
        }
        Ok(state)
    }

    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    pub fn get(&self, resource_type: &str, name: &str) -> Option<&ResourceInstance> {
        self.resources
            .iter()
            .find(|r| r.resource_type == resource_type && r.name == name)
    }

    pub fn upsert(&mut self, resource_type: &str, name: &str, attributes: serde_json::Value) {
        self.serial += 1;
        match self
            .resources
            .iter_mut()
            .find(|r| r.resource_type == resource_type && r.name == name)
        {
            Some(existing) => existing.attributes = attributes,
            None => self.resources.push(ResourceInstance {
                resource_type: resource_type.to_string(),
                name: name.to_string(),
                attributes,
            }),
        }
    }

    /// Returns the removed instance, if any.
    pub fn remove(&mut self, resource_type: &str, name: &str) -> Option<ResourceInstance> {
        let index = self
            .resources
            .iter()
            .position(|r| r.resource_type == resource_type && r.name == name)?;
        self.serial += 1;
        Some(self.resources.remove(index))
    }
}
