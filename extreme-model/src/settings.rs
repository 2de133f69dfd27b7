use std::path::{Path, PathBuf};

use bevy::ecs::system::Resource;

use crate::{
    data::{
        descriptor_loader::MAX_RECURSION_DEPTH,
        error::SettingsError,
        identifier::{Identifier, DEFAULT_NAMESPACE},
    },
    defaults,
};

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_recurse() -> bool {
    true
}

/// Where descriptors come from and which well-known identifiers the pipeline uses.
#[derive(Clone, Debug, PartialEq, Eq, Resource, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExtremeModelSettings {
    #[serde(default = "defaults::missing_model")]
    pub placeholder_model: Identifier,
    #[serde(default = "defaults::block_atlas")]
    pub block_atlas: Identifier,
    /// Namespace given to descriptors loaded from `descriptor_folders`.
    #[serde(default = "default_namespace")]
    pub descriptor_namespace: String,
    #[serde(default)]
    pub descriptor_folders: Vec<PathBuf>,
    #[serde(default = "default_recurse")]
    pub recurse: bool,
}

impl Default for ExtremeModelSettings {
    fn default() -> Self {
        Self {
            placeholder_model: defaults::missing_model(),
            block_atlas: defaults::block_atlas(),
            descriptor_namespace: default_namespace(),
            descriptor_folders: Vec::new(),
            recurse: default_recurse(),
        }
    }
}

impl ExtremeModelSettings {
    pub fn from_toml(string: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(string)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let string = std::fs::read_to_string(path)?;
        Self::from_toml(&string)
    }

    pub fn recurse_depth(&self) -> usize {
        if self.recurse {
            MAX_RECURSION_DEPTH
        } else {
            1
        }
    }
}
