use std::path::PathBuf;

use crate::model::error::MalformedDescriptorError;

use super::identifier::Identifier;

#[derive(te::Error, Debug)]
pub enum DescriptorFileLoaderError {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    WalkError(#[from] walkdir::Error),
    #[error("Invalid descriptor file name: '{0}'")]
    InvalidFileName(PathBuf),
    #[error("Descriptor {0} was not found")]
    DescriptorNotFound(Identifier),
    #[error("Error parsing descriptor {0}: {1}")]
    ParseError(Identifier, MalformedDescriptorError),
}

#[derive(te::Error, Debug)]
pub enum SettingsError {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
}
