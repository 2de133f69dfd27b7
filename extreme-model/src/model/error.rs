use crate::data::{
    error::DescriptorFileLoaderError,
    identifier::{Identifier, IdentifierParseError},
};

#[derive(te::Error, Debug)]
pub enum MalformedDescriptorError {
    #[error("Descriptor is missing the mandatory 'parent' field")]
    MissingParent,
    #[error("'{value}' is not a valid parent model identifier: {error}")]
    InvalidParent {
        value: String,
        error: IdentifierParseError,
    },
    #[error("'{value}' is not a valid resource location: {error}")]
    InvalidTexture {
        value: String,
        error: IdentifierParseError,
    },
    #[error("Colour value {0} doesn't fit in 32 bits")]
    ColourOutOfRange(i64),
    #[error("{0}")]
    Syntax(#[from] serde_json::Error),
    #[error("{0}")]
    Hjson(#[from] deser_hjson::Error),
}

#[derive(te::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Parent model {0} has to be a block model")]
    IncompatibleBaseModel(Identifier),
    #[error("Placeholder model {0} could not be resolved")]
    MissingPlaceholder(Identifier),
}

#[derive(te::Error, Debug, Clone, PartialEq, Eq)]
pub enum BakeError {
    #[error("Dependencies of the model wrapping {0} must be resolved before baking")]
    DependenciesNotResolved(Identifier),
}

/// Any reason a single decorated model failed to load.
#[derive(te::Error, Debug)]
pub enum DecoratedModelError {
    #[error("{0}")]
    File(#[from] DescriptorFileLoaderError),
    #[error("{0}")]
    Descriptor(#[from] MalformedDescriptorError),
    #[error("{0}")]
    Resolve(#[from] ResolveError),
    #[error("{0}")]
    Bake(#[from] BakeError),
}
