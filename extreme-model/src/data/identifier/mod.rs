pub mod error;
mod impls;
mod serde;

pub use error::IdentifierParseError;

/// Namespace used for identifiers that don't name one explicitly.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced resource identifier of the form `namespace:path`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, dm::Display)]
#[display("{namespace}:{path}")]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from an explicit namespace and path, validating both.
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, IdentifierParseError> {
        let namespace = namespace.into();
        let path = path.into();

        impls::validate_namespace(&namespace)?;
        impls::validate_path(&path, namespace.len() + 1)?;

        Ok(Self { namespace, path })
    }

    // Only for compile-time known identifiers, the caller guarantees both parts are valid.
    pub(crate) fn new_unchecked(namespace: &str, path: &str) -> Self {
        debug_assert!(impls::validate_namespace(namespace).is_ok());
        debug_assert!(impls::validate_path(path, 0).is_ok());

        Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub fn ident(string: &str) -> Identifier {
    Identifier::try_from(string).unwrap()
}
