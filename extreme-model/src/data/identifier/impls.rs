use std::str::FromStr;

use super::{error::IdentifierParseError, Identifier, DEFAULT_NAMESPACE};

fn is_namespace_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_path_char(ch: char) -> bool {
    is_namespace_char(ch) || ch == '/'
}

pub(super) fn validate_namespace(namespace: &str) -> Result<(), IdentifierParseError> {
    match namespace.char_indices().find(|&(_, ch)| !is_namespace_char(ch)) {
        Some((position, ch)) => Err(IdentifierParseError::InvalidNamespaceChar { ch, position }),
        None => Ok(()),
    }
}

// `offset` is where the path starts in the original string, so errors point at the right character.
pub(super) fn validate_path(path: &str, offset: usize) -> Result<(), IdentifierParseError> {
    if path.is_empty() {
        return Err(IdentifierParseError::EmptyPath);
    }

    match path.char_indices().find(|&(_, ch)| !is_path_char(ch)) {
        Some((position, ch)) => Err(IdentifierParseError::InvalidPathChar {
            ch,
            position: position + offset,
        }),
        None => Ok(()),
    }
}

impl<'a> TryFrom<&'a str> for Identifier {
    type Error = IdentifierParseError;

    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        let (namespace, path, offset) = match value.split_once(':') {
            // an empty namespace before the separator means the default one
            Some(("", path)) => (DEFAULT_NAMESPACE, path, 1),
            Some((namespace, path)) => (namespace, path, namespace.len() + 1),
            None => (DEFAULT_NAMESPACE, value, 0),
        };

        validate_namespace(namespace)?;
        validate_path(path, offset)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }
}

impl FromStr for Identifier {
    type Err = IdentifierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_conversions() {
        let id = Identifier::try_from("mod:base_block").unwrap();
        assert_eq!("mod", id.namespace());
        assert_eq!("base_block", id.path());

        let id = Identifier::try_from("block/stone").unwrap();
        assert_eq!(DEFAULT_NAMESPACE, id.namespace());
        assert_eq!("block/stone", id.path());

        let id = Identifier::try_from(":item/thing.v2").unwrap();
        assert_eq!(DEFAULT_NAMESPACE, id.namespace());
        assert_eq!("item/thing.v2", id.path());

        assert_eq!("mod:base_block", Identifier::new("mod", "base_block").unwrap().to_string());
    }

    #[test]
    fn failed_conversions() {
        assert_eq!(
            Err(IdentifierParseError::InvalidPathChar { ch: '#', position: 0 }),
            Identifier::try_from("#layer0")
        );

        assert_eq!(
            Err(IdentifierParseError::InvalidNamespaceChar { ch: 'M', position: 0 }),
            Identifier::try_from("Mod:thing")
        );

        assert_eq!(
            Err(IdentifierParseError::InvalidPathChar { ch: ':', position: 7 }),
            Identifier::try_from("mod:bad:path")
        );

        assert_eq!(Err(IdentifierParseError::EmptyPath), Identifier::try_from("mod:"));
        assert_eq!(Err(IdentifierParseError::EmptyPath), Identifier::try_from(""));
    }
}
