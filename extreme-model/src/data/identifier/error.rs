#[derive(te::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierParseError {
    #[error("Identifier path is empty")]
    EmptyPath,
    #[error("Character '{ch}' at position {position} is not allowed in an identifier namespace")]
    InvalidNamespaceChar { ch: char, position: usize },
    #[error("Character '{ch}' at position {position} is not allowed in an identifier path")]
    InvalidPathChar { ch: char, position: usize },
}
