/// Errors raised by the text crate's configuration surfaces.
///
/// Curved layout itself never fails: degenerate geometry simply draws
/// nothing. These variants cover font loading and radar label setup.
#[derive(Debug, Clone, PartialEq)]
pub enum TextError {
    /// Font file not found.
    FontFileNotFound(std::path::PathBuf),

    /// Generic IO error.
    Io(String),

    /// A radar was asked for labels with an empty parameter list.
    NoParameters,

    /// Label wrapping was requested with a width of zero characters.
    InvalidWrapWidth,
}

impl std::fmt::Display for TextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextError::FontFileNotFound(path) => {
                write!(f, "Font file not found: {}", path.display())
            }
            TextError::Io(msg) => write!(f, "IO error: {}", msg),
            TextError::NoParameters => write!(f, "Radar labels need at least one parameter"),
            TextError::InvalidWrapWidth => {
                write!(f, "Label wrap width must be at least one character")
            }
        }
    }
}

impl std::error::Error for TextError {}

impl From<std::io::Error> for TextError {
    fn from(err: std::io::Error) -> Self {
        TextError::Io(err.to_string())
    }
}

/// Result type for text operations.
pub type TextResult<T> = Result<T, TextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let missing = TextError::FontFileNotFound("fonts/Roboto.ttf".into());
        assert_eq!(missing.to_string(), "Font file not found: fonts/Roboto.ttf");
        assert!(TextError::InvalidWrapWidth.to_string().contains("at least one"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(TextError::from(io), TextError::Io(msg) if msg.contains("denied")));
    }
}
