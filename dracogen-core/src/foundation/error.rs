/// Convenience result type used across dracogen.
pub type DracoResult<T> = Result<T, DracoError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Geometry and raster routines are total and never produce one of these; only construction,
/// parsing and resource loading do.
#[derive(thiserror::Error, Debug)]
pub enum DracoError {
    /// Invalid user-provided data (curve point lists, settings, sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed NFA description.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line the tokenizer was on when the error was detected.
        line: usize,
        /// Human readable description.
        message: String,
    },

    /// Font data could not be loaded or rasterized.
    #[error("font error: {0}")]
    Font(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DracoError {
    /// Build a [`DracoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DracoError::Parse`] value.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Build a [`DracoError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`DracoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
