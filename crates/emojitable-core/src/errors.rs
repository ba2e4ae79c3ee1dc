use emojitable_core_types::schema::{OP_BUILD, OP_FETCH, OP_WRITE};
use thiserror::Error;

/// Result type alias using EmojiTableError
pub type Result<T> = std::result::Result<T, EmojiTableError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure of a run falls into one of these kinds. Each kind maps to a
/// stable error code usable in tests and log pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Network, HTTP status, or upstream body failure
    Fetch,
    /// A record lacks a required field or has the wrong shape
    Schema,
    /// A unified code could not be turned into text
    Decode,
    /// The output file could not be written
    Write,
    /// A local file could not be read
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Fetch => "ERR_FETCH",
            ExErrorKind::Schema => "ERR_SCHEMA",
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::Write => "ERR_WRITE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context needed to find the offending
/// input: the operation, and the record or path it concerns.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    record_index: Option<usize>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            record_index: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a short name, URL or path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add the position of the offending record in the upstream array
    pub fn with_record_index(mut self, index: usize) -> Self {
        self.record_index = Some(index);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn record_index(&self) -> Option<usize> {
        self.record_index
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.code(), self.kind)?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(index) = self.record_index {
            write!(f, " (record_index: {})", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for emoji table operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmojiTableError {
    /// The upstream document could not be retrieved or parsed
    #[error("Failed to fetch emoji data from {source_name}: {reason}")]
    Fetch { source_name: String, reason: String },

    /// A record is missing a required field
    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: String },

    /// A record or one of its fields has the wrong shape
    #[error("Record {index} has invalid field '{field}': {reason}")]
    InvalidField {
        index: usize,
        field: String,
        reason: String,
    },

    /// A skin variation key contains a code point that is not a skin tone modifier
    #[error("Unknown skin tone '{key}' in emoji '{short_name}'")]
    UnknownSkinTone { short_name: String, key: String },

    /// A unified code chunk is not a valid code point
    #[error("Invalid unified code '{unified}': chunk '{chunk}' {reason}")]
    InvalidUnified {
        unified: String,
        chunk: String,
        reason: String,
    },

    /// The output file could not be written
    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },

    /// A local file could not be read
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    /// JSON serialization or deserialization of a table failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl EmojiTableError {
    /// Classify this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            EmojiTableError::Fetch { .. } => ExErrorKind::Fetch,
            EmojiTableError::MissingField { .. }
            | EmojiTableError::InvalidField { .. }
            | EmojiTableError::UnknownSkinTone { .. } => ExErrorKind::Schema,
            EmojiTableError::InvalidUnified { .. } => ExErrorKind::Decode,
            EmojiTableError::Write { .. } => ExErrorKind::Write,
            EmojiTableError::Io { .. } => ExErrorKind::Io,
            EmojiTableError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<EmojiTableError> for ExError {
    fn from(err: EmojiTableError) -> Self {
        let base = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            EmojiTableError::Fetch { source_name, .. } => {
                base.with_op(OP_FETCH).with_entity_id(source_name)
            }
            EmojiTableError::MissingField { index, .. }
            | EmojiTableError::InvalidField { index, .. } => {
                base.with_op(OP_BUILD).with_record_index(index)
            }
            EmojiTableError::UnknownSkinTone { short_name, .. } => {
                base.with_op(OP_BUILD).with_entity_id(short_name)
            }
            EmojiTableError::InvalidUnified { unified, .. } => {
                base.with_op("unified_to_unicode").with_entity_id(unified)
            }
            EmojiTableError::Write { path, .. } => {
                base.with_op(OP_WRITE).with_entity_id(path)
            }
            EmojiTableError::Io { path, .. } => base.with_op("read_file").with_entity_id(path),
            EmojiTableError::Serialization { .. } => base.with_op("serialize"),
        }
    }
}

impl From<&EmojiTableError> for ExError {
    fn from(err: &EmojiTableError) -> Self {
        err.clone().into()
    }
}
