use std::sync::Arc;

use apisurface_core_types::RequestId;
use thiserror::Error;

/// Result type alias using ApiSurfaceError
pub type Result<T> = std::result::Result<T, ApiSurfaceError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (and the CLI exit
/// path) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidConfiguration,

    // Model construction
    InvalidInput,
    NotFound,

    // Export
    Cancelled,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidConfiguration => "ERR_INVALID_CONFIGURATION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Cancelled => "ERR_CANCELLED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification plus optional context (operation, element name,
/// dotted path, request id) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    element: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    io_kind: Option<std::io::ErrorKind>,
    source: Option<Arc<std::io::Error>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            element: None,
            path: None,
            request_id: None,
            message: String::new(),
            io_kind: None,
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add element name context
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    /// Add file-system or dotted model path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the underlying I/O error, keeping its kind and source chain
    pub fn with_io_source(mut self, err: std::io::Error) -> Self {
        self.io_kind = Some(err.kind());
        self.source = Some(Arc::new(err));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the element name context, if any
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Kind of the underlying I/O error, if this is an I/O failure
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        self.io_kind
    }

    /// True when the error reports a cooperative cancellation
    pub fn is_cancelled(&self) -> bool {
        self.kind == ExErrorKind::Cancelled
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(element) = &self.element {
            write!(f, " (element: {})", element)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for model construction and snapshot export
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiSurfaceError {
    /// Output directory (or another required setting) is missing or empty
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Parent handle does not refer to an element of the model
    #[error("Parent element not found: {parent}")]
    ParentNotFound { parent: usize },

    /// Element handle does not refer to an element of the model
    #[error("Element not found: {element}")]
    ElementNotFound { element: usize },

    /// Element name is empty
    #[error("Element name cannot be empty (kind: {kind})")]
    EmptyName { kind: String },

    /// Property type points at a definition handle outside the model
    #[error("Type of property {property} references missing definition {definition}")]
    DanglingTypeDefinition { property: String, definition: usize },

    /// Property type points at an element that is not a class, enum or interface
    #[error("Type of property {property} references {kind} {definition}, expected a class, enum or interface")]
    InvalidTypeDefinition {
        property: String,
        definition: usize,
        kind: String,
    },

    /// Dotted path does not resolve to an element
    #[error("No element found at path: {path}")]
    PathNotFound { path: String },

    /// Dotted path resolves to more than one element
    #[error("Path {path} matches {matches} elements")]
    AmbiguousPath { path: String, matches: usize },

    /// Operation observed a cancellation signal
    #[error("Operation cancelled: {op}")]
    Cancelled { op: String },

    /// Underlying I/O failure
    #[error("I/O failure in {op}: {message}")]
    Io {
        op: String,
        kind: std::io::ErrorKind,
        message: String,
    },
}

impl From<ApiSurfaceError> for ExError {
    fn from(err: ApiSurfaceError) -> Self {
        let message = err.to_string();
        match err {
            ApiSurfaceError::InvalidConfiguration { .. } => {
                ExError::new(ExErrorKind::InvalidConfiguration).with_message(message)
            }

            ApiSurfaceError::ParentNotFound { parent } => ExError::new(ExErrorKind::NotFound)
                .with_op("add_element")
                .with_element(parent.to_string())
                .with_message(message),

            ApiSurfaceError::ElementNotFound { element } => ExError::new(ExErrorKind::NotFound)
                .with_element(element.to_string())
                .with_message(message),

            ApiSurfaceError::EmptyName { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("add_element")
                .with_message(message),

            ApiSurfaceError::DanglingTypeDefinition { property, .. } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_op("add_property")
                    .with_element(property)
                    .with_message(message)
            }

            ApiSurfaceError::InvalidTypeDefinition { property, .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("add_property")
                    .with_element(property)
                    .with_message(message)
            }

            ApiSurfaceError::AmbiguousPath { path, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("find_by_path")
                .with_path(path)
                .with_message(message),

            ApiSurfaceError::PathNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_op("find_by_path")
                .with_path(path)
                .with_message(message),

            ApiSurfaceError::Cancelled { op } => ExError::new(ExErrorKind::Cancelled)
                .with_op(op)
                .with_message(message),

            ApiSurfaceError::Io { op, kind, .. } => {
                let mut ex_err = ExError::new(ExErrorKind::Io)
                    .with_op(op)
                    .with_message(message);
                ex_err.io_kind = Some(kind);
                ex_err
            }
        }
    }
}
