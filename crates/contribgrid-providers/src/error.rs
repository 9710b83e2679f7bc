use std::fmt;

/// Result type for contribgrid-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification used by the runtime to report failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable response
    Transport,
    /// The API answered, but not with the requested data
    Response,
    /// The response body could not be decoded
    Decode,
}

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// Connection, TLS, timeout or body read failure
    Http(reqwest::Error),

    /// The async runtime backing a blocking call could not start
    Runtime(std::io::Error),

    /// Non-success HTTP status
    Status { status: u16, message: String },

    /// GraphQL `errors` array in an otherwise successful response
    GraphQl(Vec<String>),

    /// The API returned no user for the requested login
    UserNotFound(String),

    /// JSON body parsing failed
    Json(serde_json::Error),

    /// A contribution day carried an unparseable date
    Date(contribgrid_types::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) | Error::Runtime(_) => ErrorKind::Transport,
            Error::Status { .. } | Error::GraphQl(_) | Error::UserNotFound(_) => {
                ErrorKind::Response
            }
            Error::Json(_) | Error::Date(_) => ErrorKind::Decode,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Runtime(err) => write!(f, "Runtime error: {}", err),
            Error::Status { status, message } => write!(f, "HTTP {}: {}", status, message),
            Error::GraphQl(messages) => write!(f, "GraphQL error: {}", messages.join("; ")),
            Error::UserNotFound(login) => write!(f, "User not found: {}", login),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Date(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Runtime(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Date(err) => Some(err),
            Error::Status { .. } | Error::GraphQl(_) | Error::UserNotFound(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<contribgrid_types::Error> for Error {
    fn from(err: contribgrid_types::Error) -> Self {
        Error::Date(err)
    }
}
