use serde::{Deserialize, Serialize};

/// Unified error type for all catalog API operations.
///
/// The variants split along the line the admin screen cares about:
/// transport failures (no response was received) versus application
/// failures (a response arrived with an error status or an unusable body).
///
/// # Transport Errors
///
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, body read failure
/// - [`Timeout`](Self::Timeout): request exceeded the configured timeout
///
/// Nothing is retried automatically; the operator re-attempts the action.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ClientError {
    /// A network-level error occurred and no response was received.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The service answered with a non-success status.
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, present only when the body carried a truthy `error` field.
        message: Option<String>,
        /// Raw response body (may be empty).
        body: String,
    },

    /// Failed to parse a success response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The image selected for upload could not be read from disk.
    ImageRead {
        /// Local path of the image.
        path: String,
        /// Details about the I/O failure.
        detail: String,
    },

    /// The client configuration is unusable (e.g. malformed base URL).
    InvalidConfig {
        /// What is wrong with the configuration.
        detail: String,
    },
}

impl ClientError {
    /// 是否为传输层错误（未收到任何响应）
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// 服务端在错误响应中给出的 message（仅当 `error` 字段为真时）
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(msg), ..
            } => Some(msg.as_str()),
            _ => None,
        }
    }

    /// 响应状态码（仅应用层错误有）
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 响应体（仅应用层错误有）
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// 是否为预期行为（4xx、本地文件缺失等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Api { status, .. } => (400..500).contains(status),
            Self::ImageRead { .. } => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Api {
                status, message, ..
            } => {
                if let Some(msg) = message {
                    write!(f, "HTTP {status}: {msg}")
                } else {
                    write!(f, "HTTP {status}")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::ImageRead { path, detail } => {
                write!(f, "Cannot read image '{path}': {detail}")
            }
            Self::InvalidConfig { detail } => write!(f, "Invalid configuration: {detail}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
