use bytes::Bytes;

/// HTTP status codes the server can emit.
///
/// - `Ok` (200): File found and served
/// - `NotFound` (404): No servable file at the requested path
/// - `InternalServerError` (500): File vanished or became unreadable mid-request
/// - `NotImplemented` (501): Any method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

const NOT_FOUND_PAGE: &[u8] =
    b"<html><body><h1>404 Not Found</h1>\
      <p>The requested resource was not found on this server.</p></body></html>";

const INTERNAL_ERROR_PAGE: &[u8] =
    b"<html><body><h1>500 Internal Server Error</h1>\
      <p>The server failed to read the requested file.</p></body></html>";

const NOT_IMPLEMENTED_PAGE: &[u8] =
    b"<html><body><h1>501 Not Implemented</h1>\
      <p>Method not supported.</p></body></html>";

/// An in-memory HTTP response, ready for the writer.
///
/// Served files never pass through this type; they are streamed straight off
/// disk. `Response` covers the fixed HTML pages whose bodies are known up
/// front, which is why the body is a cheaply-cloned [`Bytes`].
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// MIME type of the body
    pub content_type: &'static str,
    /// Response body as bytes
    pub body: Bytes,
}

impl Response {
    /// Creates a 404 Not Found response with the fixed HTML error page.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/html",
            body: Bytes::from_static(NOT_FOUND_PAGE),
        }
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::InternalServerError,
            content_type: "text/html",
            body: Bytes::from_static(INTERNAL_ERROR_PAGE),
        }
    }

    /// Creates a 501 Not Implemented response.
    pub fn not_implemented() -> Self {
        Self {
            status: StatusCode::NotImplemented,
            content_type: "text/html",
            body: Bytes::from_static(NOT_IMPLEMENTED_PAGE),
        }
    }
}
