/// Represents a parsed HTTP request line from a client.
///
/// Only the request line is parsed; headers and any body are ignored by the
/// server, so none are represented here. The method is kept as the raw token
/// so unsupported methods can be echoed back in logs before a 501 is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token exactly as received (e.g., "GET")
    pub method: String,
    /// The request path/URL (e.g., "/index.html")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
}

impl Request {
    /// Whether this request uses the one method the server implements.
    ///
    /// Matching is exact: lowercase "get" is an unsupported method, as it
    /// would be for any HTTP server doing token comparison.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::request::Request;
    /// let req = Request {
    ///     method: "GET".to_string(),
    ///     path: "/".to_string(),
    ///     version: "HTTP/1.1".to_string(),
    /// };
    /// assert!(req.is_get());
    /// ```
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }

    /// One-line rendering of the request line for logging.
    pub fn line(&self) -> String {
        format!("{} {} {}", self.method, self.path, self.version)
    }
}
