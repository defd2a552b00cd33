use crate::http::request::Request;

/// Largest number of bytes a single request read will consume. Anything a
/// client sends beyond this, or delivered across multiple reads, is not
/// assembled; the request line must fit in the first read.
pub const MAX_REQUEST_BYTES: usize = 1024;

const MAX_METHOD_LEN: usize = 16;
const MAX_PATH_LEN: usize = 256;
const MAX_VERSION_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer did not contain three request-line tokens.
    Malformed,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Malformed => write!(f, "malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts method, path, and protocol version from a raw request buffer.
///
/// The first three whitespace-delimited tokens become the request line; each
/// token is truncated to a fixed bound. Non-UTF-8 bytes are decoded lossily,
/// which at worst turns them into tokens that match no supported method.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);
    let mut tokens = text.split_whitespace();

    let method = tokens.next().ok_or(ParseError::Malformed)?;
    let path = tokens.next().ok_or(ParseError::Malformed)?;
    let version = tokens.next().ok_or(ParseError::Malformed)?;

    Ok(Request {
        method: bounded(method, MAX_METHOD_LEN),
        path: bounded(path, MAX_PATH_LEN),
        version: bounded(version, MAX_VERSION_LEN),
    })
}

/// Truncates a token to `max` bytes, backing off to a char boundary.
fn bounded(token: &str, max: usize) -> String {
    if token.len() <= max {
        return token.to_string();
    }

    let mut end = max;
    while !token.is_char_boundary(end) {
        end -= 1;
    }

    token[..end].to_string()
}
