use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the response head: status line, the three headers every
/// response carries, and the blank line before the body.
fn serialize_head(status: StatusCode, content_type: &str, content_length: u64) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Fixed header set, fixed order
    buf.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    buf.extend_from_slice(format!("Content-Length: {}\r\n", content_length).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes responses onto an output sink.
///
/// Head and body go out as separate writes; short writes are the sink's
/// concern (`write_all` on the async side).
pub struct ResponseWriter<W> {
    sink: W,
}

impl<W: AsyncWrite + Unpin> ResponseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Writes an in-memory response: head, then body.
    pub async fn write_page(&mut self, resp: &Response) -> anyhow::Result<()> {
        let head = serialize_head(resp.status, resp.content_type, resp.body.len() as u64);

        self.sink.write_all(&head).await?;
        self.sink.write_all(&resp.body).await?;

        Ok(())
    }

    /// Writes a 200 response whose body is streamed from an open file.
    ///
    /// `len` must be the file's byte size; it becomes the Content-Length
    /// the client trusts to delimit the body.
    pub async fn write_file(
        &mut self,
        content_type: &str,
        len: u64,
        file: &mut File,
    ) -> anyhow::Result<()> {
        let head = serialize_head(StatusCode::Ok, content_type, len);

        self.sink.write_all(&head).await?;
        tokio::io::copy(file, &mut self.sink).await?;

        Ok(())
    }
}
