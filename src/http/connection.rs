use tokio::net::TcpStream;
use tokio::io::AsyncReadExt;

use crate::files::{Outcome, StaticFiles};
use crate::http::parser::{MAX_REQUEST_BYTES, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles a single accepted connection: one request, at most one response.
pub struct Connection {
    stream: TcpStream,
    files: StaticFiles,
}

impl Connection {
    pub fn new(stream: TcpStream, files: StaticFiles) -> Self {
        Self { stream, files }
    }

    /// Drives the connection to completion.
    ///
    /// If no request line can be extracted (client closed early, or the
    /// bytes are malformed), nothing is written back; the client observes a
    /// closed connection. Otherwise exactly one response goes out. The
    /// stream, and any file opened for it, close on every return path.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let req = match self.read_request().await? {
            Some(req) => req,
            None => return Ok(()),
        };

        tracing::info!("{}", req.line());

        let mut writer = ResponseWriter::new(&mut self.stream);

        if req.is_get() {
            match self.files.serve(&req.path).await {
                Outcome::File {
                    mut file,
                    len,
                    content_type,
                } => {
                    writer.write_file(content_type, len, &mut file).await?;
                }
                Outcome::Page(resp) => {
                    writer.write_page(&resp).await?;
                }
            }
        } else {
            writer.write_page(&Response::not_implemented()).await?;
        }

        Ok(())
    }

    /// Performs the single request read and parses the request line.
    ///
    /// The request must arrive in one read; fragmented delivery is not
    /// reassembled and degrades to malformed-request handling.
    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            // Client closed without sending anything
            return Ok(None);
        }

        match parse_request_line(&buf[..n]) {
            Ok(req) => Ok(Some(req)),
            Err(e) => {
                tracing::debug!("dropping connection: {}", e);
                Ok(None)
            }
        }
    }
}
