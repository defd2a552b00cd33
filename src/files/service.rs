//! Path resolution and file lookup under the server root.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use tokio::fs::{self, File};

use crate::http::mime;
use crate::http::response::Response;

const INDEX_FILE: &str = "index.html";

/// Page seeded into a freshly created server root.
const WELCOME_PAGE: &str = "\
<!DOCTYPE html>
<html>
<head>
    <title>Hearth</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }
        h1 { color: #333; }
        .container { max-width: 800px; margin: 0 auto; }
    </style>
</head>
<body>
    <div class=\"container\">
        <h1>Welcome to Hearth!</h1>
        <p>This server is up and serving static files.</p>
        <p>Drop files into the server root to publish them.</p>
    </div>
</body>
</html>
";

/// Result of looking up a request path.
///
/// Every lookup produces something servable: either an open file with the
/// metadata the response head needs, or a finished error page. There is no
/// error variant; failures are pages.
pub enum Outcome {
    /// An existing, readable file to stream back with status 200.
    File {
        file: File,
        len: u64,
        content_type: &'static str,
    },
    /// A fixed page (404/500) describing why no file could be served.
    Page(Response),
}

/// Resolves request paths to files under a fixed root directory.
///
/// The root is read-only shared state; cloning is cheap and each connection
/// task gets its own handle.
#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Creates the root directory and seeds a welcome page if the root does
    /// not exist yet. A pre-existing root is left untouched, whatever its
    /// contents.
    pub async fn ensure_root(&self) -> anyhow::Result<()> {
        if fs::metadata(&self.root).await.is_ok() {
            return Ok(());
        }

        fs::create_dir_all(&self.root)
            .await
            .with_context(|| format!("failed to create server root {}", self.root.display()))?;

        let index = self.root.join(INDEX_FILE);
        fs::write(&index, WELCOME_PAGE)
            .await
            .with_context(|| format!("failed to seed {}", index.display()))?;

        tracing::info!("Created server root {} with a welcome page", self.root.display());

        Ok(())
    }

    /// Looks up a request path and decides what to serve.
    ///
    /// `/` substitutes the index file; every other path is appended to the
    /// root verbatim. Missing files, directories, and unreadable files all
    /// come back as the 404 page; a file that vanishes or breaks between the
    /// existence check and the open is the 500 page.
    pub async fn serve(&self, path: &str) -> Outcome {
        let candidate = match self.resolve(path) {
            Some(candidate) => candidate,
            None => return Outcome::Page(Response::not_found()),
        };

        match fs::metadata(&candidate).await {
            Ok(meta) if meta.is_file() => {}
            _ => return Outcome::Page(Response::not_found()),
        }

        let file = match File::open(&candidate).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Outcome::Page(Response::not_found());
            }
            Err(e) => {
                tracing::error!("failed to open {}: {}", candidate, e);
                return Outcome::Page(Response::internal_error());
            }
        };

        let len = match file.metadata().await {
            Ok(meta) => meta.len(),
            Err(e) => {
                tracing::error!("failed to stat {}: {}", candidate, e);
                return Outcome::Page(Response::internal_error());
            }
        };

        Outcome::File {
            file,
            len,
            content_type: mime::from_path(&candidate),
        }
    }

    /// Maps a request path to a candidate filesystem path by concatenation.
    ///
    /// Paths carrying a `..` segment are refused outright so a request can
    /// never name a file above the root.
    fn resolve(&self, path: &str) -> Option<String> {
        if path.split('/').any(|segment| segment == "..") {
            tracing::debug!("rejecting traversal path {}", path);
            return None;
        }

        if path == "/" {
            Some(format!("{}/{}", self.root.display(), INDEX_FILE))
        } else {
            Some(format!("{}{}", self.root.display(), path))
        }
    }
}
