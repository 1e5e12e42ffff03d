//! Bundled chrome assets served over the `tabhost://` custom protocol.
//!
//! Assets compiled into the binary are registered as in-memory entries.
//! An optional base directory lets a developer iterate on the chrome
//! without rebuilding; files there win over the bundled copies.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct ContentProvider {
    base_dir: Option<PathBuf>,
    /// path -> (mime, data)
    bundled: HashMap<String, (String, Vec<u8>)>,
}

impl ContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve files from `base_dir` ahead of bundled assets.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Register an in-memory asset.
    pub fn add_bundled(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.bundled
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');
        let clean = clean.split(['?', '#']).next().unwrap_or(clean);

        if let Some(found) = self.resolve_from_disk(clean) {
            return Some(found);
        }

        self.bundled
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    fn resolve_from_disk(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

/// Strip the custom-protocol prefix from a request URI.
pub fn asset_path(uri: &str) -> &str {
    uri.strip_prefix("tabhost://localhost/")
        .or_else(|| uri.strip_prefix("tabhost://localhost"))
        .or_else(|| uri.strip_prefix("http://tabhost.localhost/"))
        .or_else(|| uri.strip_prefix("tabhost:///"))
        .or_else(|| uri.strip_prefix("tabhost://"))
        .unwrap_or("")
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_with_chrome() -> ContentProvider {
        let mut cp = ContentProvider::new();
        cp.add_bundled("chrome/index.html", "text/html", "<html>chrome</html>");
        cp
    }

    #[test]
    fn resolves_bundled_asset() {
        let cp = provider_with_chrome();
        let (mime, data) = cp.resolve("chrome/index.html").unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert_eq!(data.as_ref(), b"<html>chrome</html>");
    }

    #[test]
    fn leading_slash_and_query_are_ignored() {
        let cp = provider_with_chrome();
        assert!(cp.resolve("/chrome/index.html").is_some());
        assert!(cp.resolve("chrome/index.html?v=2").is_some());
    }

    #[test]
    fn missing_asset_is_none() {
        let cp = provider_with_chrome();
        assert!(cp.resolve("chrome/missing.js").is_none());
    }

    #[test]
    fn disk_file_overrides_bundled() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("chrome")).unwrap();
        std::fs::write(dir.path().join("chrome/index.html"), "<html>dev</html>").unwrap();

        let mut cp = ContentProvider::new().with_base_dir(dir.path());
        cp.add_bundled("chrome/index.html", "text/html", "<html>bundled</html>");

        let (_, data) = cp.resolve("chrome/index.html").unwrap();
        assert_eq!(data.as_ref(), b"<html>dev</html>");
    }

    #[test]
    fn directory_traversal_is_blocked() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("assets");
        std::fs::create_dir_all(&inner).unwrap();
        std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();

        let cp = ContentProvider::new().with_base_dir(&inner);
        assert!(cp.resolve("../secret.txt").is_none());
    }

    #[test]
    fn asset_path_strips_scheme_variants() {
        assert_eq!(asset_path("tabhost://localhost/chrome/index.html"), "chrome/index.html");
        assert_eq!(asset_path("http://tabhost.localhost/chrome/app.js"), "chrome/app.js");
        assert_eq!(asset_path("tabhost:///chrome/app.css"), "chrome/app.css");
        assert_eq!(asset_path("https://example.com/x"), "");
    }

    #[test]
    fn mime_types() {
        assert_eq!(mime_from_extension(Path::new("a.js")), "application/javascript");
        assert_eq!(mime_from_extension(Path::new("a.css")), "text/css");
        assert_eq!(mime_from_extension(Path::new("a.bin")), "application/octet-stream");
    }
}
