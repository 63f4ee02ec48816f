use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use menubar_types::{MenuKey, MenuLocations};
use menubar_util::DocumentRoot;
use reqwest::{Client, Url, header};
use tracing::debug;

use crate::LoadError;

/// Retrieves the raw JSON text of a menu document.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches the document for `key`.
    async fn fetch(&self, key: MenuKey) -> Result<String, LoadError>;

    /// Human-readable location of the document for `key`, used in logs and errors.
    fn describe(&self, key: MenuKey) -> String;
}

/// Reads menu documents from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
    locations: MenuLocations,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>, locations: MenuLocations) -> Self {
        Self {
            root: root.into(),
            locations,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: MenuKey) -> PathBuf {
        self.root.join(self.locations.get(key))
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn fetch(&self, key: MenuKey) -> Result<String, LoadError> {
        let path = self.path_for(key);
        debug!(menu = %key, path = %path.display(), "Reading menu document");
        tokio::fs::read_to_string(&path).await.map_err(|source| LoadError::Io {
            location: path.display().to_string(),
            source,
        })
    }

    fn describe(&self, key: MenuKey) -> String {
        self.path_for(key).display().to_string()
    }
}

/// Fetches menu documents from a web server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base: Url,
    locations: MenuLocations,
    http: Client,
}

impl HttpSource {
    /// Builds a source rooted at `base_url`.
    ///
    /// The base is treated as a directory: `https://host/site` and
    /// `https://host/site/` both resolve `menu1-data.json` to
    /// `https://host/site/menu1-data.json`.
    pub fn new(base_url: &str, locations: MenuLocations) -> Result<Self, LoadError> {
        let mut base = Url::parse(base_url.trim()).map_err(|source| LoadError::Url {
            location: base_url.to_string(),
            source,
        })?;
        if !base.path().ends_with('/') {
            let directory = format!("{}/", base.path());
            base.set_path(&directory);
        }

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .default_headers(default_headers)
            .user_agent(concat!("menubar/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(LoadError::Client)?;

        Ok(Self { base, locations, http })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of the document for `key`.
    pub fn url_for(&self, key: MenuKey) -> Result<Url, LoadError> {
        let location = self.locations.get(key);
        self.base.join(location).map_err(|source| LoadError::Url {
            location: location.to_string(),
            source,
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, key: MenuKey) -> Result<String, LoadError> {
        let url = self.url_for(key)?;
        let location = url.to_string();
        debug!(menu = %key, url = %location, "Requesting menu document");

        let response = self.http.get(url).send().await.map_err(|source| LoadError::Http {
            location: location.clone(),
            source,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                location,
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(|source| LoadError::Http { location, source })
    }

    fn describe(&self, key: MenuKey) -> String {
        self.url_for(key)
            .map(|url| url.to_string())
            .unwrap_or_else(|_| self.locations.get(key).to_string())
    }
}

/// Builds the source matching a resolved document root.
pub fn source_for_root(root: &DocumentRoot, locations: MenuLocations) -> Result<Arc<dyn DocumentSource>, LoadError> {
    match root {
        DocumentRoot::Directory(dir) => Ok(Arc::new(FileSource::new(dir.clone(), locations))),
        DocumentRoot::Url(base) => Ok(Arc::new(HttpSource::new(base, locations)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_base_is_treated_as_directory() {
        let source = HttpSource::new("https://example.com/site", MenuLocations::default()).expect("source");
        assert_eq!(source.base().as_str(), "https://example.com/site/");
        let url = source.url_for(MenuKey::Menu2).expect("url");
        assert_eq!(url.as_str(), "https://example.com/site/menu2-data.json");
    }

    #[test]
    fn http_base_with_trailing_slash_is_unchanged() {
        let source = HttpSource::new("http://localhost:8080/", MenuLocations::default()).expect("source");
        assert_eq!(source.describe(MenuKey::Menu1), "http://localhost:8080/menu1-data.json");
    }

    #[test]
    fn invalid_base_url_is_a_load_error() {
        let error = HttpSource::new("not a url", MenuLocations::default()).expect_err("invalid url");
        assert!(matches!(error, LoadError::Url { .. }));
        assert_eq!(error.location(), Some("not a url"));
    }

    #[test]
    fn file_source_joins_locations_onto_root() {
        let locations = MenuLocations {
            menu3: "nested/kunskap.json".into(),
            ..MenuLocations::default()
        };
        let source = FileSource::new("/srv/site", locations);
        assert_eq!(
            PathBuf::from(source.describe(MenuKey::Menu3)),
            PathBuf::from("/srv/site/nested/kunskap.json")
        );
    }

    #[test]
    fn root_selects_matching_source() {
        let file = source_for_root(&DocumentRoot::Directory(PathBuf::from("/srv")), MenuLocations::default())
            .expect("file source");
        assert_eq!(PathBuf::from(file.describe(MenuKey::Menu1)), PathBuf::from("/srv/menu1-data.json"));

        let http = source_for_root(&DocumentRoot::Url("https://cdn.example.com/m".into()), MenuLocations::default())
            .expect("http source");
        assert_eq!(http.describe(MenuKey::Menu1), "https://cdn.example.com/m/menu1-data.json");
    }
}
