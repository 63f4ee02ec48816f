use std::sync::Arc;
use std::time::Instant;

use menubar_types::{MenuCollection, MenuDocument, MenuKey};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::{DocumentSource, LoadError};

/// Loads the three menu documents as one unit.
#[derive(Clone)]
pub struct MenuDataStore {
    source: Arc<dyn DocumentSource>,
}

impl MenuDataStore {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Fetches and parses all three documents concurrently.
    ///
    /// Returns the collection only when every document is available. The
    /// first failure aborts the remaining fetches and is returned as is; no
    /// retry is attempted.
    pub async fn load(&self) -> Result<MenuCollection, LoadError> {
        let started = Instant::now();
        info!("Loading menu documents");

        let loaded = tokio::try_join!(
            self.load_document(MenuKey::Menu1),
            self.load_document(MenuKey::Menu2),
            self.load_document(MenuKey::Menu3),
        );

        match loaded {
            Ok((menu1, menu2, menu3)) => {
                info!(elapsed_ms = started.elapsed().as_millis() as u64, "Loaded menu documents");
                Ok(MenuCollection::new(menu1, menu2, menu3))
            }
            Err(load_error) => {
                error!(error = %load_error, "Failed to load menu documents");
                Err(load_error)
            }
        }
    }

    async fn load_document(&self, key: MenuKey) -> Result<MenuDocument, LoadError> {
        let body = self.source.fetch(key).await?;
        let location = self.source.describe(key);
        let document = parse_document(&body).map_err(|source| LoadError::Malformed { location, source })?;
        debug!(
            menu = %key,
            title = %document.title,
            categories = document.categories.len(),
            "Parsed menu document"
        );
        Ok(document)
    }
}

/// Parses a menu document without a nesting limit.
///
/// Each menu level nests two JSON levels. The stack grows on demand.
fn parse_document(body: &str) -> Result<MenuDocument, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    deserializer.disable_recursion_limit();
    let document = MenuDocument::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(document)
}

impl std::fmt::Debug for MenuDataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuDataStore").finish_non_exhaustive()
    }
}
