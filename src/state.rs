use std::sync::Arc;

use crate::auth::AuthService;
use crate::database::AlbumStore;
use crate::mockapi::CatalogClient;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumStore>,
    pub auth: Arc<AuthService>,
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumStore>, auth: AuthService, catalog: CatalogClient) -> Self {
        Self {
            albums,
            auth: Arc::new(auth),
            catalog,
        }
    }
}
