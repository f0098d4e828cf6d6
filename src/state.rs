//! Application state management

use std::sync::Arc;

use crate::media_storage::MediaStorage;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// S3 media storage client for image uploads
    pub media_storage: Arc<MediaStorage>,
}
