use activities_core::Directory;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state passed to all route handlers.
///
/// The directory sits behind one coarse lock: mutations hold the write lock
/// across the whole check-then-update so enrollment invariants survive
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<Directory>>,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_one_directory() {
        let state = AppState::new(Directory::seeded());
        let other = state.clone();
        other
            .directory
            .write()
            .await
            .signup("Chess Club", "new@mergington.edu")
            .unwrap();
        let dir = state.directory.read().await;
        assert_eq!(dir.enrollment_of("new@mergington.edu"), Some("Chess Club"));
    }
}
