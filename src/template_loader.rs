mod error;

pub use self::error::LoadError;
use log::trace;
use std::path::Path;
use tokio::fs::read_to_string;

/// Loads a template file as text.
pub async fn load_template(path: &Path) -> Result<String, LoadError> {
    trace!("loading a template from {}", path.display());

    read_to_string(path)
        .await
        .map_err(|error| LoadError::new(path.into(), error))
}
