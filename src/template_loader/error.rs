use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use std::{
    io,
    path::{Path, PathBuf},
};

/// A template load error.
#[derive(Debug)]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl LoadError {
    pub(super) const fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }

    /// Returns a template path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl Display for LoadError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "failed to load template {}: {}",
            self.path.display(),
            self.source
        )
    }
}
