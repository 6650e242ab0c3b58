use std::path::PathBuf;
use thiserror::Error;

/// Reasons a widget descriptor is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("widget category must not be empty")]
    EmptyCategory,
    #[error("widget in category '{category}' has an empty name")]
    EmptyName { category: String },
    #[error("widget '{name}' has an empty render module")]
    EmptyModule { name: String },
    #[error("widget '{name}' has an empty render action")]
    EmptyAction { name: String },
    #[error("widget '{name}' parameter '{key}' is not a scalar value")]
    NonScalarParameter { name: String, key: String },
}

/// A catalog build aborted because one contributor failed.
///
/// The builder never hands out a partially populated catalog, so every
/// variant names the contributor that stopped the build.
#[derive(Debug, Error)]
pub enum CatalogBuildError {
    #[error("contributor '{contributor}' failed: {source}")]
    Contributor {
        contributor: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("contributor '{contributor}' produced an invalid widget: {source}")]
    InvalidWidget {
        contributor: String,
        #[source]
        source: WidgetError,
    },
}

impl CatalogBuildError {
    pub fn contributor(&self) -> &str {
        match self {
            Self::Contributor { contributor, .. } | Self::InvalidWidget { contributor, .. } => {
                contributor
            }
        }
    }

    /// Wrap an error returned by a contributor, keeping validation failures typed.
    pub(crate) fn from_contributor(contributor: &str, err: anyhow::Error) -> Self {
        match err.downcast::<WidgetError>() {
            Ok(source) => Self::InvalidWidget {
                contributor: contributor.to_string(),
                source,
            },
            Err(source) => Self::Contributor {
                contributor: contributor.to_string(),
                source,
            },
        }
    }
}

/// Errors raised while resolving sites or reading catalog fixtures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown site {0}")]
    UnknownSite(u32),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Build(#[from] CatalogBuildError),
}
