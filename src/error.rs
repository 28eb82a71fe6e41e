use thiserror::Error;

/// Result type alias using `SpotiforkError`
pub type Result<T> = std::result::Result<T, SpotiforkError>;

/// Error surfaced by the Spotify client, the playlist engines and the search.
///
/// Every variant renders as a human readable message; the front ends show
/// `to_string()` to the user and never branch on the kind.
#[derive(Error, Debug)]
pub enum SpotiforkError {
    /// Transport failure talking to Spotify
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Spotify answered with a non-success status
    #[error("Spotify API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Entity not found (or not owned by the expected user)
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Some track batches were appended before a later batch failed
    #[error("Added {written} of {total} tracks before failing: {source}")]
    PartialWrite {
        written: usize,
        total: usize,
        source: Box<SpotiforkError>,
    },

    /// A step of a fork or merge failed
    #[error("There was an error {stage}: {source}")]
    Stage {
        stage: String,
        source: Box<SpotiforkError>,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Authorization failed or no session is present
    #[error("Authorization error: {0}")]
    Auth(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SpotiforkError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Wrap the error with the engine step that produced it.
    pub fn during(self, stage: impl Into<String>) -> Self {
        Self::Stage {
            stage: stage.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping `Stage` and `PartialWrite` wrappers.
    pub fn root(&self) -> &SpotiforkError {
        match self {
            Self::Stage { source, .. } | Self::PartialWrite { source, .. } => source.root(),
            other => other,
        }
    }
}
