use ggez::GameError;
use thiserror::Error;

/// The closed set of ways the graphics frontend fails. All of these are
/// structural or configuration problems; none is worth retrying.
#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("could not initialize the graphics device: {source}")]
    DeviceInit {
        #[source]
        source: GameError,
    },
    #[error("could not load {path}: {source}")]
    AssetLoad {
        path: String,
        #[source]
        source: GameError,
    },
    #[error("render precondition violated: {detail}")]
    RenderPrecondition { detail: String },
}

impl From<GraphicsError> for GameError {
    fn from(error: GraphicsError) -> GameError {
        GameError::CustomError(error.to_string())
    }
}
