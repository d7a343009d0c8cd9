use h2o_curves::CurveError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Curves(#[from] CurveError),

    #[error("Unsupported output format '{0}' (expected .svg or .png)")]
    UnsupportedFormat(String),

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Nothing to draw: scenario has no series")]
    Empty,
}
