use thiserror::Error;

pub type NumberLineResult<T> = Result<T, NumberLineError>;

#[derive(Debug, Error)]
pub enum NumberLineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
