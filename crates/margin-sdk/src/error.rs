use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
