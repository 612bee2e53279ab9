use thiserror::Error;

/// Errors raised by the client's core layer.
#[derive(Error, Debug)]
pub enum DeisError {
    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for DeisError {
    fn from(e: figment::Error) -> Self {
        DeisError::Config(Box::new(e))
    }
}
