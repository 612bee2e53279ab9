pub mod certs;
pub mod config;
pub mod error;

pub use certs::{Cert, CertAttachRequest, CertCreateRequest, Certs};
pub use config::ClientConfig;
pub use error::DeisError;
