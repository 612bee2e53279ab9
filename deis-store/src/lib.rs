pub mod error;
pub mod profile;
pub mod settings;

pub use error::StoreError;
pub use profile::{ProfileEnv, create_profile, delete_profile, locate, read_profile};
pub use settings::Settings;
