pub mod digest;
pub mod discover;
pub mod error;
pub mod manifest;
pub mod path_safety;
pub mod verify;

pub use error::{Mismatch, VerifyError};
pub use verify::{validate_directory, validate_with_config, FailMode, VerifyConfig, VerifyReport};
