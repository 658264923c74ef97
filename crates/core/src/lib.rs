pub mod config;
pub mod error;
pub mod layout;
pub mod types;

pub use config::load_config;
pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use types::*;
