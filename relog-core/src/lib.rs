pub mod build_info;
pub mod error;
pub mod release;
pub mod state;

pub use build_info::{BuildInfo, FALLBACK_VERSION};
pub use error::{RelogError, Result};
pub use release::{catalog, Release};
pub use state::{UiState, UiStateStore};
