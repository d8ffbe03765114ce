pub use crate::app::App;
pub use paragames_types::error::{ClResult, Error, ValidationErrors};
pub use paragames_types::types::Patch;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
