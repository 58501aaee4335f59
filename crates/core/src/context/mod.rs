//! Request-scoped context threaded through every adapter call.

mod error;
mod types;

pub use error::ContextError;
pub use types::{RequestContext, RequestId};
