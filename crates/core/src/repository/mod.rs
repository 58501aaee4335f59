mod error;
mod http_mapping;
mod policy;
mod traits;

pub use error::{ErrorKind, LocalityError, Result};
pub use http_mapping::locality_error_to_status_code;
pub use policy::{CacheFailurePolicy, ParsePolicyError};
pub use traits::LocalityRepository;
