mod types;

pub use types::Locality;
