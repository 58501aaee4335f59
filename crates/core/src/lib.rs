pub mod cache;
pub mod context;
pub mod locality;
pub mod repository;
pub mod storage;
