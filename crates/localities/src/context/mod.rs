//! Request-scoped context module.
//!
//! Provides the `RequestScope` extractor that builds a fresh
//! `RequestContext` for every request, to complement application-scoped
//! `AppState`.

mod extractor;

pub use extractor::RequestScope;
