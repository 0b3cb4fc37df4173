//! Typed search-query parameter model for the Searchlite HTTP API.
//!
//! The model is two layers over one source of truth: an untyped
//! name-to-string [`ParameterStore`], and the [`Query`] façade whose typed
//! accessors encode and decode the service's string, array and JSON
//! conventions. [`Query::build`] produces the canonical sorted query
//! string a transport sends; [`Query::parse`] turns such a string (from a
//! deep link, for instance) back into a query. Transport, authentication
//! and response handling live elsewhere — this crate is a pure value
//! transformer.

pub mod params;
pub mod query;
pub mod store;

pub use params::{
    AlternativesAsExact, AroundRadius, ExactOnSingleWordQuery, QueryType, RemoveStopWords,
    RemoveWordsIfNoResults, TypoTolerance,
};
pub use query::Query;
pub use store::ParameterStore;

pub use searchlite_core::{GeoPoint, GeoRect, ValueError};
