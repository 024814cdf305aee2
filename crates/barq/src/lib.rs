#![doc = include_str!("../README.md")]

pub use barq_core as core;
pub use barq_store as store;

#[cfg(feature = "ingest")]
pub use barq_ingest as ingest;

#[cfg(feature = "query")]
pub use barq_query as query;
