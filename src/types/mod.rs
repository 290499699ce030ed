//! Types shared by the tree and graph modules.

pub mod error;

pub use error::{DsError, DsResult};

/// Weight assigned by `add_connection` on a weighted graph.
pub const DEFAULT_WEIGHT: u8 = 1;
