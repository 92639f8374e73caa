//!
//! Error type shared by all algorithms in this crate
//!
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("extract_min called on an empty heap")]
    EmptyHeap,

    /// decrease_key with a key larger than the current one,
    /// or with an index outside of the heap.
    #[error("invalid key for heap index {index}")]
    InvalidKey { index: usize },

    #[error("vertex {0} is not in the graph")]
    VertexNotFound(usize),

    #[error("graph contains a negative-weight cycle")]
    NegativeCycle,

    #[error("order statistic {order} is out of range for {len} elements")]
    OrderOutOfRange { order: usize, len: usize },

    #[error("value {value} is out of the sortable range (max {max})")]
    ValueOutOfRange { value: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
