//! Domain value objects and request parameter types.
//!
//! Everything here validates at construction or in `validate()`, so an
//! invalid request is rejected before it reaches the network.

pub mod errors;
pub mod identifier;
pub mod params;
pub mod time_bound;

pub use errors::ValidationError;
pub use identifier::Identifier;
pub use params::{
    OhlcvInterval, OhlcvParams, PageParams, PoolListParams, PoolOrderBy, SortOrder,
    TokenPoolsParams, TransactionParams,
};
pub use time_bound::TimeBound;
