//! State Module - The single source of truth
//!
//! One [`Store`] per trainer session holds the four state fields as
//! reactive signals. Everything the views show is derived from it; nothing
//! else in the crate is mutable session state.

mod store;

pub use store::*;
