//! Ten-pin scoring workspace (facade crate).
//!
//! This package keeps a single `tenpin::{core,engine,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_engine as engine;
pub use tenpin_term as term;
pub use tenpin_types as types;
