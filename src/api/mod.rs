//! Purpose: Define the stable public Rust API boundary for tokenlens.
//! Exports: Decode entry points, result types, and error modeling.
//! Role: Public, additive-only surface; hides internal module layout.
//! Invariants: This module is the only public path callers should depend on.
//! Invariants: Everything exported here is synchronous and side-effect free.

pub use crate::core::decode::{DecodedToken, decode};
#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::segment::Segment;
