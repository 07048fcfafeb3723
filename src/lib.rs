//! Prints where the two `u32` fields of a `#[repr(C)]` struct start.
//!
//! `a` sits at offset 0 and `b` at offset 4: same-sized fields need no
//! padding between them.

pub mod error;
pub mod layout;
pub mod report;

pub use error::ReportError;
pub use layout::{offset_of, padding_before, Field, Pair, OFFSET_A, OFFSET_B};
pub use report::{render_offsets, write_offsets};
