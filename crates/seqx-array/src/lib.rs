//! `seqx` dynamic array.
//!
//! This crate provides [`DynArray`], a growable contiguous-storage container
//! built directly on a raw owned buffer:
//!
//! - **Amortized appends**: capacity doubles on overflow
//! - **Bounded waste**: capacity halves once usage falls under a quarter
//! - **Index-shifting insert/remove** at arbitrary positions
//!

pub mod array;
pub mod buffer;
pub mod error;

pub use array::DynArray;
pub use error::ArrayError;
