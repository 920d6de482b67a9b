//! Built-in kernels

pub mod select;

pub use select::{select_nulls, select_pair, select_unary};
