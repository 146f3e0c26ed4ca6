//! **effort-core** — core types for minimum-effort grid search.
//!
//! This crate provides the data model shared by the rest of the *effort*
//! workspace: [`Coordinates`] addressing a cell by row and column, and
//! [`Board`], a validated rectangular grid of integer elevations.

pub mod board;
pub mod geom;

pub use board::{Board, BoardError};
pub use geom::Coordinates;
