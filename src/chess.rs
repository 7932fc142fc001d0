//! Chess board, pieces and the rules of their movement.

pub mod board;
pub mod core;
pub mod movegen;
