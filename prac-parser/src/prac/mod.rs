//! Main module for prac library functionality

pub mod error;
pub mod intervals;
pub mod lexing;
pub mod loader;
pub mod model;
pub mod parsing;
pub mod summary;
pub mod testing;
