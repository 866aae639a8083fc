//! Game implementations.

pub mod antipattern;
