//! Domain logic

pub mod rollup;
