//! Helper functions shared by the generator and templates

mod date;

pub use date::*;
