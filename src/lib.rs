pub mod algorithm;
pub mod digest;
pub mod error;
pub mod report;
pub mod result;

pub use crate::digest::Digest;
