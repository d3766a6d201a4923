//! `shelfcast-core` — building blocks shared by every shelfcast crate.
//!
//! Pure types only (no IO).

pub mod error;

pub use error::{Classify, ErrorKind};
