//! Core generation logic for `codify`.
//!
//! Turns a named group of binary files (a *pack*) into two pieces of
//! C/C++ source text: a header declaring one `extern` byte array plus a
//! size constant per file, and a source file defining those arrays as
//! hex-literal initializers. Everything here is pure string
//! construction; reading resource files and writing the generated pair
//! to disk belong to the caller.

pub mod errors;
pub mod pack;
pub mod render;

pub use errors::CodifyError;
pub use pack::{sanitize, Pack, Resource};
pub use render::generate;
