//! Core types, album metadata, and errors for the album poster generator.
//!
//! This crate provides the foundational types used across all other apg crates:
//! - [`AlbumInfo`] and its info-file parser
//! - Value types (colors, font handles)
//! - Error types for every pipeline stage

pub mod album;
pub mod errors;
pub mod types;

pub use album::AlbumInfo;
pub use errors::*;
pub use types::*;
