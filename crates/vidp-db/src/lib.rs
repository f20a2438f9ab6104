//! VidP Metadata Store Library
//!
//! This crate provides the metadata persistence abstraction for VidP. The
//! `MetadataStore` trait is the seam a future MongoDB-backed implementation
//! slots into; the default backend is an in-process, lock-guarded map.

pub mod memory;
pub mod traits;

pub use memory::InMemoryMetadataStore;
pub use traits::MetadataStore;
