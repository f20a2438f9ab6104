//! VidP API
//!
//! HTTP surface for the VidP video-upload backend: route setup, handlers,
//! application state, and error rendering. The binary entry point lives in
//! `main.rs`; integration tests build the router through
//! [`setup::initialize_app`].

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
