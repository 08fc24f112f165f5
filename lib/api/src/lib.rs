//! REST API for AromaCraft
//!
//! JSON endpoints over an [`AromaService`](aromacraft_sources::AromaService).
//! Errors come back as `{"error": "..."}` with 400 for bad input, 502 when an
//! upstream failed and 500 otherwise.

pub mod rest;

pub use rest::{RestApi, DEFAULT_PAIRING_LIMIT};
