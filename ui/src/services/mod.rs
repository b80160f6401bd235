//! Infrastructure Services
//!
//! - **client**: users API client behind the `UsersApi` trait
//! - **config**: endpoint configuration and global settings
//!
//! The client is WASM-first, using async traits without Send bounds.

pub mod client;
pub mod config;
