//! # Backdrop
//!
//! Backdrop serves a catalog of background-image assets over HTTP. A
//! declarative JSON configuration describes the assets, either as explicit
//! entries or as directory-scan directives; at startup the configuration is
//! normalized into a deterministic, collision-free catalog of publicly
//! addressable entries, which is then held immutable for the lifetime of the
//! process.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **Tokio**: Async runtime
//! - **Serde**: Serialization/deserialization for the catalog JSON
//! - **Walkdir**: Directory traversal for scan directives
//!
//! ## Core Components
//!
//! - [`sanitize`]: Pure string transforms for identifiers, display names and
//!   serving paths
//! - [`scanner`]: Image-file collection under a scan directory
//! - [`catalog`]: Expansion and finalization of raw configuration entries
//!   into the immutable catalog, and public-path resolution
//! - [`config`]: Application configuration management
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`middleware`]: Response-header middleware
//! - [`routes`]: HTTP endpoint handlers and router assembly
//! - [`state`]: Shared application state
//! - [`types`]: Raw and finalized entry definitions

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod sanitize;
pub mod scanner;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
