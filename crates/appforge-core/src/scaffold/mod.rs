//! Boilerplate scaffolding
//!
//! This module provides:
//! - The boilerplate index (built-in, env override, local file)
//! - Archive fetching and unpacking
//! - The sequential scaffold pipeline (stage, unpack, brand, mark)
//! - Version compatibility checking

pub mod fetcher;
pub mod index;
pub mod pipeline;
pub mod version;

pub use fetcher::{unpack_archive, BoilerplateFetcher};
pub use index::{BoilerplateIndex, BoilerplateSpec, INDEX_URL_ENV};
pub use version::check_compatibility;

/// User agent for HTTP requests.
pub const USER_AGENT: &str = "appforge";
