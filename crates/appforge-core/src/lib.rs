//! Appforge Core - library for the appforge project generator
//!
//! Scaffolds React and React Native application repositories from remote
//! boilerplate archives and generates additional source files (screens,
//! shared components, models, stores, API stubs) inside an existing
//! scaffolded project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure name transforms, the filesystem
//!   existence gate, flavor detection, blueprint rendering
//! - **Layer 2: Workflow Orchestration** - Boilerplate index/fetching, the
//!   scaffold pipeline, generation flows, project commands
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use appforge_core::{generate, name::CanonicalNames};
//!
//! let names = CanonicalNames::derive("my-app-name");
//! assert_eq!(names.upper_camel, "MyAppName");
//!
//! // Generate a screen in the project at `root`
//! let outcome = generate::generate(root, generate::ComponentKind::Screen, "intro").await?;
//! ```

pub mod flavor;
pub mod fsx;
pub mod generate;
pub mod name;
pub mod outcome;
pub mod project;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use flavor::{Flavor, FlavorError, Framework, SourceLang};
pub use fsx::fs_exists;
pub use name::{camel_case_to_dash, camelize, is_camel_case, upper_camelize, CanonicalNames};
pub use outcome::CommandOutcome;

#[cfg(feature = "tui")]
pub use tui::{run_init, InitArgs};

/// CLI version - used for boilerplate compatibility checking
/// The binary defines its own version, but this provides a fallback
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
