//! cliptrail application orchestration layer
//!
//! Use cases for the clipboard history and the two long-lived background
//! tasks: the clipboard watch loop and the global hotkey listener.

pub mod app_paths;
pub mod deps;
pub mod runtime;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;
