//! # ct-platform
//!
//! Platform-specific implementations for cliptrail.
//!
//! This crate contains the implementations that talk to the operating
//! system: clipboard access and change notifications, global hotkeys, the
//! in-process event bus and per-user directory resolution.

pub mod app_dirs;
pub mod clipboard;
pub mod hotkey;
pub mod runtime;
