//! Core type definitions for the desktop
//!
//! This module centralizes type aliases used throughout the crate
//! for consistency and discoverability.

/// Unique window identifier
///
/// Windows are identified by a monotonically increasing 64-bit integer.
/// Window IDs are never reused within a `WindowManager` instance, even after
/// the window is closed.
pub type WindowId = u64;

/// Stacking order value; the highest value is the front-most window
pub type ZOrder = u32;
