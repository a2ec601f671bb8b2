//! # ZoneKit Core
//!
//! Core types and utilities for ZoneKit.
//! Provides the territory document model, the world/screen geometry
//! primitives, shared constants, and the error taxonomy used by the editor.

pub mod constants;
pub mod data;
pub mod error;
pub mod types;

pub use data::{MapInfo, Territory, TerritoryData, Zone};

pub use error::{EditorError, EditorResult, FormatError};

pub use types::{CanvasRect, Point, ScreenPos, ScreenRect};
