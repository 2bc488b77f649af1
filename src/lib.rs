//! tabwm - tabbed window arrangement for tiling window managers.
//!
//! Renders a horizontal row of clickable title tabs above a single visible
//! window and hides the rest. The host window manager drives the engine
//! through the [`Layout`] trait and backs the [`DisplayServer`] trait with
//! its native display connection.
//!
//! - **tabs**: the `Tabbed` layout (state, reconciliation, event routing)
//! - **render**: per-tab drawing and label truncation
//! - **layout**: host-facing `Layout` trait and name-keyed registry
//! - **display**: windowing-system collaborator seam
//! - **stack**: focus zipper over the managed windows of one slot
//! - **geometry**: tab column allocation
//! - **config**: tab appearance, themes, TOML loading
//!
//! # Module Hierarchy
//!
//! ```text
//! src/
//! ├── lib.rs      - Crate exports
//! ├── tabs.rs     - Tabbed (state machine + reconciler + router)
//! ├── render.rs   - Tab renderer and truncation
//! ├── layout.rs   - Layout trait and registry
//! ├── display.rs  - DisplayServer trait, handles, events
//! ├── stack.rs    - Stack (focus zipper)
//! ├── geometry.rs - Rect and column allocation
//! └── config.rs   - TabConfig and themes
//! ```

pub mod config;
pub mod display;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod stack;
pub mod tabs;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{TabConfig, FALLBACK_FONT};
pub use display::{
    Color, DisplayError, DisplayServer, Event, EventMask, FontId, GcId, LayoutMessage, PixmapId,
    TextExtents, WindowId,
};
pub use geometry::Rect;
pub use layout::{Layout, LayoutRegistry};
pub use stack::Stack;
pub use tabs::{TabPair, Tabbed};
