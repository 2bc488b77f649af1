//! Display server abstraction
//!
//! This module defines the seam between the tab engine and the native
//! windowing system: opaque resource handles, the event types delivered by
//! the host, and the `DisplayServer` trait covering every native primitive
//! the engine issues. A production host backs the trait with its X
//! connection; tests back it with a recording mock.

use bitflags::bitflags;
use thiserror::Error;

use crate::geometry::Rect;

/// Handle to a native window (managed or decoration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

/// Handle to an off-screen pixmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixmapId(pub u64);

/// Handle to a graphics context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GcId(pub u64);

/// Handle to a loaded server-side font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u64);

/// An allocated color, ready to be set on a graphics context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

bitflags! {
    /// Input events a window is registered for
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventMask: u32 {
        const EXPOSURE = 1 << 0;
        const BUTTON_PRESS = 1 << 1;
    }
}

/// Metrics for a string rendered in a given font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtents {
    pub width: u32,
    pub ascent: i32,
    pub descent: i32,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to load font {spec:?}")]
    FontLoad { spec: String },

    #[error("Failed to allocate color {spec:?}")]
    ColorAlloc { spec: String },

    #[error("Failed to create window")]
    WindowCreation,

    #[error("Failed to create pixmap ({width}x{height})")]
    PixmapCreation { width: u32, height: u32 },

    #[error("Failed to create graphics context")]
    GcCreation,
}

pub type Result<T> = std::result::Result<T, DisplayError>;

/// Windowing events the host forwards into the tab engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A mouse button was pressed on `window` (or on `subwindow` within it)
    ButtonPress {
        window: WindowId,
        subwindow: Option<WindowId>,
    },
    /// A region of `window` needs to be repainted
    Expose { window: WindowId },
    /// A property (e.g. the title) of `window` changed
    PropertyNotify { window: WindowId },
}

/// Layout control messages from the host framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMessage {
    /// The layout is being hidden; decorations should unmap but keep state
    Hide,
    /// The layout is being torn down; all native resources must be released
    ReleaseResources,
}

/// Native windowing primitives consumed by the tab engine.
///
/// Destroy/free/map/unmap operations are best-effort: the server ignores
/// handles that no longer exist, so they do not return errors.
pub trait DisplayServer {
    /// Create a borderless, zero-depth window at `rect`, selecting `mask` input
    fn create_window(&mut self, rect: Rect, mask: EventMask) -> Result<WindowId>;
    fn destroy_window(&mut self, window: WindowId);
    fn map_window(&mut self, window: WindowId);
    fn unmap_window(&mut self, window: WindowId);
    /// Restack `window` directly below `sibling`
    fn restack_below(&mut self, window: WindowId, sibling: WindowId);

    fn create_pixmap(&mut self, width: u32, height: u32) -> Result<PixmapId>;
    fn free_pixmap(&mut self, pixmap: PixmapId);

    /// Create a graphics context with graphics-exposure events disabled
    fn create_gc(&mut self, drawable: PixmapId) -> Result<GcId>;
    fn free_gc(&mut self, gc: GcId);
    fn set_font(&mut self, gc: GcId, font: FontId);

    fn load_font(&mut self, spec: &str) -> Result<FontId>;
    fn free_font(&mut self, font: FontId);
    fn text_extents(&self, font: FontId, text: &str) -> TextExtents;

    fn alloc_color(&mut self, spec: &str) -> Result<Color>;

    /// Fill `pixmap` with `fill` and draw a 1-pixel `border` around its edge
    fn fill_bordered_rect(
        &mut self,
        pixmap: PixmapId,
        gc: GcId,
        fill: Color,
        border: Color,
        width: u32,
        height: u32,
    );
    /// Draw `text` in `color` with the GC's current font, baseline at (x, y)
    fn draw_text(&mut self, pixmap: PixmapId, gc: GcId, x: i32, y: i32, color: Color, text: &str);
    /// Copy the whole `width`x`height` pixmap onto `window` at (0, 0)
    fn copy_to_window(&mut self, pixmap: PixmapId, gc: GcId, window: WindowId, width: u32, height: u32);

    /// Resolve a window's human-readable title
    fn window_title(&self, window: WindowId) -> String;
}
