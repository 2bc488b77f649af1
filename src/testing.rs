//! Test support - a recording in-memory display server
//!
//! `MockDisplay` hands out fresh handles, tracks which resources are live,
//! and logs every call in order so tests can assert on lifecycle sequencing
//! (e.g. destroy-before-create during a rebuild). Text metrics are fixed at
//! 8 pixels per character with a 10/2 ascent/descent so truncation and
//! centering are deterministic.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::display::{
    Color, DisplayError, DisplayServer, EventMask, FontId, GcId, PixmapId, Result, TextExtents,
    WindowId,
};
use crate::geometry::Rect;

pub const CHAR_WIDTH: u32 = 8;

/// One recorded native call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateWindow {
        window: WindowId,
        rect: Rect,
        mask: EventMask,
    },
    DestroyWindow(WindowId),
    MapWindow(WindowId),
    UnmapWindow(WindowId),
    RestackBelow {
        window: WindowId,
        sibling: WindowId,
    },
    LoadFont(String),
    FreeFont(FontId),
    FillBordered {
        fill: Color,
        border: Color,
        width: u32,
        height: u32,
    },
    DrawText {
        color: Color,
        text: String,
        x: i32,
        y: i32,
    },
    CopyToWindow(WindowId),
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    next_id: u64,
    pub live_windows: BTreeSet<WindowId>,
    pub mapped_windows: BTreeSet<WindowId>,
    pub live_pixmaps: HashSet<PixmapId>,
    pub live_gcs: HashSet<GcId>,
    pub live_fonts: HashSet<FontId>,
    pub titles: HashMap<WindowId, String>,
    /// Font specs that fail to load
    pub bad_fonts: HashSet<String>,
    /// When set, `create_window` fails once this many windows were created
    pub fail_creates_after: Option<usize>,
    windows_created: usize,
    pub calls: Vec<Call>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Register a managed window with a title, as if a client had mapped it
    pub fn add_managed(&mut self, title: &str) -> WindowId {
        let window = WindowId(self.fresh_id());
        self.live_windows.insert(window);
        self.titles.insert(window, title.to_string());
        window
    }

    /// The color `alloc_color` yields for `spec`
    pub fn color_for(spec: &str) -> Color {
        Color(
            spec.bytes()
                .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32)),
        )
    }

    /// Clear the call log, keeping all live resources
    pub fn reset_calls(&mut self) {
        self.calls.clear();
    }

    /// Decoration windows created so far, in creation order
    pub fn created_windows(&self) -> Vec<WindowId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::CreateWindow { window, .. } => Some(*window),
                _ => None,
            })
            .collect()
    }

    /// Windows destroyed so far, in destruction order
    pub fn destroyed_windows(&self) -> Vec<WindowId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DestroyWindow(window) => Some(*window),
                _ => None,
            })
            .collect()
    }

    /// Labels drawn so far, in draw order
    pub fn drawn_labels(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::DrawText { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DisplayServer for MockDisplay {
    fn create_window(&mut self, rect: Rect, mask: EventMask) -> Result<WindowId> {
        if matches!(self.fail_creates_after, Some(limit) if self.windows_created >= limit) {
            return Err(DisplayError::WindowCreation);
        }
        self.windows_created += 1;
        let window = WindowId(self.fresh_id());
        self.live_windows.insert(window);
        self.calls.push(Call::CreateWindow { window, rect, mask });
        Ok(window)
    }

    fn destroy_window(&mut self, window: WindowId) {
        // Best-effort: destroying an unknown handle is not an error
        self.live_windows.remove(&window);
        self.mapped_windows.remove(&window);
        self.calls.push(Call::DestroyWindow(window));
    }

    fn map_window(&mut self, window: WindowId) {
        if self.live_windows.contains(&window) {
            self.mapped_windows.insert(window);
        }
        self.calls.push(Call::MapWindow(window));
    }

    fn unmap_window(&mut self, window: WindowId) {
        self.mapped_windows.remove(&window);
        self.calls.push(Call::UnmapWindow(window));
    }

    fn restack_below(&mut self, window: WindowId, sibling: WindowId) {
        self.calls.push(Call::RestackBelow { window, sibling });
    }

    fn create_pixmap(&mut self, width: u32, height: u32) -> Result<PixmapId> {
        if width == 0 || height == 0 {
            return Err(DisplayError::PixmapCreation { width, height });
        }
        let pixmap = PixmapId(self.fresh_id());
        self.live_pixmaps.insert(pixmap);
        Ok(pixmap)
    }

    fn free_pixmap(&mut self, pixmap: PixmapId) {
        self.live_pixmaps.remove(&pixmap);
    }

    fn create_gc(&mut self, _drawable: PixmapId) -> Result<GcId> {
        let gc = GcId(self.fresh_id());
        self.live_gcs.insert(gc);
        Ok(gc)
    }

    fn free_gc(&mut self, gc: GcId) {
        self.live_gcs.remove(&gc);
    }

    fn set_font(&mut self, _gc: GcId, _font: FontId) {}

    fn load_font(&mut self, spec: &str) -> Result<FontId> {
        self.calls.push(Call::LoadFont(spec.to_string()));
        if self.bad_fonts.contains(spec) {
            return Err(DisplayError::FontLoad {
                spec: spec.to_string(),
            });
        }
        let font = FontId(self.fresh_id());
        self.live_fonts.insert(font);
        Ok(font)
    }

    fn free_font(&mut self, font: FontId) {
        self.live_fonts.remove(&font);
        self.calls.push(Call::FreeFont(font));
    }

    fn text_extents(&self, _font: FontId, text: &str) -> TextExtents {
        TextExtents {
            width: text.chars().count() as u32 * CHAR_WIDTH,
            ascent: 10,
            descent: 2,
        }
    }

    fn alloc_color(&mut self, spec: &str) -> Result<Color> {
        if spec.is_empty() {
            return Err(DisplayError::ColorAlloc {
                spec: spec.to_string(),
            });
        }
        Ok(Self::color_for(spec))
    }

    fn fill_bordered_rect(
        &mut self,
        _pixmap: PixmapId,
        _gc: GcId,
        fill: Color,
        border: Color,
        width: u32,
        height: u32,
    ) {
        self.calls.push(Call::FillBordered {
            fill,
            border,
            width,
            height,
        });
    }

    fn draw_text(&mut self, _pixmap: PixmapId, _gc: GcId, x: i32, y: i32, color: Color, text: &str) {
        self.calls.push(Call::DrawText {
            color,
            text: text.to_string(),
            x,
            y,
        });
    }

    fn copy_to_window(
        &mut self,
        _pixmap: PixmapId,
        _gc: GcId,
        window: WindowId,
        _width: u32,
        _height: u32,
    ) {
        self.calls.push(Call::CopyToWindow(window));
    }

    fn window_title(&self, window: WindowId) -> String {
        self.titles.get(&window).cloned().unwrap_or_default()
    }
}
