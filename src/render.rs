//! Tab rendering - draws one tab's background, border, and label
//!
//! Each tab is drawn onto an off-screen pixmap and blitted onto its
//! decoration window in one copy, so a partially drawn tab is never visible.
//! The pixmap and its graphics context are owned by a `Canvas` guard and
//! freed when it drops, on every exit path.

use tracing::trace;

use crate::config::TabConfig;
use crate::display::{Color, DisplayServer, FontId, GcId, PixmapId, Result, TextExtents, WindowId};

/// Scoped pixmap + graphics context over a display connection.
///
/// Dropping the canvas frees both resources; drawing goes through the guard
/// so the pixmap can never outlive it.
struct Canvas<'a, D: DisplayServer> {
    display: &'a mut D,
    pixmap: PixmapId,
    gc: GcId,
    width: u32,
    height: u32,
}

impl<'a, D: DisplayServer> Canvas<'a, D> {
    fn new(display: &'a mut D, width: u32, height: u32) -> Result<Self> {
        let pixmap = display.create_pixmap(width, height)?;
        let gc = match display.create_gc(pixmap) {
            Ok(gc) => gc,
            Err(e) => {
                display.free_pixmap(pixmap);
                return Err(e);
            }
        };
        Ok(Self {
            display,
            pixmap,
            gc,
            width,
            height,
        })
    }

    fn fill_bordered(&mut self, fill: Color, border: Color) {
        self.display
            .fill_bordered_rect(self.pixmap, self.gc, fill, border, self.width, self.height);
    }

    fn set_font(&mut self, font: FontId) {
        self.display.set_font(self.gc, font);
    }

    fn text_extents(&self, font: FontId, text: &str) -> TextExtents {
        self.display.text_extents(font, text)
    }

    fn draw_text(&mut self, x: i32, y: i32, color: Color, text: &str) {
        self.display.draw_text(self.pixmap, self.gc, x, y, color, text);
    }

    fn copy_to(&mut self, window: WindowId) {
        self.display
            .copy_to_window(self.pixmap, self.gc, window, self.width, self.height);
    }
}

impl<D: DisplayServer> Drop for Canvas<'_, D> {
    fn drop(&mut self) {
        self.display.free_gc(self.gc);
        self.display.free_pixmap(self.pixmap);
    }
}

/// Shorten `name` until `too_wide` rejects it, dropping one trailing
/// character per attempt. Terminates at the empty string at worst.
pub fn shrink_while(name: &str, mut too_wide: impl FnMut(&str) -> bool) -> String {
    let mut label = name.to_string();
    while !label.is_empty() && too_wide(&label) {
        label.pop();
    }
    label
}

/// Redraw one tab on its decoration window.
///
/// `focused` is the window currently holding focus, passed in by the caller
/// so rendering never reaches back into window-manager state.
pub fn update_tab<D: DisplayServer>(
    display: &mut D,
    config: &TabConfig,
    font: FontId,
    focused: Option<WindowId>,
    width: u32,
    decoration: WindowId,
    managed: WindowId,
) -> Result<()> {
    let name = display.window_title(managed);

    let (fill_spec, border_spec, text_spec) = if focused == Some(managed) {
        (
            &config.active_color,
            &config.active_border_color,
            &config.active_text_color,
        )
    } else {
        (
            &config.inactive_color,
            &config.inactive_border_color,
            &config.inactive_text_color,
        )
    };
    let fill = display.alloc_color(fill_spec)?;
    let border = display.alloc_color(border_spec)?;
    let text_color = display.alloc_color(text_spec)?;

    let height = config.tab_height;
    let mut canvas = Canvas::new(display, width, height)?;
    canvas.fill_bordered(fill, border);
    canvas.set_font(font);

    // Leave half a tab height of slack so the label clears the borders
    let max_width = width.saturating_sub(height / 2);
    let label = shrink_while(&name, |candidate| {
        canvas.text_extents(font, candidate).width > max_width
    });

    let extents = canvas.text_extents(font, &label);
    let x = (width.saturating_sub(extents.width) / 2) as i32;
    let y = (height as i32 - extents.ascent - extents.descent) / 2 + extents.ascent;
    canvas.draw_text(x, y, text_color, &label);
    canvas.copy_to(decoration);

    trace!(?decoration, ?managed, label = %label, "rendered tab");
    Ok(())
}
