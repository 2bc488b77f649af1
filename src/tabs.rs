//! Tabbed layout - decoration lifecycle and incremental reconciliation
//!
//! One `Tabbed` instance manages the tab strip for one layout slot: a row of
//! decoration windows, one per managed window, above a single visible window.
//! Each layout pass compares the previous decoration mapping against the
//! current window sequence and reuses it untouched when nothing moved;
//! any membership or order change tears the strip down and rebuilds it,
//! destroying every old decoration before creating a new one.

use tracing::{debug, trace, warn};

use crate::config::{TabConfig, FALLBACK_FONT};
use crate::display::{
    DisplayServer, Event, EventMask, FontId, LayoutMessage, Result, WindowId,
};
use crate::geometry::{content_area, tab_columns, tab_width, Rect};
use crate::layout::Layout;
use crate::render::update_tab;
use crate::stack::Stack;

/// One tab: the decoration window and the managed window it fronts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPair {
    pub decoration: WindowId,
    pub managed: WindowId,
}

/// Live tab-strip state for one layout instance
#[derive(Debug, Clone)]
struct TabState {
    /// Decoration/managed pairs in stacking order
    tabs: Vec<TabPair>,
    /// Last-known rectangle of the parent region
    screen: Rect,
    /// Owned font, freed exactly once on release
    font: FontId,
}

impl TabState {
    /// The managed-window component of the mapping, in order
    fn managed_sequence(&self) -> Vec<WindowId> {
        self.tabs.iter().map(|t| t.managed).collect()
    }

    fn find_by_decoration(&self, window: WindowId) -> Option<TabPair> {
        self.tabs.iter().copied().find(|t| t.decoration == window)
    }

    fn find_by_managed(&self, window: WindowId) -> Option<TabPair> {
        self.tabs.iter().copied().find(|t| t.managed == window)
    }
}

/// Tabbed window arrangement: clickable title tabs above one visible window
#[derive(Debug, Clone)]
pub struct Tabbed {
    config: TabConfig,
    state: Option<TabState>,
}

impl Tabbed {
    pub fn new(config: TabConfig) -> Self {
        Self { config, state: None }
    }

    /// Construct with a named built-in theme
    pub fn with_theme(name: &str) -> Self {
        Self::new(TabConfig::by_name(name))
    }

    pub fn config(&self) -> &TabConfig {
        &self.config
    }

    /// True once a layout pass has created tab state
    pub fn has_state(&self) -> bool {
        self.state.is_some()
    }

    /// Load the configured font, falling back to the fixed default spec
    fn load_font<D: DisplayServer>(&self, display: &mut D) -> Result<FontId> {
        match display.load_font(&self.config.font) {
            Ok(font) => Ok(font),
            Err(e) => {
                warn!(font = %self.config.font, error = %e, "font load failed, using fallback");
                display.load_font(FALLBACK_FONT)
            }
        }
    }

    /// Destroy all decorations and free the font, clearing state
    fn release<D: DisplayServer>(&mut self, display: &mut D) {
        if let Some(state) = self.state.take() {
            debug!(tabs = state.tabs.len(), "releasing tab state");
            destroy_tabs(display, state.tabs.iter().map(|t| t.decoration));
            display.free_font(state.font);
        }
    }

    /// Redraw one tab, sizing it from the last-known screen rectangle
    fn render_one<D: DisplayServer>(
        &self,
        display: &mut D,
        pair: TabPair,
        focused: Option<WindowId>,
    ) -> Result<()> {
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        let width = tab_width(state.screen, state.tabs.len());
        update_tab(
            display,
            &self.config,
            state.font,
            focused,
            width,
            pair.decoration,
            pair.managed,
        )
    }
}

impl<D: DisplayServer> Layout<D> for Tabbed {
    fn name(&self) -> &'static str {
        "tabbed"
    }

    fn layout(
        &mut self,
        display: &mut D,
        rect: Rect,
        stack: &Stack<WindowId>,
    ) -> Result<Vec<(WindowId, Rect)>> {
        // A solitary window needs no tabs at all
        if stack.is_solitary() {
            if self.state.is_some() {
                debug!("single window left, dropping tab strip");
                self.release(display);
            }
            return Ok(vec![(*stack.focused(), rect)]);
        }

        let windows = stack.integrate();

        let state = match self.state.take() {
            Some(prior) if prior.managed_sequence() == windows => {
                trace!(tabs = prior.tabs.len(), "window sequence unchanged, reusing tabs");
                TabState { screen: rect, ..prior }
            }
            Some(prior) => {
                debug!(
                    old = prior.tabs.len(),
                    new = windows.len(),
                    "window sequence changed, rebuilding tabs"
                );
                destroy_tabs(display, prior.tabs.iter().map(|t| t.decoration));
                let font = prior.font;
                match create_tabs(display, &self.config, rect, &windows) {
                    Ok(decorations) => TabState {
                        tabs: zip_tabs(decorations, &windows),
                        screen: rect,
                        font,
                    },
                    Err(e) => {
                        // The state is gone; the font must not outlive it
                        display.free_font(font);
                        return Err(e);
                    }
                }
            }
            None => {
                debug!(windows = windows.len(), "creating tab strip");
                let font = self.load_font(display)?;
                match create_tabs(display, &self.config, rect, &windows) {
                    Ok(decorations) => TabState {
                        tabs: zip_tabs(decorations, &windows),
                        screen: rect,
                        font,
                    },
                    Err(e) => {
                        display.free_font(font);
                        return Err(e);
                    }
                }
            }
        };

        // Map unconditionally so a hidden strip reappears after reconciling
        show_tabs(display, state.tabs.iter().map(|t| t.decoration));

        // Store before rendering: a failed render must not orphan the
        // decorations and font, which stay owned until release
        self.state = Some(state);

        let focused = Some(*stack.focused());
        if let Some(state) = self.state.as_ref() {
            let width = tab_width(rect, state.tabs.len());
            for pair in &state.tabs {
                update_tab(
                    display,
                    &self.config,
                    state.font,
                    focused,
                    width,
                    pair.decoration,
                    pair.managed,
                )?;
            }
        }

        Ok(vec![(
            *stack.focused(),
            content_area(rect, self.config.tab_height),
        )])
    }

    fn handle_event(
        &mut self,
        display: &mut D,
        stack: &mut Stack<WindowId>,
        event: &Event,
    ) -> Result<()> {
        let Some(state) = self.state.as_ref() else {
            return Ok(());
        };
        match *event {
            Event::ButtonPress { window, subwindow } => {
                let hit = state.find_by_decoration(window).or_else(|| {
                    subwindow.and_then(|sub| state.find_by_decoration(sub))
                });
                if let Some(pair) = hit {
                    trace!(?pair.managed, "tab clicked");
                    stack.focus_element(&pair.managed);
                    self.render_one(display, pair, Some(*stack.focused()))?;
                }
            }
            Event::Expose { window } => {
                if let Some(pair) = state.find_by_decoration(window) {
                    self.render_one(display, pair, Some(*stack.focused()))?;
                }
            }
            Event::PropertyNotify { window } => {
                // Title changes arrive against the managed window
                if let Some(pair) = state.find_by_managed(window) {
                    self.render_one(display, pair, Some(*stack.focused()))?;
                }
            }
        }
        Ok(())
    }

    fn handle_message(&mut self, display: &mut D, message: &LayoutMessage) -> Result<()> {
        match message {
            LayoutMessage::Hide => {
                if let Some(state) = self.state.as_ref() {
                    trace!(tabs = state.tabs.len(), "hiding tab strip");
                    hide_tabs(display, state.tabs.iter().map(|t| t.decoration));
                }
            }
            LayoutMessage::ReleaseResources => self.release(display),
        }
        Ok(())
    }
}

/// Pair new decoration handles with their managed windows, in order
fn zip_tabs(decorations: Vec<WindowId>, windows: &[WindowId]) -> Vec<TabPair> {
    decorations
        .into_iter()
        .zip(windows.iter().copied())
        .map(|(decoration, managed)| TabPair { decoration, managed })
        .collect()
}

/// Create one decoration window per managed window, consuming the rectangle
/// left-to-right. Each decoration is restacked directly below its managed
/// window so it never occludes the client area.
fn create_tabs<D: DisplayServer>(
    display: &mut D,
    config: &TabConfig,
    rect: Rect,
    windows: &[WindowId],
) -> Result<Vec<WindowId>> {
    let columns = tab_columns(rect, windows.len(), config.tab_height);
    let mask = EventMask::EXPOSURE | EventMask::BUTTON_PRESS;

    let mut decorations = Vec::with_capacity(windows.len());
    for (&managed, column) in windows.iter().zip(columns) {
        let decoration = match display.create_window(column, mask) {
            Ok(decoration) => decoration,
            Err(e) => {
                // Partial strips are never handed out
                destroy_tabs(display, decorations.into_iter());
                return Err(e);
            }
        };
        display.restack_below(decoration, managed);
        decorations.push(decoration);
    }
    Ok(decorations)
}

/// Destroy the given decoration windows (best-effort)
fn destroy_tabs<D: DisplayServer>(display: &mut D, decorations: impl Iterator<Item = WindowId>) {
    for decoration in decorations {
        display.destroy_window(decoration);
    }
}

/// Map the given decoration windows
fn show_tabs<D: DisplayServer>(display: &mut D, decorations: impl Iterator<Item = WindowId>) {
    for decoration in decorations {
        display.map_window(decoration);
    }
}

/// Unmap the given decoration windows, keeping their state
fn hide_tabs<D: DisplayServer>(display: &mut D, decorations: impl Iterator<Item = WindowId>) {
    for decoration in decorations {
        display.unmap_window(decoration);
    }
}
