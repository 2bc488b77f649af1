//! Layout seam - the contract between a host window manager and a layout
//!
//! Hosts drive a layout through two entry points: `layout` on every geometry
//! recomputation, and `handle_event`/`handle_message` for raw windowing
//! events and framework control messages. Layouts mutate themselves in place
//! where the host framework would otherwise swap in a replacement instance.

use std::collections::HashMap;

use crate::display::{DisplayServer, Event, LayoutMessage, Result, WindowId};
use crate::geometry::Rect;
use crate::stack::Stack;

/// A window-arrangement strategy for one layout slot
pub trait Layout<D: DisplayServer> {
    /// Registry name of this layout
    fn name(&self) -> &'static str;

    /// Recompute window placement for the given region and window stack.
    ///
    /// Returns the windows to make visible with their assigned rectangles;
    /// windows not in the result are expected to be hidden by the host.
    fn layout(
        &mut self,
        display: &mut D,
        rect: Rect,
        stack: &Stack<WindowId>,
    ) -> Result<Vec<(WindowId, Rect)>>;

    /// Route a raw windowing event. May request focus changes on the stack.
    fn handle_event(
        &mut self,
        display: &mut D,
        stack: &mut Stack<WindowId>,
        event: &Event,
    ) -> Result<()>;

    /// Handle a framework control message
    fn handle_message(&mut self, display: &mut D, message: &LayoutMessage) -> Result<()>;
}

type LayoutFactory<D> = Box<dyn Fn() -> Box<dyn Layout<D>>>;

/// Name-keyed registry of layout factories.
///
/// A host registers each layout it offers once and spawns fresh instances
/// per layout slot by name.
pub struct LayoutRegistry<D: DisplayServer> {
    factories: HashMap<String, LayoutFactory<D>>,
}

impl<D: DisplayServer> LayoutRegistry<D> {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a layout factory under `name`, replacing any previous entry
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Layout<D>> + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Spawn a fresh instance of the named layout
    pub fn spawn(&self, name: &str) -> Option<Box<dyn Layout<D>>> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Registered layout names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<D: DisplayServer> Default for LayoutRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
