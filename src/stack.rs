//! Window stack - focus zipper over the managed windows of one layout slot

/// An ordered, never-empty collection of windows with one focused element.
///
/// `up` holds the windows above the focus, nearest first; `down` holds the
/// windows below, nearest first. Flattening restores top-to-bottom order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    up: Vec<T>,
    focus: T,
    down: Vec<T>,
}

impl<T: Clone + PartialEq> Stack<T> {
    pub fn new(up: Vec<T>, focus: T, down: Vec<T>) -> Self {
        Self { up, focus, down }
    }

    /// A stack holding a single window
    pub fn singleton(focus: T) -> Self {
        Self {
            up: Vec::new(),
            focus,
            down: Vec::new(),
        }
    }

    /// The currently focused window
    pub fn focused(&self) -> &T {
        &self.focus
    }

    /// True when the focused window has no siblings above or below it
    pub fn is_solitary(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// Number of windows in the stack (always at least 1)
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.up.len() + 1 + self.down.len()
    }

    /// Flatten to the integrated top-to-bottom window order
    pub fn integrate(&self) -> Vec<T> {
        let mut windows: Vec<T> = self.up.iter().rev().cloned().collect();
        windows.push(self.focus.clone());
        windows.extend(self.down.iter().cloned());
        windows
    }

    /// Move focus to `target` if it is a member, keeping integrated order.
    ///
    /// No-op when `target` is not in the stack.
    pub fn focus_element(&mut self, target: &T) {
        if self.focus == *target {
            return;
        }
        let windows = self.integrate();
        let Some(index) = windows.iter().position(|w| w == target) else {
            return;
        };
        let mut up: Vec<T> = windows[..index].to_vec();
        up.reverse();
        let focus = windows[index].clone();
        let down = windows[index + 1..].to_vec();
        *self = Self { up, focus, down };
    }
}
