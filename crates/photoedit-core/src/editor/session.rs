//! Editing session for one image.
//!
//! Owns the brightness/saturation cells the sliders write to, the active tool,
//! and the listeners that must hear about every change. The color matrix is
//! derived fresh from the cells on each request.

use std::fmt;

use crate::editor::shared::SharedParams;
use crate::editor::tool::Tool;
use crate::transform::matrix::ColorMatrix;
use crate::transform::params::AdjustmentParams;

type Listener = Box<dyn FnMut(&AdjustmentParams) + Send>;

#[derive(Default)]
pub struct EditSession {
    params: AdjustmentParams,
    current_tool: Option<Tool>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for EditSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("params", &self.params)
            .field("current_tool", &self.current_tool)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> AdjustmentParams {
        self.params
    }

    /// Tool whose slider is shown, if any. No tool is active initially.
    pub fn current_tool(&self) -> Option<Tool> {
        self.current_tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if self.current_tool != Some(tool) {
            tracing::debug!(%tool, "tool selected");
        }
        self.current_tool = Some(tool);
    }

    /// Register a callback run with the new snapshot after every change.
    pub fn on_change(&mut self, listener: impl FnMut(&AdjustmentParams) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Mirror every change into `shared`, starting with the current params.
    pub fn bind_shared(&mut self, shared: SharedParams) {
        shared.store(self.params);
        self.on_change(move |params| shared.store(*params));
    }

    /// Write a slider value, clamped to the tool's range. Returns whether the
    /// stored value changed; listeners only run if it did.
    pub fn set_value(&mut self, tool: Tool, value: f32) -> bool {
        let value = tool.slider().clamp(value);
        let cell = tool.value_mut(&mut self.params);
        if *cell == value {
            return false;
        }
        *cell = value;
        tracing::debug!(%tool, value, "adjustment changed");
        self.notify();
        true
    }

    pub fn set_brightness(&mut self, brightness: f32) -> bool {
        self.set_value(Tool::Brightness, brightness)
    }

    pub fn set_saturation(&mut self, saturation: f32) -> bool {
        self.set_value(Tool::Saturation, saturation)
    }

    /// Write whichever parameter the active tool controls. Ignored when no
    /// tool is active.
    pub fn set_active_value(&mut self, value: f32) -> bool {
        match self.current_tool {
            Some(tool) => self.set_value(tool, value),
            None => false,
        }
    }

    /// Restore neutral params.
    pub fn reset(&mut self) -> bool {
        let neutral = AdjustmentParams::default();
        if self.params == neutral {
            return false;
        }
        self.params = neutral;
        tracing::debug!("adjustments reset");
        self.notify();
        true
    }

    /// Matrix for the current frame, recomputed on every call.
    pub fn color_matrix(&self) -> ColorMatrix {
        ColorMatrix::from_params(&self.params)
    }

    fn notify(&mut self) {
        let snapshot = self.params;
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_session() -> (EditSession, Arc<Mutex<Vec<AdjustmentParams>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut session = EditSession::new();
        let sink = seen.clone();
        session.on_change(move |p| sink.lock().unwrap().push(*p));
        (session, seen)
    }

    #[test]
    fn test_starts_neutral_without_tool() {
        let session = EditSession::new();
        assert_eq!(session.current_tool(), None);
        assert!(session.params().is_identity());
        assert_eq!(session.color_matrix(), ColorMatrix::IDENTITY);
    }

    #[test]
    fn test_set_value_clamps_and_notifies() {
        let (mut session, seen) = recording_session();
        assert!(session.set_brightness(300.0));
        assert!(session.set_saturation(2.5));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], AdjustmentParams::new(255.0, 1.0));
        assert_eq!(seen[1], AdjustmentParams::new(255.0, 2.5));
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let (mut session, seen) = recording_session();
        assert!(!session.set_saturation(1.0));
        assert!(session.set_saturation(-3.0));
        assert!(!session.set_saturation(0.0));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_active_tool_routes_slider() {
        let mut session = EditSession::new();
        assert!(!session.set_active_value(40.0));

        session.select_tool(Tool::Brightness);
        assert!(session.set_active_value(40.0));
        session.select_tool(Tool::Saturation);
        assert!(session.set_active_value(0.5));

        assert_eq!(session.current_tool(), Some(Tool::Saturation));
        assert_eq!(session.params(), AdjustmentParams::new(40.0, 0.5));
    }

    #[test]
    fn test_matrix_follows_latest_values() {
        let mut session = EditSession::new();
        session.set_brightness(10.0);
        session.set_brightness(-20.0);
        let m = session.color_matrix();
        assert_eq!(m.get(0, 4), -20.0);
        assert_eq!(m.get(3, 4), 0.0);
    }

    #[test]
    fn test_reset() {
        let (mut session, seen) = recording_session();
        assert!(!session.reset());
        session.set_saturation(3.0);
        assert!(session.reset());
        assert_eq!(session.params(), AdjustmentParams::default());
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_bind_shared_mirrors_changes() {
        let shared = SharedParams::default();
        let mut session = EditSession::new();
        session.bind_shared(shared.clone());
        session.set_brightness(-64.0);
        assert_eq!(shared.load().brightness, -64.0);
    }
}
