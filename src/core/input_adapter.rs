use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, InputEvent};

/// Where absolute pointer coordinates come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    /// Window cursor positions (`CursorMoved`)
    #[default]
    Cursor,
    /// Raw mouse motion summed into a virtual cursor, used while the cursor is locked
    RawMotion,
}

/// Translates winit events into [`InputEvent`]s. Held-key state lives with the
/// camera; this only maps keys and tracks where pointer positions come from.
#[derive(Debug, Clone)]
pub struct WinitController {
    pointer_source: PointerSource,
    /// Virtual cursor for raw motion, seeded at the initial pointer position
    virtual_pointer: (f32, f32),
}

impl WinitController {
    pub fn new(initial_pointer: (f32, f32)) -> Self {
        Self {
            pointer_source: PointerSource::default(),
            virtual_pointer: initial_pointer,
        }
    }

    pub fn set_pointer_source(&mut self, source: PointerSource) {
        self.pointer_source = source;
    }

    /// Process a window event, returning the logical event it maps to
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let button = Self::keycode_to_button(keycode)?;
                Some(InputEvent::Key {
                    button,
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::CursorMoved { position, .. } if self.pointer_source == PointerSource::Cursor => {
                Some(self.emit_pointer(position.x as f32, position.y as f32))
            }
            _ => None,
        }
    }

    /// Process a device event; only raw mouse motion is consumed
    pub fn process_device_event(&mut self, event: &DeviceEvent) -> Option<InputEvent> {
        match event {
            DeviceEvent::MouseMotion { delta } if self.pointer_source == PointerSource::RawMotion => {
                let x = self.virtual_pointer.0 + delta.0 as f32;
                let y = self.virtual_pointer.1 + delta.1 as f32;
                Some(self.emit_pointer(x, y))
            }
            _ => None,
        }
    }

    fn emit_pointer(&mut self, x: f32, y: f32) -> InputEvent {
        self.virtual_pointer = (x, y);
        InputEvent::Pointer { x, y }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // KeyEvent and CursorMoved carry platform fields that cannot be built here,
    // so key handling is exercised through the mapping.

    #[test]
    fn keycodes_map_to_logical_buttons() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyD), Some(Button::KeyD));
        assert_eq!(
            WinitController::keycode_to_button(KeyCode::Escape),
            Some(Button::Escape)
        );
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyQ), None);
        assert_eq!(WinitController::keycode_to_button(KeyCode::Space), None);
    }

    #[test]
    fn unrelated_window_events_ignored() {
        let mut controller = WinitController::new((400.0, 300.0));
        assert_eq!(controller.process_window_event(&WindowEvent::Focused(false)), None);
        assert_eq!(controller.process_window_event(&WindowEvent::CloseRequested), None);
    }

    #[test]
    fn raw_motion_accumulates_into_virtual_cursor() {
        let mut controller = WinitController::new((400.0, 300.0));
        controller.set_pointer_source(PointerSource::RawMotion);

        let first = controller.process_device_event(&DeviceEvent::MouseMotion { delta: (5.0, -2.0) });
        assert_eq!(first, Some(InputEvent::Pointer { x: 405.0, y: 298.0 }));

        let second = controller.process_device_event(&DeviceEvent::MouseMotion { delta: (1.0, 1.0) });
        assert_eq!(second, Some(InputEvent::Pointer { x: 406.0, y: 299.0 }));
    }

    #[test]
    fn raw_motion_ignored_in_cursor_mode() {
        let mut controller = WinitController::new((400.0, 300.0));
        let event = controller.process_device_event(&DeviceEvent::MouseMotion { delta: (5.0, 5.0) });
        assert_eq!(event, None);
    }
}
