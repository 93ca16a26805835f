use glam::Vec2;
use scrollstory_common::{Viewport, ViewportError};
use scrollstory_kernel::FrameInput;

use crate::event::InputEvent;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("resize rejected: {0}")]
    Viewport(#[from] ViewportError),
    #[error("non-finite scroll value {0}")]
    NonFiniteScroll(f32),
}

/// Latest values written by the input handlers.
///
/// The page is `sections` viewports tall, so the scroll offset lives in
/// `[0, (sections - 1) * viewport height]`.
#[derive(Debug, Clone)]
pub struct InputState {
    viewport: Viewport,
    scroll_offset: f32,
    cursor: Vec2,
    sections: usize,
}

impl InputState {
    pub fn new(viewport: Viewport, sections: usize) -> Self {
        Self {
            viewport,
            scroll_offset: 0.0,
            cursor: Vec2::ZERO,
            sections: sections.max(1),
        }
    }

    pub fn apply(&mut self, event: InputEvent) -> Result<(), InputError> {
        match event {
            InputEvent::Resized { width, height } => {
                self.viewport = Viewport::new(width, height)?;
                self.scroll_offset = self.clamp_scroll(self.scroll_offset);
                tracing::debug!(width, height, "viewport resized");
            }
            InputEvent::ScrolledTo(offset) => {
                self.scroll_offset = self.clamp_scroll(finite(offset)?);
            }
            InputEvent::ScrolledBy(delta) => {
                self.scroll_offset = self.clamp_scroll(self.scroll_offset + finite(delta)?);
            }
            InputEvent::PointerMoved { x, y } => {
                self.cursor = self.viewport.normalize_pointer(x, y);
            }
        }
        Ok(())
    }

    /// Copy of the current values for one frame.
    pub fn snapshot(&self) -> FrameInput {
        FrameInput::new(self.scroll_offset, self.cursor, self.viewport)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn max_scroll(&self) -> f32 {
        (self.sections - 1) as f32 * self.viewport.height() as f32
    }

    fn clamp_scroll(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }
}

fn finite(value: f32) -> Result<f32, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NonFiniteScroll(value))
    }
}
