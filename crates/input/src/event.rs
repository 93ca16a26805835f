/// An input event delivered by the host, already stripped of windowing
/// library types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The drawable area changed size, in physical pixels.
    Resized { width: u32, height: u32 },
    /// The page scrolled to an absolute vertical offset, in pixels.
    ScrolledTo(f32),
    /// The page scrolled by a relative amount, in pixels. Positive is down.
    ScrolledBy(f32),
    /// Pointer position in viewport pixels, origin at the top-left.
    PointerMoved { x: f64, y: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_compare_by_value() {
        assert_eq!(
            InputEvent::Resized {
                width: 800,
                height: 600
            },
            InputEvent::Resized {
                width: 800,
                height: 600
            }
        );
        assert_ne!(InputEvent::ScrolledTo(1.0), InputEvent::ScrolledBy(1.0));
    }
}
