//=========================================================================
// Input Buffer
//
// Collects key events between two frame boundaries. Acts as a transient
// event aggregator between the winit callbacks and the channel to the
// logic thread.
//
// Responsibilities:
// - Store incoming key events in arrival order
// - Drop exact consecutive duplicates (e.g., double KeyDown)
// - Hand over the frame's events via `drain()`
//
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Represents the transient event store for one frame of input.
//
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame so pushes rarely reallocate.
    //
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 32;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends a key event. A repeat of the previous event is ignored.
    //
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events and clears the buffer, or `None` if
    // nothing was buffered.
    //
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn consecutive_duplicates_are_ignored() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyD));
        assert_eq!(buffer.len(), 2, "Duplicates should be ignored");
    }

    #[test]
    fn tap_within_one_frame_keeps_both_edges() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::Space));
        buffer.push(InputEvent::KeyUp(KeyCode::Space));

        assert_eq!(
            buffer.drain(),
            Some(vec![
                InputEvent::KeyDown(KeyCode::Space),
                InputEvent::KeyUp(KeyCode::Space),
            ])
        );
    }

    #[test]
    fn drain_clears_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyW));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert_eq!(buffer.drain(), None);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for i in 0..64 {
            let key = if i % 2 == 0 { KeyCode::KeyW } else { KeyCode::KeyS };
            buffer.push(InputEvent::KeyDown(key));
        }
        let capacity = buffer.events.capacity();

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.events.capacity(), capacity);
    }
}
