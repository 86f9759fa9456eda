/// Delay between dropping the open style and hiding the overlay outright.
/// The overlay's CSS fade uses the same duration; see the style layer.
pub const CLOSE_TRANSITION_MS: u32 = 400;

// ModalState
//
// Closed -> Open -> Closing -> Closed.  the Closing arm keeps the content
// around so the overlay can fade out with its fields still populated; the
// caller schedules finish_close() after CLOSE_TRANSITION_MS.  reopening
// while a close is pending wins: finish_close() only fires from Closing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModalState<T> {
    #[default]
    Closed,
    Open(T),
    Closing(T),
}

impl<T> ModalState<T> {
    pub fn open(&mut self, content: T) {
        *self = ModalState::Open(content);
    }

    /// Start the closing transition.  Returns false unless the modal was
    /// actually open, so callers don't schedule a stray hide.
    pub fn begin_close(&mut self) -> bool {
        match std::mem::replace(self, ModalState::Closed) {
            ModalState::Open(content) => {
                *self = ModalState::Closing(content);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    pub fn finish_close(&mut self) {
        if matches!(self, ModalState::Closing(_)) {
            *self = ModalState::Closed;
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            ModalState::Open(content) | ModalState::Closing(content) => Some(content),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_lifecycle() {
        let mut state = ModalState::Closed;
        assert!(state.is_hidden());

        state.open("safari");
        assert!(state.is_open());
        assert_eq!(state.content(), Some(&"safari"));

        assert!(state.begin_close());
        assert!(!state.is_open());
        // content stays renderable during the fade
        assert_eq!(state.content(), Some(&"safari"));

        state.finish_close();
        assert!(state.is_hidden());
        assert_eq!(state.content(), None);
    }

    #[test]
    fn begin_close_is_a_no_op_unless_open() {
        let mut state: ModalState<&str> = ModalState::Closed;
        assert!(!state.begin_close());

        state.open("safari");
        state.begin_close();
        assert!(!state.begin_close());
        assert_eq!(state.content(), Some(&"safari"));
    }

    #[test]
    fn reopening_during_the_fade_survives_the_pending_hide() {
        let mut state = ModalState::Closed;

        state.open("safari");
        state.begin_close();
        state.open("trek");

        // the hide scheduled by the first close arrives late
        state.finish_close();

        assert!(state.is_open());
        assert_eq!(state.content(), Some(&"trek"));
    }
}
