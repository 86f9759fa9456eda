/// How long the shipped gateway pretends the network takes.
pub const SIMULATED_LATENCY_MS: u32 = 1_000;

/// How long the success status stays up before it is hidden again.
pub const STATUS_VISIBLE_MS: u32 = 5_000;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you shortly.";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

// one submission moves Idle -> Sending -> Sent -> Idle; the last edge is
// driven by the status-hide delay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitState {
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitState::Sending => "Sending...",
            SubmitState::Idle | SubmitState::Sent => "Send Message",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitState::Sending)
    }

    pub fn status_visible(&self) -> bool {
        matches!(self, SubmitState::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_visibility_track_the_state() {
        assert_eq!(SubmitState::Idle.button_label(), "Send Message");
        assert_eq!(SubmitState::Sending.button_label(), "Sending...");
        assert_eq!(SubmitState::Sent.button_label(), "Send Message");

        assert!(SubmitState::Sending.is_sending());
        assert!(!SubmitState::Sent.is_sending());

        assert!(SubmitState::Sent.status_visible());
        assert!(!SubmitState::Idle.status_visible());
        assert!(!SubmitState::Sending.status_visible());
    }
}
