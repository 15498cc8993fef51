use crate::{Activity, ErrorDetail, MessageResponse};

impl Activity {
    #[must_use]
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of participants that can still sign up.
    #[must_use]
    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

impl From<&str> for ErrorDetail {
    fn from(detail: &str) -> Self {
        Self {
            detail: detail.to_string(),
        }
    }
}

impl From<String> for MessageResponse {
    fn from(message: String) -> Self {
        Self { message }
    }
}
