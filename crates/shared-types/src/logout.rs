/// Progress of a sign-out request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutState {
    #[default]
    Idle,
    Pending,
}

impl LogoutState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LogoutState::Pending)
    }

    /// Move to `Pending`. Returns `false` when a request is already in
    /// flight, in which case the caller must not start another one.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = LogoutState::Pending;
        true
    }

    /// Back to `Idle`, whatever the outcome of the request.
    pub fn settle(&mut self) {
        *self = LogoutState::Idle;
    }
}
