/// Whether the mobile navigation overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobileMenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that move the overlay between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileMenuEvent {
    /// Hamburger button in the mobile header.
    Open,
    /// Close button inside the overlay.
    Close,
    /// A navigation entry inside the overlay was activated.
    Navigate,
}

impl MobileMenuState {
    pub fn apply(self, event: MobileMenuEvent) -> Self {
        match event {
            MobileMenuEvent::Open => MobileMenuState::Open,
            MobileMenuEvent::Close | MobileMenuEvent::Navigate => MobileMenuState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MobileMenuState::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MobileMenuState::default(), MobileMenuState::Closed);
        assert!(!MobileMenuState::default().is_open());
    }

    #[test]
    fn open_from_any_state_opens() {
        assert_eq!(MobileMenuState::Closed.apply(MobileMenuEvent::Open), MobileMenuState::Open);
        assert_eq!(MobileMenuState::Open.apply(MobileMenuEvent::Open), MobileMenuState::Open);
    }

    #[test]
    fn navigating_closes_overlay() {
        assert_eq!(
            MobileMenuState::Open.apply(MobileMenuEvent::Navigate),
            MobileMenuState::Closed
        );
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let once = MobileMenuState::Open.apply(MobileMenuEvent::Close);
        let twice = once.apply(MobileMenuEvent::Close);
        assert_eq!(once, MobileMenuState::Closed);
        assert_eq!(twice, once);
    }
}
