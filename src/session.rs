/// Process-lifetime record of who is signed in. Never persisted; a restart
/// always comes back `LoggedOut`.
///
/// Earlier releases kept a raw store id with `-1` (and in one spot `0`)
/// standing for "nobody"; both sentinels collapse into `LoggedOut` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(u64),
}

impl Session {
    pub fn log_in(&mut self, user_id: u64) {
        *self = Session::LoggedIn(user_id);
    }

    pub fn log_out(&mut self) {
        *self = Session::LoggedOut;
    }

    pub fn user_id(&self) -> Option<u64> {
        match self {
            Session::LoggedIn(user_id) => Some(*user_id),
            Session::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut session = Session::default();
        session.log_in(7);
        assert!(session.is_logged_in());
        assert_eq!(session.user_id(), Some(7));

        session.log_out();
        assert_eq!(session, Session::LoggedOut);
        assert_eq!(session.user_id(), None);
    }
}
