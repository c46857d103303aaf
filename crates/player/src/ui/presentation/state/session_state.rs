//! Session state using Dioxus signals
//!
//! Holds who is using the client and who they can play with. Seeded once from
//! the [`SessionProfile`] the runner provides.

use dioxus::prelude::*;

use parlor_domain::User;

/// Plain session data handed over by the composition root.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProfile {
    pub user: User,
    /// Every known user, the current one included
    pub users: Vec<User>,
}

impl SessionProfile {
    /// The current user is added to `users` when missing.
    pub fn new(user: User, mut users: Vec<User>) -> Self {
        if !users.iter().any(|u| u.id == user.id) {
            users.insert(0, user.clone());
        }
        Self { user, users }
    }
}

#[derive(Clone, Copy)]
pub struct SessionState {
    pub user: Signal<User>,
    pub users: Signal<Vec<User>>,
}

impl SessionState {
    /// Must be called inside an active Dioxus runtime.
    pub fn from_profile(profile: &SessionProfile) -> Self {
        Self {
            user: Signal::new(profile.user.clone()),
            users: Signal::new(profile.users.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_domain::UserId;

    #[test]
    fn current_user_is_always_among_users() {
        let ann = User::new(UserId::new(1), "Ann");
        let profile = SessionProfile::new(ann.clone(), vec![User::new(UserId::new(2), "Bo")]);
        assert_eq!(profile.users.first(), Some(&ann));
        assert_eq!(profile.users.len(), 2);

        let again = SessionProfile::new(ann.clone(), profile.users.clone());
        assert_eq!(again.users.len(), 2);
    }
}
