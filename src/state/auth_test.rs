use super::*;

#[test]
fn default_state_has_no_user_and_is_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn bootstrapping_state_is_loading() {
    let state = AuthState::bootstrapping();
    assert!(state.user.is_none());
    assert!(state.loading);
}
