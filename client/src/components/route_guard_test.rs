use super::*;
use crate::net::types::User;
use crate::state::session::Session;

fn logged_in(role: Role) -> SessionState {
    SessionState {
        session: Some(Session {
            token: "tok".to_owned(),
            user: User {
                id: 1,
                name: "Sami".to_owned(),
                email: "sami@example.tn".to_owned(),
                role,
                cv_url: None,
                created_at: None,
            },
        }),
        loading: false,
    }
}

fn logged_out() -> SessionState {
    SessionState { session: None, loading: false }
}

const ALL_ROLES: [Role; 3] = [Role::Stagiaire, Role::Company, Role::Admin];

// =============================================================
// Pending
// =============================================================

#[test]
fn loading_session_is_pending_without_redirect() {
    let state = SessionState::default();
    assert_eq!(evaluate(&state, &[]), GuardDecision::Pending);
    assert_eq!(evaluate(&state, &[Role::Admin]), GuardDecision::Pending);
    assert_eq!(GuardDecision::Pending.redirect_target(), None);
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn logged_out_redirects_to_login() {
    assert_eq!(evaluate(&logged_out(), &[]), GuardDecision::Unauthenticated);
    assert_eq!(evaluate(&logged_out(), &[Role::Admin]), GuardDecision::Unauthenticated);
    assert_eq!(GuardDecision::Unauthenticated.redirect_target(), Some("/login"));
}

// =============================================================
// Forbidden / Authorized
// =============================================================

#[test]
fn empty_allowed_list_admits_every_role() {
    for role in ALL_ROLES {
        assert_eq!(evaluate(&logged_in(role), &[]), GuardDecision::Authorized, "{role}");
    }
}

#[test]
fn admin_only_route_sends_company_home_not_to_login() {
    let decision = evaluate(&logged_in(Role::Company), &[Role::Admin]);
    assert_eq!(decision, GuardDecision::Forbidden);
    assert_eq!(decision.redirect_target(), Some("/"));
}

#[test]
fn stagiaire_routes_admit_stagiaire_and_admin_only() {
    let allowed = [Role::Stagiaire, Role::Admin];
    assert_eq!(evaluate(&logged_in(Role::Stagiaire), &allowed), GuardDecision::Authorized);
    assert_eq!(evaluate(&logged_in(Role::Admin), &allowed), GuardDecision::Authorized);
    assert_eq!(evaluate(&logged_in(Role::Company), &allowed), GuardDecision::Forbidden);
}

#[test]
fn company_routes_admit_company_and_admin_only() {
    let allowed = [Role::Company, Role::Admin];
    assert_eq!(evaluate(&logged_in(Role::Company), &allowed), GuardDecision::Authorized);
    assert_eq!(evaluate(&logged_in(Role::Admin), &allowed), GuardDecision::Authorized);
    assert_eq!(evaluate(&logged_in(Role::Stagiaire), &allowed), GuardDecision::Forbidden);
}

#[test]
fn authorized_has_no_redirect() {
    assert_eq!(GuardDecision::Authorized.redirect_target(), None);
}

// =============================================================
// Re-evaluation
// =============================================================

#[test]
fn logout_while_viewing_protected_page_flips_to_login() {
    let mut state = logged_in(Role::Admin);
    assert_eq!(evaluate(&state, &[Role::Admin]), GuardDecision::Authorized);

    state.session = None;

    assert_eq!(evaluate(&state, &[Role::Admin]), GuardDecision::Unauthenticated);
}
