use super::*;
use crate::net::types::{Role, User};
use crate::state::session::Session;

fn state_for(role: Option<Role>) -> SessionState {
    SessionState {
        session: role.map(|role| Session {
            token: "t".to_owned(),
            user: User {
                id: 1,
                name: "Test".to_owned(),
                email: "test@example.tn".to_owned(),
                role,
                cv_url: None,
                created_at: None,
            },
        }),
        loading: false,
    }
}

#[test]
fn query_from_filters_drops_blank_inputs() {
    let query = query_from_filters("  rust ", "", "   ");
    assert_eq!(query.search.as_deref(), Some("rust"));
    assert_eq!(query.category, None);
    assert_eq!(query.location, None);
}

#[test]
fn query_from_filters_keeps_all_filled_inputs() {
    let query = query_from_filters("web", "IT", "Sfax");
    assert_eq!(query.pairs(), vec![("search", "web"), ("category", "IT"), ("location", "Sfax")]);
}

#[test]
fn parse_offer_id_accepts_positive_integers_only() {
    assert_eq!(parse_offer_id(Some("42")), Some(42));
    assert_eq!(parse_offer_id(Some(" 7 ")), Some(7));
    assert_eq!(parse_offer_id(Some("0")), None);
    assert_eq!(parse_offer_id(Some("-3")), None);
    assert_eq!(parse_offer_id(Some("abc")), None);
    assert_eq!(parse_offer_id(None), None);
}

#[test]
fn apply_action_depends_on_role() {
    assert_eq!(apply_action(&state_for(None)), ApplyAction::SignIn);
    assert_eq!(apply_action(&state_for(Some(Role::Stagiaire))), ApplyAction::Apply);
    assert_eq!(apply_action(&state_for(Some(Role::Company))), ApplyAction::Hidden);
    assert_eq!(apply_action(&state_for(Some(Role::Admin))), ApplyAction::Hidden);
}
