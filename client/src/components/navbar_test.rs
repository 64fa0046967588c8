use super::*;
use crate::net::types::{Role, User};
use crate::state::session::Session;

fn state_for(role: Option<Role>) -> SessionState {
    SessionState {
        session: role.map(|role| Session {
            token: "tok".to_owned(),
            user: User {
                id: 1,
                name: "Nour".to_owned(),
                email: "nour@example.tn".to_owned(),
                role,
                cv_url: None,
                created_at: None,
            },
        }),
        loading: false,
    }
}

fn labels(state: &SessionState) -> Vec<&'static str> {
    nav_links(state).into_iter().map(|l| l.label).collect()
}

#[test]
fn logged_out_sees_discover_only() {
    assert_eq!(labels(&state_for(None)), vec!["Discover"]);
}

#[test]
fn stagiaire_sees_hub() {
    assert_eq!(labels(&state_for(Some(Role::Stagiaire))), vec!["Discover", "My Hub"]);
}

#[test]
fn company_sees_enterprise() {
    assert_eq!(labels(&state_for(Some(Role::Company))), vec!["Discover", "Enterprise"]);
}

#[test]
fn admin_sees_console() {
    let links = nav_links(&state_for(Some(Role::Admin)));
    assert_eq!(links.last(), Some(&NavLink { label: "Console", path: "/admin/dashboard" }));
    assert_eq!(links.len(), 2);
}

#[test]
fn profile_link_for_roles_admitted_to_profile_page() {
    let profile = Some(NavLink { label: "Profile", path: "/profile" });
    assert_eq!(profile_link(&state_for(Some(Role::Stagiaire))), profile);
    assert_eq!(profile_link(&state_for(Some(Role::Admin))), profile);
    assert_eq!(profile_link(&state_for(Some(Role::Company))), None);
    assert_eq!(profile_link(&state_for(None)), None);
}
