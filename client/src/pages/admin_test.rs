use super::*;

fn user(id: i64, role: Role) -> User {
    User {
        id,
        name: format!("user{id}"),
        email: format!("user{id}@example.tn"),
        role,
        cv_url: None,
        created_at: None,
    }
}

#[test]
fn stat_tiles_follow_fixed_order() {
    let stats = AdminStats {
        total_users: 10,
        total_offers: 4,
        total_applications: 7,
        total_companies: 3,
        total_stagiaires: 6,
    };
    let labels: Vec<_> = stat_tiles(&stats).iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Users", "Stagiaires", "Companies", "Offers", "Applications"]);
    assert_eq!(stat_tiles(&stats)[4], ("Applications", 7));
}

#[test]
fn can_delete_protects_admins_and_self() {
    assert!(can_delete(&user(2, Role::Stagiaire), Some(1)));
    assert!(can_delete(&user(3, Role::Company), None));
    assert!(!can_delete(&user(4, Role::Admin), Some(1)));
    assert!(!can_delete(&user(1, Role::Company), Some(1)));
}
