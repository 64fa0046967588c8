use super::*;
use crate::config::api_base_url;
use crate::net::types::Role;

fn user_with_cv(cv_url: Option<&str>) -> User {
    User {
        id: 3,
        name: "amira".to_owned(),
        email: "amira@example.tn".to_owned(),
        role: Role::Stagiaire,
        cv_url: cv_url.map(str::to_owned),
        created_at: None,
    }
}

#[test]
fn cv_download_url_joins_backend_base() {
    let url = cv_download_url(&user_with_cv(Some("/uploads/cv_3_me.pdf")));
    assert_eq!(url, Some(format!("{}/uploads/cv_3_me.pdf", api_base_url())));
}

#[test]
fn cv_download_url_is_none_without_cv() {
    assert_eq!(cv_download_url(&user_with_cv(None)), None);
    assert_eq!(cv_download_url(&user_with_cv(Some(""))), None);
}

#[test]
fn status_labels_and_classes() {
    assert_eq!(status_label(ApplicationStatus::Pending), "Under review");
    assert_eq!(status_label(ApplicationStatus::Rejected), "Not selected");
    assert_eq!(status_class(ApplicationStatus::Accepted), "status-badge status-badge--accepted");
}

#[test]
fn avatar_initial_uppercases_first_char() {
    assert_eq!(avatar_initial("  amira"), "A");
    assert_eq!(avatar_initial(""), "?");
}
