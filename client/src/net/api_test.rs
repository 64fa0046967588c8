use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::util::storage::MemoryStorage;

fn client() -> ApiClient {
    ApiClient::new(SessionContext::with_storage(MemoryStorage::new()))
}

#[test]
fn offer_endpoint_formats_expected_path() {
    assert_eq!(offer_endpoint(12), "/offers/12");
}

#[test]
fn application_endpoint_formats_expected_path() {
    assert_eq!(application_endpoint(3), "/applications/3");
}

#[test]
fn admin_user_endpoint_formats_expected_path() {
    assert_eq!(admin_user_endpoint(99), "/admin/users/99");
}

#[test]
fn payload_json_serializes_status_update() {
    let Ok(Payload::Json(value)) = Payload::json(&StatusUpdate { status: ApplicationStatus::Rejected }) else {
        panic!("expected json payload");
    };
    assert_eq!(value, serde_json::json!({ "status": "rejected" }));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    let owner = Owner::new();
    owner.set();
    let api = client();

    assert_eq!(block_on(api.list_offers(&OfferQuery::default())), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.delete_user(1)), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.current_user()), Err(ApiError::Unavailable));
    assert_eq!(
        block_on(api.login(&Credentials { username: "a@b.c".to_owned(), password: "pw".to_owned() })),
        Err(ApiError::Unavailable)
    );
}
