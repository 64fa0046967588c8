//! Admin console at `/admin/dashboard`: platform counters, user management,
//! and the global application feed.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{AdminStats, Role, User};
use crate::pages::stagiaire::{status_class, status_label};
use crate::state::session::SessionContext;

pub(crate) fn stat_tiles(stats: &AdminStats) -> [(&'static str, i64); 5] {
    [
        ("Users", stats.total_users),
        ("Stagiaires", stats.total_stagiaires),
        ("Companies", stats.total_companies),
        ("Offers", stats.total_offers),
        ("Applications", stats.total_applications),
    ]
}

/// Admins can delete any account except their own and other admins.
pub(crate) fn can_delete(target: &User, current_user_id: Option<i64>) -> bool {
    target.role != Role::Admin && Some(target.id) != current_user_id
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let stats = LocalResource::new(move || async move { api.admin_stats().await });
    let users = LocalResource::new(move || async move { api.admin_users().await });
    let applications = LocalResource::new(move || async move { api.admin_applications().await });
    let notice = RwSignal::new(String::new());

    let delete_user = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.delete_user(id).await {
                Ok(()) => {
                    notice.set("User deleted.".to_owned());
                    users.refetch();
                    stats.refetch();
                }
                Err(e) => notice.set(e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="admin-page">
            <h1>"Console"</h1>
            <Show when=move || !notice.get().is_empty()>
                <p class="admin-page__notice">{move || notice.get()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(s) => view! {
                                <div class="stat-row">
                                    {stat_tiles(&s)
                                        .into_iter()
                                        .map(|(label, value)| view! {
                                            <div class="stat">{value}<span>{label}</span></div>
                                        })
                                        .collect_view()}
                                </div>
                            }
                            .into_any(),
                            Err(e) => view! { <p class="error-banner">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>

            <section class="admin-page__users">
                <h2>"Users"</h2>
                <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                    {move || {
                        let me = session.user().map(|u| u.id);
                        users
                            .get()
                            .map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        let deletable = can_delete(&user, me);
                                        view! {
                                            <div class="user-row">
                                                <span class="user-row__name">{user.name}</span>
                                                <span class="user-row__email">{user.email}</span>
                                                <span class="user-row__role">{user.role.as_str()}</span>
                                                <Show when=move || deletable>
                                                    <button class="btn btn--danger" on:click=move |_| delete_user(id)>
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                                Err(e) => view! { <p class="error-banner">{e.user_message()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>

            <section class="admin-page__applications">
                <h2>"Applications"</h2>
                <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                    {move || {
                        applications
                            .get()
                            .map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|app| {
                                        let who = app.stagiaire.map(|u| u.name).unwrap_or_default();
                                        let title = app.offer.map(|o| o.title).unwrap_or_default();
                                        view! {
                                            <div class="applicant-row">
                                                <span class="applicant-row__name">{who}</span>
                                                <span class="applicant-row__offer">{title}</span>
                                                <span class=status_class(app.status)>{status_label(app.status)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                                Err(e) => view! { <p class="error-banner">{e.user_message()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
