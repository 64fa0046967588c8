//! Stagiaire pages: application tracker and profile with CV upload.

#[cfg(test)]
#[path = "stagiaire_test.rs"]
mod stagiaire_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::api_url;
use crate::net::api::ApiClient;
use crate::net::types::{Application, ApplicationStatus, User};
use crate::state::session::SessionContext;

pub(crate) fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "Under review",
        ApplicationStatus::Accepted => "Accepted",
        ApplicationStatus::Rejected => "Not selected",
    }
}

pub(crate) fn status_class(status: ApplicationStatus) -> String {
    format!("status-badge status-badge--{}", status.as_str())
}

/// Absolute download link for a stored CV path such as `/uploads/cv_3_me.pdf`.
pub(crate) fn cv_download_url(user: &User) -> Option<String> {
    user.cv_url.as_deref().filter(|p| !p.is_empty()).map(api_url)
}

/// Initial shown in the profile avatar.
pub(crate) fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_owned())
}

fn application_row(app: Application) -> impl IntoView {
    let (title, company) = app
        .offer
        .map(|o| (o.title, o.company_name.unwrap_or_default()))
        .unwrap_or_else(|| (format!("Offer #{}", app.offer_id), String::new()));
    let href = format!("/offers/{}", app.offer_id);
    view! {
        <li class="application-row">
            <div>
                <A href=href attr:class="application-row__title">{title}</A>
                <p class="application-row__company">{company}</p>
            </div>
            <span class=status_class(app.status)>{status_label(app.status)}</span>
        </li>
    }
}

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let applications = LocalResource::new(move || async move { api.my_applications().await });

    view! {
        <div class="hub-page">
            <h1>"My applications"</h1>
            <Suspense fallback=move || view! { <p>"Loading applications..."</p> }>
                {move || {
                    applications
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => view! {
                                <p class="hub-page__empty">
                                    "No applications yet. " <A href="/">"Browse offers"</A>
                                </p>
                            }
                            .into_any(),
                            Ok(list) => view! {
                                <ul class="application-list">
                                    {list.into_iter().map(application_row).collect_view()}
                                </ul>
                            }
                            .into_any(),
                            Err(e) => view! { <p class="error-banner">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let uploading = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    let on_file = move |ev: leptos::ev::Event| {
        if uploading.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            let Some(token) = session.token() else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match api.upload_cv(&file).await {
                    Ok(resp) => {
                        session.set_cv_url(&token, resp.cv_url);
                        // Pick up anything else the backend changed on the user record.
                        if let Err(e) = session.refresh_user(&api).await {
                            leptos::logging::warn!("profile refresh after CV upload failed: {e}");
                        }
                        notice.set("CV uploaded.".to_owned());
                    }
                    Err(e) => notice.set(e.user_message()),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, api);
        }
    };

    let profile = move || {
        session.user().map(|user| {
            let cv_link = cv_download_url(&user);
            let has_cv = cv_link.is_some();
            view! {
                <div class="profile-card">
                    <div class="profile-card__avatar">{avatar_initial(&user.name)}</div>
                    <h1>{user.name.clone()}</h1>
                    <p class="profile-card__role">{format!("{} account", user.role)}</p>
                    <dl class="profile-card__details">
                        <dt>"Email"</dt>
                        <dd>{user.email.clone()}</dd>
                    </dl>
                    <label class="cv-upload" class:cv-upload--done=has_cv>
                        <span>
                            {move || {
                                if uploading.get() {
                                    "Uploading..."
                                } else if has_cv {
                                    "Replace your CV"
                                } else {
                                    "Upload your latest CV"
                                }
                            }}
                        </span>
                        <input
                            type="file"
                            accept=".pdf,.doc,.docx"
                            on:change=on_file
                            disabled=move || uploading.get()
                        />
                    </label>
                    {cv_link.map(|href| view! {
                        <a class="cv-link" href=href target="_blank" rel="noopener">"View current CV"</a>
                    })}
                </div>
            }
        })
    };

    view! {
        <div class="profile-page">
            {profile}
            <Show when=move || !notice.get().is_empty()>
                <p class="profile-page__notice">{move || notice.get()}</p>
            </Show>
        </div>
    }
}
