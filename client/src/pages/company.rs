//! Company dashboard at `/company/dashboard`: own offers, a quick offer form,
//! and the applicant review queue.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{Application, ApplicationStatus, Offer, OfferInput};
use crate::pages::stagiaire::{status_class, status_label};

/// Header counters for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct CompanyStats {
    pub active_offers: usize,
    pub applicants: usize,
    pub pending_review: usize,
}

pub(crate) fn company_stats(offers: &[Offer], applications: &[Application]) -> CompanyStats {
    CompanyStats {
        active_offers: offers.len(),
        applicants: applications.len(),
        pending_review: applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .count(),
    }
}

/// Review transitions available for an application; only pending ones can move.
pub(crate) fn review_actions(status: ApplicationStatus) -> &'static [ApplicationStatus] {
    match status {
        ApplicationStatus::Pending => &[ApplicationStatus::Accepted, ApplicationStatus::Rejected],
        ApplicationStatus::Accepted | ApplicationStatus::Rejected => &[],
    }
}

/// One feature per line; blank lines dropped.
pub(crate) fn parse_features(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect()
}

pub(crate) fn validate_offer_input(mut input: OfferInput) -> Result<OfferInput, &'static str> {
    for field in [
        &mut input.title,
        &mut input.description,
        &mut input.category,
        &mut input.duration,
        &mut input.location,
        &mut input.price,
    ] {
        *field = field.trim().to_owned();
    }
    if input.title.is_empty() || input.description.is_empty() || input.category.is_empty() {
        return Err("Title, description and category are required.");
    }
    Ok(input)
}

#[component]
pub fn CompanyDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let offers = LocalResource::new(move || async move { api.company_offers().await });
    let applications = LocalResource::new(move || async move { api.company_applications().await });
    let notice = RwSignal::new(String::new());

    let stats = move || {
        let offers = offers.get().and_then(Result::ok).unwrap_or_default();
        let apps = applications.get().and_then(Result::ok).unwrap_or_default();
        company_stats(&offers, &apps)
    };

    let delete_offer = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.delete_offer(id).await {
                Ok(()) => {
                    notice.set("Offer removed.".to_owned());
                    offers.refetch();
                }
                Err(e) => notice.set(e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let review = move |id: i64, status: ApplicationStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.update_application_status(id, status).await {
                Ok(_) => {
                    notice.set(format!("Candidate {}.", status.as_str()));
                    applications.refetch();
                }
                Err(e) => notice.set(e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, status);
    };

    view! {
        <div class="company-page">
            <header class="company-page__header">
                <h1>"Enterprise dashboard"</h1>
                <div class="stat-row">
                    <div class="stat">{move || stats().active_offers}<span>"Active offers"</span></div>
                    <div class="stat">{move || stats().applicants}<span>"Applicants"</span></div>
                    <div class="stat">{move || stats().pending_review}<span>"Pending review"</span></div>
                </div>
            </header>
            <Show when=move || !notice.get().is_empty()>
                <p class="company-page__notice">{move || notice.get()}</p>
            </Show>

            <NewOfferForm on_created=Callback::new(move |()| offers.refetch()) notice=notice/>

            <section class="company-page__offers">
                <h2>"Your offers"</h2>
                <Suspense fallback=move || view! { <p>"Loading offers..."</p> }>
                    {move || {
                        offers
                            .get()
                            .map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|offer| {
                                        let id = offer.id;
                                        view! {
                                            <div class="offer-row">
                                                <span class="offer-row__title">{offer.title}</span>
                                                <span class="offer-row__meta">{offer.location}</span>
                                                <button class="btn btn--danger" on:click=move |_| delete_offer(id)>
                                                    "Delete"
                                                </button>
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

            <section class="company-page__applicants">
                <h2>"Applicants"</h2>
                <Suspense fallback=move || view! { <p>"Loading applicants..."</p> }>
                    {move || {
                        applications
                            .get()
                            .map(|result| match result {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|app| {
                                        let id = app.id;
                                        let who = app.stagiaire.map(|u| u.name).unwrap_or_default();
                                        let title = app.offer.map(|o| o.title).unwrap_or_default();
                                        let actions = review_actions(app.status)
                                            .iter()
                                            .map(|&next| {
                                                let label = if next == ApplicationStatus::Accepted { "Accept" } else { "Reject" };
                                                view! {
                                                    <button class="btn btn--ghost" on:click=move |_| review(id, next)>
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect_view();
                                        view! {
                                            <div class="applicant-row">
                                                <span class="applicant-row__name">{who}</span>
                                                <span class="applicant-row__offer">{title}</span>
                                                <span class=status_class(app.status)>{status_label(app.status)}</span>
                                                {actions}
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

#[component]
fn NewOfferForm(on_created: Callback<()>, notice: RwSignal<String>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let draft = RwSignal::new(OfferInput::default());
    let features = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut input = draft.get();
        input.features = parse_features(&features.get());
        let input = match validate_offer_input(input) {
            Ok(input) => input,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.create_offer(&input).await {
                Ok(offer) => {
                    notice.set(format!("Published \"{}\".", offer.title));
                    draft.set(OfferInput::default());
                    features.set(String::new());
                    on_created.run(());
                }
                Err(e) => notice.set(e.user_message()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, api, on_created);
        }
    };

    let field = move |placeholder: &'static str, get: fn(&OfferInput) -> String, set: fn(&mut OfferInput, String)| {
        view! {
            <input
                class="offer-form__input"
                type="text"
                placeholder=placeholder
                prop:value=move || draft.with(get)
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        }
    };

    view! {
        <form class="offer-form" on:submit=on_submit>
            <h2>"New offer"</h2>
            {field("Title", |d| d.title.clone(), |d, v| d.title = v)}
            {field("Category", |d| d.category.clone(), |d, v| d.category = v)}
            {field("Location", |d| d.location.clone(), |d, v| d.location = v)}
            {field("Duration", |d| d.duration.clone(), |d, v| d.duration = v)}
            {field("Stipend", |d| d.price.clone(), |d, v| d.price = v)}
            <textarea
                class="offer-form__input"
                placeholder="Description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
            <textarea
                class="offer-form__input"
                placeholder="Perks, one per line"
                prop:value=move || features.get()
                on:input=move |ev| features.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit">"Publish"</button>
        </form>
    }
}
