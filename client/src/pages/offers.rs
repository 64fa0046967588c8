//! Public offer pages: the filterable listing at `/` and the detail view at
//! `/offers/:id`.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiClient;
use crate::net::types::{Offer, OfferQuery};
use crate::state::session::{SessionContext, SessionState};

/// Build a listing query from raw filter inputs; blank inputs are dropped.
pub(crate) fn query_from_filters(search: &str, category: &str, location: &str) -> OfferQuery {
    let keep = |raw: &str| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };
    OfferQuery { search: keep(search), category: keep(category), location: keep(location) }
}

pub(crate) fn parse_offer_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}

/// What the detail page offers the current visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ApplyAction {
    SignIn,
    Apply,
    /// Company and admin accounts cannot apply.
    Hidden,
}

pub(crate) fn apply_action(state: &SessionState) -> ApplyAction {
    if !state.is_authenticated() {
        ApplyAction::SignIn
    } else if state.is_stagiaire() {
        ApplyAction::Apply
    } else {
        ApplyAction::Hidden
    }
}

fn offer_card(offer: Offer) -> impl IntoView {
    let href = format!("/offers/{}", offer.id);
    let company = offer.company_name.unwrap_or_default();
    view! {
        <A href=href attr:class="offer-card">
            <span class="offer-card__category">{offer.category}</span>
            <h3 class="offer-card__title">{offer.title}</h3>
            <p class="offer-card__company">{company}</p>
            <div class="offer-card__meta">
                <span>{offer.location}</span>
                <span>{offer.duration}</span>
                <span>{offer.price}</span>
            </div>
        </A>
    }
}

/// Landing page: offer listing with search, category and location filters.
#[component]
pub fn OffersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let query = RwSignal::new(OfferQuery::default());

    let offers = LocalResource::new(move || {
        let q = query.get();
        async move { api.list_offers(&q).await }
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        query.set(query_from_filters(&search.get(), &category.get(), &location.get()));
    };

    view! {
        <div class="offers-page">
            <header class="offers-page__hero">
                <h1>"Find your internship in Tunisia"</h1>
                <form class="offers-page__filters" on:submit=on_filter>
                    <input
                        class="filter-input"
                        type="search"
                        placeholder="Keyword"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <input
                        class="filter-input"
                        type="text"
                        placeholder="Category"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <input
                        class="filter-input"
                        type="text"
                        placeholder="City"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">"Search"</button>
                </form>
            </header>

            <section class="offers-page__grid">
                <Suspense fallback=move || view! { <p class="offers-page__loading">"Loading offers..."</p> }>
                    {move || {
                        offers
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="offers-page__empty">"No offers match these filters."</p> }
                                        .into_any()
                                }
                                Ok(list) => list.into_iter().map(offer_card).collect_view().into_any(),
                                Err(e) => view! { <p class="error-banner">{e.user_message()}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

/// Detail view for one offer, with an apply button for stagiaires.
#[component]
pub fn OfferDetailsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<SessionContext>();
    let params = use_params_map();

    let offer_id = Memo::new(move |_| params.with(|p| parse_offer_id(p.get("id").as_deref())));
    let offer = LocalResource::new(move || {
        let id = offer_id.get();
        async move {
            match id {
                Some(id) => api.get_offer(id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let notice = RwSignal::new(String::new());
    let applying = RwSignal::new(false);
    let action = Memo::new(move |_| session.state().with(apply_action));

    let on_apply = move |_| {
        let Some(id) = offer_id.get() else {
            return;
        };
        if applying.get() {
            return;
        }
        applying.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.apply(id).await {
                Ok(_) => notice.set("Application sent. Track it from My Hub.".to_owned()),
                Err(e) => notice.set(e.user_message()),
            }
            applying.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            applying.set(false);
        }
    };

    let apply_block = move || match action.get() {
        ApplyAction::SignIn => view! {
            <A href="/login" attr:class="btn btn--primary">"Sign in to apply"</A>
        }
        .into_any(),
        ApplyAction::Apply => view! {
            <button class="btn btn--primary" on:click=on_apply disabled=move || applying.get()>
                "Apply now"
            </button>
        }
        .into_any(),
        ApplyAction::Hidden => ().into_any(),
    };

    view! {
        <div class="offer-details">
            <A href="/" attr:class="offer-details__back">"Back to offers"</A>
            <Suspense fallback=move || view! { <p>"Loading offer..."</p> }>
                {move || {
                    offer
                        .get()
                        .map(|result| match result {
                            Ok(Some(o)) => view! {
                                <article class="offer-details__card">
                                    <span class="offer-card__category">{o.category}</span>
                                    <h1>{o.title}</h1>
                                    <p class="offer-card__company">{o.company_name.unwrap_or_default()}</p>
                                    <div class="offer-card__meta">
                                        <span>{o.location}</span>
                                        <span>{o.duration}</span>
                                        <span>{o.price}</span>
                                    </div>
                                    <p class="offer-details__description">{o.description}</p>
                                    <ul class="offer-details__features">
                                        {o.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                            .into_any(),
                            Ok(None) => view! { <p class="error-banner">"Offer not found."</p> }.into_any(),
                            Err(e) => view! { <p class="error-banner">{e.user_message()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <div class="offer-details__actions">
                {apply_block}
                <Show when=move || !notice.get().is_empty()>
                    <p class="offer-details__notice">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
