//! Account creation page for stagiaires and companies.
//!
//! Registration never signs the user in; on success the page sends them to
//! `/login`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, Role};
#[cfg(feature = "hydrate")]
use crate::state::session::SessionContext;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in name, email and password.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if role == Role::Admin {
        return Err("Choose either the stagiaire or the company account type.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionContext>();
    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::ApiClient>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Stagiaire);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&name.get(), &email.get(), &password.get(), role.get()) {
            Ok(r) => r,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = session.register(&api, &request).await;
                busy.set(false);
                match outcome.message() {
                    None => navigate("/login", leptos_router::NavigateOptions::default()),
                    Some(message) => info.set(message.to_owned()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let role_button = move |value: Role, label: &'static str| {
        view! {
            <button
                type="button"
                class="role-option"
                class:role-option--active=move || role.get() == value
                on:click=move |_| role.set(value)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="role-picker">
                        {role_button(Role::Stagiaire, "I'm a student")}
                        {role_button(Role::Company, "I'm a company")}
                    </div>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name or company name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
