//! Email + password sign-in form bound to the provided session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::error::AuthError;
use crate::state::session::SessionManager;
use crate::util::context::use_session;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_outcome_message(result: &Result<bool, AuthError>) -> String {
    match result {
        Ok(true) => String::new(),
        Ok(false) => "Invalid email or password.".to_owned(),
        Err(AuthError::Status { status: 400 | 401 }) => "Invalid email or password.".to_owned(),
        Err(e) => format!("Sign-in failed: {e}"),
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.as_ref().map_or_else(|| Signal::stored(false), |s| s.is_authenticated());
    let current = session.as_ref().map(SessionManager::session);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let login_session = session.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(session) = login_session.clone() else {
            info.set("Session unavailable.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = session.login(&email_value, &password_value).await;
            if matches!(result, Ok(true)) {
                password.set(String::new());
            }
            info.set(login_outcome_message(&result));
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, email_value, password_value);
            busy.set(false);
        }
    };

    let logout_session = session;
    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        let Some(session) = logout_session.clone() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            session.logout().await;
            info.set(String::new());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    };

    view! {
        <div class="login-card">
            <Show when=move || !is_authenticated.get()>
                <form class="login-form" on:submit=on_submit.clone()>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
            </Show>
            <Show when=move || is_authenticated.get()>
                <p class="login-message">
                    "Signed in as "
                    <span>{move || current.and_then(|s| s.get().email).unwrap_or_default()}</span>
                </p>
                <button class="login-button" on:click=on_sign_out.clone()>
                    "Sign Out"
                </button>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="login-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
