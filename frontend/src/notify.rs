//! App-level transient notifications.
//!
//! A single (message, is_error) slot provided at the App root and
//! rendered by [`ToastHost`] above the router, so a toast raised just
//! before a navigation survives the page unmount.

use leptos::prelude::*;

/// Read/write handles to the current toast, shared through Context.
#[derive(Clone, Copy)]
pub struct NotifyContext {
    pub state: ReadSignal<Option<(String, bool)>>,
    pub set_state: WriteSignal<Option<(String, bool)>>,
}

impl NotifyContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(None);
        Self { state, set_state }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.set_state.set(Some((message.into(), false)));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.set_state.set(Some((message.into(), true)));
    }
}

impl Default for NotifyContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the notification context from the surrounding provider.
///
/// Calling this outside the provider's scope is a programming error and
/// aborts with a diagnostic rather than silently defaulting.
pub fn use_notify() -> NotifyContext {
    use_context::<NotifyContext>().expect("NotifyContext should be provided at the App root")
}

/// Renders the current toast and dismisses it after 3 seconds.
/// Mounted once at the App root, outside the router.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_notify();
    let state = notify.state;
    let set_state = notify.set_state;

    Effect::new(move |_| {
        if state.get().is_some() {
            set_timeout(
                move || set_state.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || state.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = state.get().unwrap();
                    if is_err { "alert alert-error shadow-lg" } else { "alert alert-success shadow-lg" }
                }>
                    <span>{move || state.get().unwrap().0}</span>
                </div>
            </div>
        </Show>
    }
}
