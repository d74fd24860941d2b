//! Aurora frontend application.
//!
//! Layering:
//! - `storage`: persisted session store (browser LocalStorage)
//! - `auth`: session state shared across views via Context
//! - `api`: HTTP client for the remote scoring service
//! - `notify`: app-level toast notifications
//! - `components`: the three pages (landing, auth, dashboard)

pub mod api;
pub mod auth;
mod notify;
mod storage;

mod components {
    pub mod auth_page;
    pub mod dashboard;
    mod icons;
    pub mod landing;
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::auth::{AuthContext, init_auth};
use crate::components::auth_page::AuthPage;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::notify::{NotifyContext, ToastHost};

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    provide_context(NotifyContext::new());

    // LocalStorage is synchronous, so the session (if any) is restored
    // before the first render and no loading state is needed.
    init_auth(&auth_ctx);

    view! {
        // Outside the router, so toasts survive page changes.
        <ToastHost />
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
                <Route path=path!("/auth") view=AuthPage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Página não encontrada"</p>
            </div>
        </div>
    }
}
