//! Combined login / registration page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::AuroraApi;
use crate::auth::{self, use_auth};
use crate::notify::use_notify;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

const MIN_PASSWORD_CHARS: usize = 6;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_auth();
    let notify = use_notify();
    let navigate = use_navigate();

    let (tab, set_tab) = signal(Tab::Login);
    let (login_username, set_login_username) = signal(String::new());
    let (login_password, set_login_password) = signal(String::new());
    let (reg_username, set_reg_username) = signal(String::new());
    let (reg_password, set_reg_password) = signal(String::new());
    // One submission at a time, shared by both forms.
    let (loading, set_loading) = signal(false);

    let on_login = {
        let navigate = navigate.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let username = login_username.get();
            let password = login_password.get();
            if username.is_empty() || password.is_empty() {
                notify.error("Preencha todos os campos");
                return;
            }
            set_loading.set(true);
            let navigate = navigate.clone();
            spawn_local(async move {
                match AuroraApi::default().login(&username, &password).await {
                    Ok(response) => {
                        // Keep the display name as typed; only the wire
                        // value was normalized.
                        auth::login(&ctx, response.access_token, username);
                        notify.success("Login realizado com sucesso!");
                        navigate("/dashboard", Default::default());
                    }
                    Err(e) => notify.error(e.to_string()),
                }
                set_loading.set(false);
            });
        }
    };

    let on_register = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = reg_username.get();
        let password = reg_password.get();
        if username.is_empty() || password.is_empty() {
            notify.error("Preencha todos os campos");
            return;
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            notify.error(format!(
                "A senha deve ter no mínimo {MIN_PASSWORD_CHARS} caracteres"
            ));
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            match AuroraApi::default().register(&username, &password).await {
                Ok(()) => {
                    notify.success("Conta criada! Faça login para continuar");
                    set_reg_username.set(String::new());
                    set_reg_password.set(String::new());
                }
                Err(e) => notify.error(e.to_string()),
            }
            set_loading.set(false);
        });
    };

    let back_home = move |_| navigate("/", Default::default());

    view! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="w-full max-w-md">
                <div class="text-center mb-8">
                    <span class="text-4xl font-bold text-primary">"Aurora"</span>
                </div>

                <div class="card shadow-lg bg-base-100">
                    <div class="card-body">
                        <div class="text-center mb-2">
                            <h1 class="text-3xl font-bold">"Bem-vindo de volta"</h1>
                            <p class="text-base-content/70 mt-1">
                                "Receba correções instantâneas e sugestões personalizadas"
                            </p>
                        </div>

                        <div role="tablist" class="tabs tabs-boxed mb-4">
                            <a
                                role="tab"
                                class=move || if tab.get() == Tab::Login { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_tab.set(Tab::Login)
                            >
                                "Entrar"
                            </a>
                            <a
                                role="tab"
                                class=move || if tab.get() == Tab::Register { "tab tab-active" } else { "tab" }
                                on:click=move |_| set_tab.set(Tab::Register)
                            >
                                "Criar conta"
                            </a>
                        </div>

                        <Show when=move || tab.get() == Tab::Login>
                            <form class="space-y-4" on:submit=on_login.clone()>
                                <div class="form-control">
                                    <label class="label" for="login-username">
                                        <span class="label-text">"Usuário"</span>
                                    </label>
                                    <input
                                        id="login-username"
                                        type="text"
                                        placeholder="seu_usuario"
                                        class="input input-bordered w-full"
                                        prop:value=login_username
                                        on:input=move |ev| set_login_username.set(event_target_value(&ev))
                                        disabled=move || loading.get()
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="login-password">
                                        <span class="label-text">"Senha"</span>
                                    </label>
                                    <input
                                        id="login-password"
                                        type="password"
                                        placeholder="••••••••"
                                        class="input input-bordered w-full"
                                        prop:value=login_password
                                        on:input=move |ev| set_login_password.set(event_target_value(&ev))
                                        disabled=move || loading.get()
                                    />
                                </div>
                                <button type="submit" class="btn btn-primary w-full" disabled=move || loading.get()>
                                    {move || if loading.get() {
                                        view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                    } else {
                                        "Entrar".into_any()
                                    }}
                                </button>
                            </form>
                        </Show>

                        <Show when=move || tab.get() == Tab::Register>
                            <form class="space-y-4" on:submit=on_register.clone()>
                                <div class="form-control">
                                    <label class="label" for="register-username">
                                        <span class="label-text">"Usuário"</span>
                                    </label>
                                    <input
                                        id="register-username"
                                        type="text"
                                        placeholder="escolha_um_usuario"
                                        class="input input-bordered w-full"
                                        prop:value=reg_username
                                        on:input=move |ev| set_reg_username.set(event_target_value(&ev))
                                        disabled=move || loading.get()
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="register-password">
                                        <span class="label-text">"Senha"</span>
                                    </label>
                                    <input
                                        id="register-password"
                                        type="password"
                                        placeholder="••••••••"
                                        class="input input-bordered w-full"
                                        prop:value=reg_password
                                        on:input=move |ev| set_reg_password.set(event_target_value(&ev))
                                        disabled=move || loading.get()
                                    />
                                    <span class="label-text-alt text-base-content/60 mt-1">
                                        {format!("Mínimo {MIN_PASSWORD_CHARS} caracteres")}
                                    </span>
                                </div>
                                <button type="submit" class="btn btn-primary w-full" disabled=move || loading.get()>
                                    {move || if loading.get() {
                                        view! { <span class="loading loading-spinner"></span> "Criando conta..." }.into_any()
                                    } else {
                                        "Criar conta".into_any()
                                    }}
                                </button>
                            </form>
                        </Show>
                    </div>
                </div>

                <div class="text-center mt-6">
                    <button class="btn btn-ghost text-base-content/70" on:click=back_home>
                        "← Voltar para início"
                    </button>
                </div>
            </div>
        </div>
    }
}
