//! Dashboard: essay submission, rubric results and submission history.
//!
//! Coordination rules:
//! - gated by the auth context; unauthenticated visitors are sent back
//!   to the auth page (one-way, no return path)
//! - at most one outstanding analysis request (`loading` flag)
//! - the post-submission history refresh runs only after the analysis
//!   response arrives, and its failure is non-fatal (logged, swallowed)
//! - the history list never shows the essay currently displayed as a
//!   fresh analysis

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use aurora_shared::date;
use aurora_shared::history::visible_history;
use aurora_shared::protocol::{AnalysisResponse, Essay};
use aurora_shared::rubric::RUBRIC;
use aurora_shared::text::{self, MIN_ESSAY_CHARS};

use crate::api::AuroraApi;
use crate::auth::{self, use_auth};
use crate::components::icons::{LogOut, Send, Star};
use crate::notify::use_notify;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_auth();
    let notify = use_notify();
    let navigate = use_navigate();

    let (essay_text, set_essay_text) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (analysis, set_analysis) = signal(Option::<AnalysisResponse>::None);
    let (essays, set_essays) = signal(Vec::<Essay>::new());

    // One-way gate: no session, no dashboard.
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if !ctx.state.get().is_authenticated() {
                navigate("/auth", Default::default());
            }
        }
    });

    // Initial history fetch. A failure leaves the list empty and the
    // submission flow usable.
    Effect::new(move |_| {
        let Some(token) = ctx.state.get().token() else {
            return;
        };
        spawn_local(async move {
            match AuroraApi::default().list_essays(&token).await {
                Ok(list) => set_essays.set(list),
                Err(e) => notify.error(e.to_string()),
            }
        });
    });

    let on_submit = move |_| {
        let current = essay_text.get_untracked();
        if let Err(e) = text::validate_submission(&current) {
            notify.error(e.to_string());
            return;
        }
        let Some(token) = ctx.state.get_untracked().token() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            let api = AuroraApi::default();
            match api.analyze_text(current.trim(), &token).await {
                Ok(result) => {
                    set_analysis.set(Some(result));
                    // Best-effort refresh, sequenced after the analysis;
                    // a stale history never blocks the fresh result.
                    match api.list_essays(&token).await {
                        Ok(list) => set_essays.set(list),
                        Err(e) => warn!("history refresh after submission failed: {e}"),
                    }
                    notify.success("Avaliação concluída! Veja os resultados abaixo");
                }
                Err(e) => notify.error(e.to_string()),
            }
            set_loading.set(false);
        });
    };

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            auth::logout(&ctx);
            notify.success("Até logo!");
            navigate("/", Default::default());
        }
    };

    let trimmed_count = move || essay_text.with(|t| text::trimmed_len(t));
    let can_submit = move || !loading.get() && trimmed_count() >= MIN_ESSAY_CHARS;
    let username = move || ctx.state.with(|s| s.username()).unwrap_or_default();

    view! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar border-b bg-base-100/80 backdrop-blur-sm sticky top-0 z-40 px-4">
                <div class="flex-1 gap-3">
                    <span class="text-2xl font-bold text-primary">"Aurora"</span>
                    <div class="hidden sm:block">
                        <p class="text-xs text-base-content/60">"Olá,"</p>
                        <p class="font-semibold leading-tight">{username}</p>
                    </div>
                </div>
                <div class="flex-none">
                    <button class="btn btn-outline gap-2" on:click=on_logout>
                        <LogOut attr:class="w-4 h-4" />
                        "Sair"
                    </button>
                </div>
            </header>

            <main class="container mx-auto px-4 py-8 max-w-6xl">
                <div class="card bg-base-100 shadow-lg mb-8">
                    <div class="card-body">
                        <h2 class="card-title text-3xl">"Envie sua redação"</h2>
                        <p class="text-base-content/70">
                            "Escreva ou cole seu texto abaixo. Aurora irá avaliar todas as competências do ENEM."
                        </p>
                        <textarea
                            class="textarea textarea-bordered min-h-[300px] text-base leading-relaxed resize-none mt-4"
                            placeholder="Cole sua redação aqui..."
                            prop:value=essay_text
                            on:input=move |ev| set_essay_text.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        ></textarea>
                        <div class="flex items-center justify-between text-sm mt-2">
                            <span class="text-base-content/60">
                                {format!("Mínimo {MIN_ESSAY_CHARS} caracteres")}
                            </span>
                            <span class=move || {
                                if trimmed_count() < MIN_ESSAY_CHARS { "text-error" } else { "text-success" }
                            }>
                                {move || format!("{}/{}", trimmed_count(), MIN_ESSAY_CHARS)}
                            </span>
                        </div>
                        <div class="card-actions justify-end mt-2">
                            <button
                                class="btn btn-primary btn-lg px-8"
                                on:click=on_submit
                                disabled=move || !can_submit()
                            >
                                {move || if loading.get() {
                                    view! { <span class="loading loading-spinner"></span> "Analisando..." }.into_any()
                                } else {
                                    view! { <Send attr:class="w-5 h-5 mr-1" /> "Enviar para avaliação" }.into_any()
                                }}
                            </button>
                        </div>
                    </div>
                </div>

                {move || analysis.get().map(|result| view! {
                    <section class="rounded-box overflow-hidden border border-base-300 shadow-sm bg-base-100">
                        <header class="bg-primary text-primary-content p-4 md:p-5 text-center">
                            <p class="text-xs uppercase tracking-wide opacity-90">"Resultado"</p>
                            <h2 class="text-2xl md:text-3xl font-semibold mt-0.5">
                                {format!("Nota Total: {}", result.nota_total)}
                            </h2>
                            <div class="flex justify-center mt-1">{star_row(result.stars)}</div>
                        </header>
                        <div class="divide-y divide-base-300">
                            {RUBRIC.iter().map(|entry| {
                                let report = result.criterios.get(entry.key);
                                let comment = report.comment(entry.comment_slot).map(str::to_string);
                                view! {
                                    <div class="p-4 md:p-5">
                                        <div class="flex items-start justify-between gap-4">
                                            <div>
                                                <h3 class="text-base md:text-lg font-semibold">{entry.title}</h3>
                                                <p class="text-sm text-base-content/70 mt-0.5">{entry.description}</p>
                                            </div>
                                            <div class="badge badge-secondary text-sm md:text-base font-semibold px-2.5 py-3">
                                                {report.nota}
                                            </div>
                                        </div>
                                        <div class="mt-2 opacity-90">{star_row(report.stars)}</div>
                                        {comment.map(|comment| view! {
                                            <p class="text-sm leading-relaxed mt-2">{comment}</p>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </section>
                })}

                <Show when=move || essays.with(|e| !e.is_empty())>
                    <section class="mt-8">
                        <h3 class="text-lg font-semibold mb-3">"Redações anteriores"</h3>
                        <div class="rounded-box border border-base-300 divide-y divide-base-300 bg-base-100">
                            <For
                                each=move || {
                                    let current_id = analysis.with(|a| a.as_ref().map(|a| a.id));
                                    visible_history(essays.get(), current_id)
                                }
                                key=|essay| essay.id
                                children=move |essay| {
                                    let preview = essay_preview(&essay.input_text);
                                    let date = date::format_created_at(&essay.created_at);
                                    view! {
                                        <div class="p-4 flex items-start justify-between gap-4">
                                            <div class="min-w-0">
                                                <p class="text-sm text-base-content/60">{date}</p>
                                                <p class="text-sm mt-1 truncate max-w-[60ch]" title=essay.input_text.clone()>
                                                    {preview}
                                                </p>
                                            </div>
                                            <div class="flex items-center gap-3 shrink-0">
                                                <div class="badge badge-secondary text-sm font-semibold px-2.5 py-3">
                                                    {essay.nota_total}
                                                </div>
                                                {star_row(essay.stars)}
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </section>
                </Show>
            </main>
        </div>
    }
}

/// Five-star row; counts above five render as five.
fn star_row(count: u8) -> impl IntoView {
    let filled = count.min(5);
    view! {
        <div class="flex gap-1">
            {(0..5u8).map(|i| {
                let class = if i < filled {
                    "w-4 h-4 text-warning fill-current"
                } else {
                    "w-4 h-4 text-base-300"
                };
                view! { <Star attr:class=class /> }
            }).collect_view()}
        </div>
    }
}

const PREVIEW_CHARS: usize = 160;

fn essay_preview(input: &str) -> String {
    let mut preview: String = input.chars().take(PREVIEW_CHARS).collect();
    if input.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}
