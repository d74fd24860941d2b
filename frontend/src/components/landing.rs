//! Landing page: static marketing content, no state.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icons::{Sparkles, Target, TrendingUp};

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    let go_to_auth = {
        let navigate = navigate.clone();
        move |_| navigate("/auth", Default::default())
    };
    let go_to_auth_hero = {
        let navigate = navigate.clone();
        move |_| navigate("/auth", Default::default())
    };
    let go_to_auth_cta = move |_| navigate("/auth", Default::default());

    view! {
        <div class="min-h-screen bg-base-100">
            <header class="navbar border-b bg-base-100/80 backdrop-blur-sm sticky top-0 z-50 px-4">
                <div class="flex-1">
                    <span class="text-2xl font-bold text-primary">"Aurora"</span>
                </div>
                <div class="flex-none">
                    <button class="btn btn-primary" on:click=go_to_auth>
                        "Entrar"
                    </button>
                </div>
            </header>

            <section class="container mx-auto px-4 py-20 md:py-32">
                <div class="max-w-4xl mx-auto text-center">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        "Sua mentora de redação está aqui"
                    </h1>
                    <p class="text-xl md:text-2xl text-base-content/70 mb-8 leading-relaxed">
                        "Aurora corrige suas redações com feedbacks claros, motivadores e detalhados. "
                        "Como uma mentora atenta, ela quer te ver crescer e brilhar no ENEM."
                    </p>
                    <button class="btn btn-primary btn-lg px-8" on:click=go_to_auth_hero>
                        "Comece agora gratuitamente"
                    </button>
                </div>
            </section>

            <section class="bg-base-200 py-20">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        <div class="card bg-base-100 shadow-sm border border-base-300">
                            <div class="card-body">
                                <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center mb-4 text-primary">
                                    <Sparkles attr:class="w-6 h-6" />
                                </div>
                                <h3 class="card-title text-2xl mb-1">"Feedback Instantâneo"</h3>
                                <p class="text-base-content/70 leading-relaxed">
                                    "Envie sua redação e receba análise completa em segundos, com "
                                    "comentários detalhados sobre cada competência."
                                </p>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-sm border border-base-300">
                            <div class="card-body">
                                <div class="w-12 h-12 rounded-full bg-secondary/10 flex items-center justify-center mb-4 text-secondary">
                                    <Target attr:class="w-6 h-6" />
                                </div>
                                <h3 class="card-title text-2xl mb-1">"5 Competências"</h3>
                                <p class="text-base-content/70 leading-relaxed">
                                    "Avaliação detalhada em norma culta, repertório, coerência, "
                                    "coesão e proposta de intervenção."
                                </p>
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow-sm border border-base-300">
                            <div class="card-body">
                                <div class="w-12 h-12 rounded-full bg-success/10 flex items-center justify-center mb-4 text-success">
                                    <TrendingUp attr:class="w-6 h-6" />
                                </div>
                                <h3 class="card-title text-2xl mb-1">"Melhoria Contínua"</h3>
                                <p class="text-base-content/70 leading-relaxed">
                                    "Acompanhe sua evolução com notas detalhadas e sugestões "
                                    "práticas para melhorar em cada tentativa."
                                </p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="py-20">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Sua redação está pronta para brilhar"
                    </h2>
                    <p class="text-xl text-base-content/70 mb-8 max-w-2xl mx-auto">
                        "Junte-se aos estudantes que já estão melhorando suas notas com Aurora"
                    </p>
                    <button class="btn btn-primary btn-lg px-8" on:click=go_to_auth_cta>
                        "Começar agora"
                    </button>
                </div>
            </section>

            <footer class="border-t py-8 bg-base-200/50">
                <div class="container mx-auto px-4 text-center text-base-content/70">
                    <p>"© 2025 Aurora. Sua mentora de redação com IA."</p>
                </div>
            </footer>
        </div>
    }
}
