// Catch-all page for unknown routes
use crate::icons::{ICON_ARROW_LEFT, Icon};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[#ED2F59] mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-800 mb-4">"Página não encontrada"</h2>
                <p class="text-gray-600 mb-8">
                    "Desculpe, a página que você está procurando não existe."
                </p>
                <a
                    href="/"
                    class="inline-flex items-center bg-[#ED2F59] text-white px-6 py-3 rounded-2xl font-semibold hover:bg-[#B51235] transition-colors"
                >
                    <Icon path=ICON_ARROW_LEFT size="16" class="mr-2" />
                    "Voltar para a página inicial"
                </a>
            </div>
        </div>
    }
}
