use leptos::prelude::*;
use megift::catalog::{NAV_LINKS, assets};

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-6 flex justify-between items-center">
            <div class="flex items-center">
                <div class="relative h-12 w-32">
                    <img src=assets::LOGO alt="Megift Logo" width="128" height="48" class="object-contain" />
                </div>
            </div>

            <nav class="hidden md:flex space-x-8">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="hover:text-gray-200 transition">
                                {link.label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <a
                href="#join"
                class="press-pop bg-white text-[#ED2F59] px-6 py-2 rounded-2xl font-semibold hover:bg-gray-100 transition shadow flex items-center space-x-2"
            >
                <img src=assets::APP_ICON alt="" width="24" height="24" class="object-contain" />
                <span>"Pré-Cadastro"</span>
            </a>
        </div>
    }
}
