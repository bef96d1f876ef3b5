use super::AppMockup;
use crate::icons::{ICON_ARROW_RIGHT, Icon};
use leptos::prelude::*;
use megift::catalog::assets;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 md:py-24 flex flex-col md:flex-row items-center">
            <div class="md:w-1/2 mb-10 md:mb-0">
                <div class="enter-fade-up">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        "Um jeito fácil de presentear!"
                    </h1>
                    <p class="text-xl mb-8">
                        "Transforme a forma de dar e receber presentes através da tecnologia. "
                        "Crie listas de desejos, compartilhe com amigos e receba exatamente o que você quer."
                    </p>
                    <div class="flex flex-col sm:flex-row space-y-3 sm:space-y-0 sm:space-x-4">
                        <a
                            href="#join"
                            class="press-pop bg-white text-[#ED2F59] px-6 py-3 rounded-2xl font-semibold hover:bg-gray-100 transition shadow-lg flex items-center justify-center group"
                        >
                            <span>"Quero participar"</span>
                            <Icon
                                path=ICON_ARROW_RIGHT
                                size="16"
                                class="ml-2 transform group-hover:translate-x-1 transition-transform"
                            />
                        </a>
                        <a
                            href="#features"
                            class="press-pop border-2 border-white text-white px-6 py-3 rounded-2xl font-semibold hover:bg-white/10 transition flex items-center justify-center"
                        >
                            "Saiba mais"
                        </a>
                    </div>
                </div>
            </div>

            <div class="md:w-1/2 flex justify-center relative">
                <div class="enter-zoom-in relative">
                    <div class="absolute -top-20 -right-20 w-40 h-40 animate-float">
                        <img src=assets::COIN alt="Megift Coin" width="160" height="160" class="object-contain" />
                    </div>
                    <AppMockup />
                </div>
            </div>
        </div>
    }
}
