use crate::icons::{ICON_CHECK, Icon};
use leptos::prelude::*;
use megift::catalog::{APP_FEATURES, assets};

#[component]
pub fn AppPreview() -> impl IntoView {
    view! {
        <section class="py-20 bg-white overflow-hidden">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center">
                    <div class="md:w-1/2 mb-10 md:mb-0">
                        <h2 class="text-3xl font-bold mb-6 text-[#ED2F59]">
                            "Tenha toda experiência na palma da sua mão"
                        </h2>
                        <p class="text-gray-600 mb-8">
                            "O aplicativo Megift torna a experiência de presentear mais intuitiva e conectada. "
                            "Descubra as possibilidades que o Megift oferece para facilitar sua vida."
                        </p>

                        <ul class="space-y-4">
                            {APP_FEATURES
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li class="flex items-center">
                                            <div class="bg-green-500 p-1 rounded-full mr-3 text-white">
                                                <Icon path=ICON_CHECK size="14" />
                                            </div>
                                            <span class="text-gray-700">{*item}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <div class="md:w-1/2 flex justify-center">
                        <div class="relative w-[320px] h-[640px]">
                            <img
                                src=assets::HOME_SCREEN
                                alt="Megift App Showcase"
                                class="absolute inset-0 w-full h-full object-cover rounded-3xl shadow-2xl"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
