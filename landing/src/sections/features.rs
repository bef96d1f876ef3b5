use crate::icons::{Icon, feature_icon_path};
use crate::reveal::reveal_once;
use crate::site_config;
use leptos::html;
use leptos::prelude::*;
use megift::catalog::{FEATURES, Feature};
use megift::reveal::stagger_style;

#[component]
pub fn Features() -> impl IntoView {
    let threshold = site_config().reveal.threshold;
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = reveal_once(section_ref, threshold);

    view! {
        <section id="features" class="py-20 bg-gray-50" node_ref=section_ref>
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-3 text-[#ED2F59]">
                    "Funcionalidades Principais"
                </h2>
                <p class="text-center text-gray-600 max-w-2xl mx-auto mb-12">
                    "O Megift vai além de listas de presentes, oferecendo uma experiência "
                    "completa para tornar o ato de presentear mais significativo e pessoal."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! { <FeatureCard feature=*feature index=index revealed=revealed /> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Feature tile that slides in once `revealed` turns true, delayed by its position.
#[component]
pub fn FeatureCard(
    feature: Feature,
    /// Position in the grid, drives the entrance delay
    index: usize,
    #[prop(into)] revealed: Signal<bool>,
) -> impl IntoView {
    let class = move || {
        if revealed.get() {
            "reveal-card revealed bg-white rounded-xl p-6 shadow-lg hover:shadow-xl"
        } else {
            "reveal-card bg-white rounded-xl p-6 shadow-lg hover:shadow-xl"
        }
    };
    let badge_class = format!(
        "bg-gradient-to-r {} text-white w-16 h-16 rounded-xl flex items-center justify-center mb-4",
        feature.gradient
    );

    view! {
        <article class=class style=stagger_style(index)>
            <div class=badge_class>
                <Icon path=feature_icon_path(feature.icon) size="36" />
            </div>
            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
            <p class="text-gray-600">{feature.description}</p>
        </article>
    }
}
