use crate::reveal::reveal_once;
use crate::site_config;
use leptos::html;
use leptos::prelude::*;
use megift::catalog::{TESTIMONIALS, Testimonial};

/// Any visible pixel of the grid counts as "in view".
const IN_VIEW_THRESHOLD: f64 = 0.0;

#[component]
pub fn Testimonials() -> impl IntoView {
    let avatar_base = site_config().avatars.base_url;
    let grid_ref = NodeRef::<html::Div>::new();
    let in_view = reveal_once(grid_ref, IN_VIEW_THRESHOLD);

    view! {
        <section class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-3 text-[#ED2F59]">
                    "O que dizem sobre nós"
                </h2>
                <p class="text-center text-gray-600 max-w-2xl mx-auto mb-12">
                    "Veja o que nossos usuários beta estão falando sobre sua experiência com o Megift."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto" node_ref=grid_ref>
                    {TESTIMONIALS
                        .iter()
                        .map(|testimonial| {
                            view! {
                                <TestimonialCard
                                    testimonial=*testimonial
                                    avatar_url=testimonial.avatar_url(&avatar_base)
                                    in_view=in_view
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Quote card that zooms in once `in_view` turns true.
#[component]
pub fn TestimonialCard(
    testimonial: Testimonial,
    avatar_url: String,
    #[prop(into)] in_view: Signal<bool>,
) -> impl IntoView {
    let class = move || {
        if in_view.get() {
            "view-card in-view bg-white p-6 rounded-xl shadow-lg hover:shadow-xl"
        } else {
            "view-card bg-white p-6 rounded-xl shadow-lg hover:shadow-xl"
        }
    };

    view! {
        <div class=class>
            <div class="flex items-start mb-4">
                <div class="flex-shrink-0 w-12 h-12 rounded-full overflow-hidden mr-4 ring-2 ring-[#ED2F59]">
                    <img src=avatar_url alt=testimonial.author class="w-full h-full object-cover" />
                </div>
                <div class="flex-1">
                    <p class="font-semibold leading-tight">{testimonial.author}</p>
                    <p class="text-sm text-gray-500 leading-tight">{testimonial.role}</p>
                </div>
            </div>
            <p class="text-gray-600 italic">"“" {testimonial.quote} "”"</p>
        </div>
    }
}
