use leptos::prelude::*;
use megift::catalog::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-20 bg-gray-50">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold text-center mb-3 text-[#ED2F59]">"Como Funciona"</h2>
                <p class="text-center text-gray-600 max-w-2xl mx-auto mb-12">
                    "Três passos simples para começar a usar o Megift e transformar sua experiência com presentes."
                </p>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <StepCard
                                    number=index + 1
                                    title=step.title
                                    description=step.description
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn StepCard(number: usize, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center text-center">
            <div class="bg-[#ED2F59] text-white w-12 h-12 rounded-full flex items-center justify-center text-xl font-bold mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}
