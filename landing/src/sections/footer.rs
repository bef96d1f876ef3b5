use leptos::prelude::*;
use megift::catalog::{FOOTER_COLUMNS, assets};
use megift::COMPANY;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-white text-gray-800 py-12">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-8 md:mb-0">
                        <div class="relative h-12 w-32">
                            <img src=assets::LOGO_PINK alt="Megift Logo" width="128" height="48" class="object-contain" />
                        </div>
                        <p class="mt-2 text-gray-600 max-w-xs">
                            "Transformando a experiência de dar presentes em momentos memoráveis."
                        </p>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        {FOOTER_COLUMNS
                            .iter()
                            .map(|column| {
                                view! {
                                    <div>
                                        <h3 class="font-semibold text-[#ED2F59] mb-4">{column.heading}</h3>
                                        <ul class="space-y-2">
                                            {column
                                                .links
                                                .iter()
                                                .map(|label| {
                                                    view! {
                                                        <li>
                                                            <a href="#" class="text-gray-600 hover:text-[#ED2F59] transition">
                                                                {*label}
                                                            </a>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="mt-12 pt-8 border-t border-gray-200 text-center text-gray-600">
                    <p>{format!("© {year} {COMPANY}. Todos os direitos reservados.")}</p>
                </div>
            </div>
        </footer>
    }
}
