//! Phone frame cycling through app screenshots.

use crate::site_config;
use leptos::prelude::*;
use megift::Carousel;
use megift::catalog::SCREENS;

#[component]
pub fn AppMockup() -> impl IntoView {
    let interval = site_config().timing.carousel_interval();
    let carousel = RwSignal::new(Carousel::new(SCREENS.len()));
    let ticker = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        ticker.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    // (Re)start the auto-advance so the current screen always gets a full interval.
    let restart = move || {
        stop();
        let tick = move || {
            carousel.update(|c| {
                c.advance();
            })
        };
        match set_interval_with_handle(tick, interval) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(err) => log::warn!("[megift][carousel] could not start timer: {err:?}"),
        }
    };

    restart();
    on_cleanup(stop);

    let screens = SCREENS
        .iter()
        .enumerate()
        .map(|(index, screen)| {
            let style = move || {
                carousel.with(|c| c.placement(index, screen.image_position).style())
            };
            let hidden = move || {
                if carousel.with(|c| c.is_current(index)) { "false" } else { "true" }
            };
            view! {
                <div class="mockup-screen absolute inset-0 pt-6" style=style aria-hidden=hidden>
                    <div class="relative w-full h-full">
                        <img
                            src=screen.src
                            alt=screen.alt
                            title=screen.title
                            class="absolute inset-0 w-full h-full object-cover"
                            style=format!("object-position: {};", screen.image_position.as_css())
                        />
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let dots = (0..SCREENS.len())
        .map(|index| {
            let class = move || {
                if carousel.with(|c| c.is_current(index)) {
                    "h-2 rounded-full transition-all duration-300 bg-[#ED2F59] w-4"
                } else {
                    "h-2 rounded-full transition-all duration-300 bg-gray-400 w-2"
                }
            };
            let select = move |_| {
                let applied = carousel.try_update(|c| c.select(index)).unwrap_or(false);
                if applied {
                    restart();
                }
            };
            view! {
                <button
                    type="button"
                    class=class
                    aria-label=format!("Mostrar tela {}", index + 1)
                    on:click=select
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="relative w-[320px] h-[640px] mx-auto">
            <div class="absolute inset-0 bg-black rounded-[40px] shadow-2xl overflow-hidden border-8 border-gray-800">
                // Status bar
                <div class="absolute top-0 inset-x-0 h-6 bg-black z-10">
                    <div class="w-20 h-4 mx-auto bg-gray-800 rounded-b-xl"></div>
                </div>

                <div class="relative w-full h-full pt-6">{screens}</div>

                <div class="absolute bottom-4 inset-x-0 flex justify-center space-x-2 z-10">{dots}</div>
            </div>
        </div>
    }
}
