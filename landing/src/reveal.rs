//! Viewport-entry trigger backed by `IntersectionObserver`.
//!
//! The latch logic lives in [`megift::RevealLatch`]; this module only wires it
//! to the browser and ties the observer's lifetime to the calling component.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::ElementType;
use leptos::prelude::*;
use megift::RevealLatch;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Returns a signal that turns `true` the first time at least `threshold` of
/// `target` is visible, and stays `true`.
///
/// The observer is disconnected as soon as it fires, or when the owning
/// component is torn down. If the browser cannot create an observer the
/// signal is set right away so content is never left hidden.
pub fn reveal_once<E>(target: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let (revealed, set_revealed) = signal(false);
    let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if observer.with_value(|slot| slot.is_some()) {
            return;
        }
        let element: web_sys::Element = element.unchecked_into();
        match observe(&element, threshold, set_revealed) {
            Ok(connected) => observer.set_value(Some(connected)),
            Err(err) => {
                log::warn!("[megift][reveal] IntersectionObserver unavailable ({err:?}), showing content");
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        observer.try_update_value(|slot| {
            if let Some((connected, _callback)) = slot.take() {
                connected.disconnect();
            }
        });
    });

    revealed
}

fn observe(
    element: &web_sys::Element,
    threshold: f64,
    set_revealed: WriteSignal<bool>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));

    let callback: ObserverCallback = Closure::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if latch.borrow_mut().observe(entry.intersection_ratio()) {
                    log::debug!(
                        "[megift][reveal] fired at ratio {:.2}",
                        entry.intersection_ratio()
                    );
                    set_revealed.set(true);
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok((observer, callback))
}
