//! Browser tests for the mounted components.
//!
//! Run with `wasm-pack test --headless --firefox landing`.
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use megift::SiteConfig;
use megift::config::TimingConfig;
use megift::waitlist::SUCCESS_MESSAGE;
use megift_landing::pages::NotFoundPage;
use megift_landing::sections::{AppMockup, Features, JoinWaitlist, Testimonials};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = document();
    let div = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn mount<N: IntoView + 'static>(f: impl FnOnce() -> N + 'static) -> HtmlElement {
    let root = container();
    std::mem::forget(leptos::mount::mount_to(root.clone(), f));
    root
}

fn with_timing(timing: TimingConfig) -> SiteConfig {
    SiteConfig {
        timing,
        ..SiteConfig::default()
    }
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn find(root: &HtmlElement, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn find_all(root: &HtmlElement, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn text(root: &HtmlElement, selector: &str) -> Option<String> {
    find(root, selector).and_then(|el| el.text_content())
}

fn click(root: &HtmlElement, selector: &str) {
    find(root, selector)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn input(root: &HtmlElement, name: &str) -> HtmlInputElement {
    find(root, &format!("input[name='{name}']"))
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn type_into(root: &HtmlElement, name: &str, value: &str) {
    let field = input(root, name);
    field.set_value(value);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    field.dispatch_event(&event).unwrap();
}

fn submit(root: &HtmlElement) {
    click(root, "button[type='submit']");
}

fn fill_and_submit(root: &HtmlElement, name: &str, email: &str) {
    type_into(root, "name", name);
    type_into(root, "email", email);
    submit(root);
}

/// Index of the screen the mockup currently shows.
fn shown_screen(root: &HtmlElement) -> Option<usize> {
    let screens = find_all(root, ".mockup-screen");
    let shown: Vec<usize> = screens
        .iter()
        .enumerate()
        .filter(|(_, el)| el.get_attribute("aria-hidden").as_deref() == Some("false"))
        .map(|(i, _)| i)
        .collect();
    match shown.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

#[wasm_bindgen_test]
async fn not_found_links_back_home() {
    let root = mount(NotFoundPage);
    sleep(0).await;

    let html = root.inner_html();
    assert!(html.contains("404"));
    assert!(html.contains("Página não encontrada"));
    let link = find(&root, "a").unwrap();
    assert_eq!(link.get_attribute("href").as_deref(), Some("/"));
}

#[wasm_bindgen_test]
async fn empty_submit_asks_for_all_fields() {
    let root = mount(JoinWaitlist);
    sleep(0).await;

    submit(&root);
    sleep(10).await;

    assert_eq!(
        text(&root, ".waitlist-error").as_deref(),
        Some("Por favor, preencha todos os campos.")
    );
    assert!(find(&root, ".waitlist-success").is_none());
}

#[wasm_bindgen_test]
async fn malformed_email_is_rejected() {
    let root = mount(JoinWaitlist);
    sleep(0).await;

    fill_and_submit(&root, "Ana", "ana@exemplo");
    sleep(10).await;

    assert_eq!(
        text(&root, ".waitlist-error").as_deref(),
        Some("Por favor, insira um email válido.")
    );
    // Rejected input is kept for correction.
    assert_eq!(input(&root, "email").value(), "ana@exemplo");
}

#[wasm_bindgen_test]
async fn valid_lead_is_accepted_then_message_clears() {
    let root = mount(JoinWaitlist);
    sleep(0).await;

    fill_and_submit(&root, "Ana", "ana@exemplo.com");
    sleep(10).await;

    let button = text(&root, "button[type='submit']").unwrap();
    assert_eq!(button.trim(), "Enviando...");
    assert!(find(&root, ".waitlist-success").is_none());

    sleep(1300).await;

    assert_eq!(text(&root, ".waitlist-success").as_deref(), Some(SUCCESS_MESSAGE));
    assert!(find(&root, ".waitlist-error").is_none());
    assert_eq!(input(&root, "name").value(), "");
    assert_eq!(input(&root, "email").value(), "");
    let button = text(&root, "button[type='submit']").unwrap();
    assert_eq!(button.trim(), "Quero participar");

    sleep(3100).await;

    assert!(
        find(&root, ".waitlist-success").is_none(),
        "success message should clear after the display time"
    );
}

#[wasm_bindgen_test]
async fn second_success_gets_a_full_display_time() {
    let config = with_timing(TimingConfig {
        submit_delay_ms: 100,
        success_display_ms: 400,
        ..TimingConfig::default()
    });
    let root = mount(move || {
        provide_context(config);
        view! { <JoinWaitlist /> }
    });
    sleep(0).await;

    // First success at ~100 ms; its dismiss timer would fire at ~500 ms.
    fill_and_submit(&root, "Ana", "ana@exemplo.com");
    sleep(200).await;
    assert!(find(&root, ".waitlist-success").is_some());

    // Second success at ~300 ms replaces it; new dismiss at ~700 ms.
    fill_and_submit(&root, "Bia", "bia@exemplo.com");
    sleep(400).await;
    assert!(
        find(&root, ".waitlist-success").is_some(),
        "earlier dismiss timer must not hide the newer message"
    );

    sleep(250).await;
    assert!(find(&root, ".waitlist-success").is_none());
}

#[wasm_bindgen_test]
async fn carousel_advances_and_restarts_after_selection() {
    // Ticks at 400, 800, 1200 ms unless a dot restarts the interval.
    let config = with_timing(TimingConfig {
        carousel_interval_ms: 400,
        ..TimingConfig::default()
    });
    let root = mount(move || {
        provide_context(config);
        view! { <AppMockup /> }
    });

    sleep(200).await;
    assert_eq!(shown_screen(&root), Some(0));
    sleep(400).await;
    assert_eq!(shown_screen(&root), Some(1));
    sleep(400).await;
    assert_eq!(shown_screen(&root), Some(2));

    // At ~1000 ms jump to the last screen; next tick is now ~1400 ms.
    click(&root, "button[aria-label='Mostrar tela 4']");
    sleep(10).await;
    assert_eq!(shown_screen(&root), Some(3));

    sleep(290).await;
    assert_eq!(
        shown_screen(&root),
        Some(3),
        "selection should restart the interval"
    );

    sleep(300).await;
    assert_eq!(shown_screen(&root), Some(0), "advance resumes from the selection");
}

#[wasm_bindgen_test]
async fn features_reveal_when_scrolled_into_view() {
    let root = mount(|| {
        view! {
            <div style="height: 3000px;"></div>
            <Features />
        }
    });
    sleep(100).await;

    let cards = find_all(&root, ".reveal-card");
    assert_eq!(cards.len(), 6);
    assert!(find(&root, ".reveal-card.revealed").is_none());

    find(&root, "#features").unwrap().scroll_into_view();
    sleep(300).await;

    assert_eq!(find_all(&root, ".reveal-card.revealed").len(), 6);
}

#[wasm_bindgen_test]
async fn testimonials_share_one_viewport_trigger() {
    let root = mount(|| {
        view! {
            <div style="height: 3000px;"></div>
            <Testimonials />
        }
    });
    sleep(100).await;

    assert_eq!(find_all(&root, ".view-card").len(), 3);
    assert!(find(&root, ".view-card.in-view").is_none());

    find(&root, ".view-card").unwrap().scroll_into_view();
    sleep(300).await;

    assert_eq!(find_all(&root, ".view-card.in-view").len(), 3);
}
