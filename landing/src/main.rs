// Megift Landing Page — Leptos 0.8 Edition
// Developed by MegStudio (c)2025

use megift_landing::App;

fn main() {
    console_error_panic_hook::set_once();
    megift_landing::init_logging();
    leptos::mount::mount_to_body(App);
}
