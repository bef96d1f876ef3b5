// Home page - hero, product sections, waitlist
use crate::sections::{
    AppPreview, Features, Footer, Hero, HowItWorks, JoinWaitlist, Nav, Testimonials,
};
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white font-sans">
            <header class="bg-gradient-to-r from-[#ED2F59] to-[#B51235] text-white">
                <Nav />
                <Hero />
            </header>
            <main>
                <Features />
                <AppPreview />
                <HowItWorks />
                <Testimonials />
                <JoinWaitlist />
            </main>
            <Footer />
        </div>
    }
}
