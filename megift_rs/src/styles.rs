//! CSS for the landing page.
//!
//! Layout and colour come from Tailwind utility classes. This stylesheet only
//! carries what utilities cannot express: the keyframe animations and the
//! state classes that the components toggle. It is rendered once, in a
//! `<style>` element at the application root.

/// Keyframes and state classes for the landing page.
pub const LANDING_CSS: &str = r#"
@keyframes float {
    0% { transform: translateY(0px); }
    50% { transform: translateY(-20px); }
    100% { transform: translateY(0px); }
}
.animate-float {
    animation: float 6s ease-in-out infinite;
}

@keyframes spin-slow {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
.animate-spin-slow {
    animation: spin-slow 10s linear infinite;
}

/* Hero entrance */
@keyframes fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes zoom-in {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}
.enter-fade-up {
    animation: fade-up 0.5s ease-out both;
}
.enter-zoom-in {
    animation: zoom-in 0.5s ease-out 0.2s both;
}

/* Buttons that grow on hover and shrink on press */
.press-pop {
    transition: transform 0.15s ease;
}
.press-pop:hover {
    transform: scale(1.05);
}
.press-pop:active {
    transform: scale(0.95);
}

/* Feature cards: hidden until the section is revealed. The entrance runs as an
   animation delayed by --stagger-delay so the hover transition stays immediate. */
.reveal-card {
    opacity: 0;
    transform: translateY(20px);
    transition: transform 0.3s ease-out, box-shadow 0.3s ease-out;
}
.reveal-card.revealed {
    opacity: 1;
    transform: translateY(0);
    animation: fade-up 0.5s ease-out var(--stagger-delay, 0s) backwards;
}
.reveal-card.revealed:hover {
    transform: translateY(-0.25rem);
}

/* Testimonials: zoom in once when scrolled into view */
.view-card {
    opacity: 0;
    transform: scale(0.95);
    transition: opacity 0.5s ease-out, transform 0.5s ease-out, box-shadow 0.3s;
}
.view-card.in-view {
    opacity: 1;
    transform: scale(1);
}

/* Phone mockup screens; position set inline per carousel state */
.mockup-screen {
    transition: opacity 0.5s ease, transform 0.5s ease;
}
"#;
