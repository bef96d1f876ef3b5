// Landing page sections
// Developed by MegStudio (c)2025

mod app_mockup;
mod app_preview;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod join;
mod nav;
mod testimonials;

pub use app_mockup::AppMockup;
pub use app_preview::AppPreview;
pub use features::{FeatureCard, Features};
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::{HowItWorks, StepCard};
pub use join::JoinWaitlist;
pub use nav::Nav;
pub use testimonials::{TestimonialCard, Testimonials};
