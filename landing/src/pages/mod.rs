// Landing page routes
// Developed by MegStudio (c)2025

mod home;
mod not_found;

pub use home::LandingPage;
pub use not_found::NotFoundPage;
