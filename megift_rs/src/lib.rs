//! # megift
//!
//! Framework-free model behind the Megift landing page.
//!
//! Everything here is plain Rust with no browser dependency, so the landing
//! crate can stay a thin Leptos layer and the behaviour can be tested natively.
//!
//! ## Architecture
//!
//! - [`catalog`] - Static content records (features, steps, testimonials, screens)
//! - [`waitlist`] - Waitlist form state, validation and the simulated lead sink
//! - [`carousel`] - Index model for the app mockup screen carousel
//! - [`reveal`] - One-way scroll-reveal latch and card stagger timing
//! - [`config`] - Site configuration (timings, reveal threshold, avatar service)
//! - [`styles`] - Static stylesheet with the landing keyframes
//!
//! ## Quick Start
//!
//! ```rust
//! use megift::waitlist::{SimulatedSink, SubmitStart, WaitlistForm};
//!
//! let mut form = WaitlistForm::new();
//! form.set_name("Ana");
//! form.set_email("ana@ex.com");
//!
//! let SubmitStart::Started(lead) = form.begin_submit() else {
//!     panic!("valid input must start a submission");
//! };
//! form.complete_with(&SimulatedSink, &lead);
//! assert!(form.is_submitted());
//! assert!(form.name().is_empty());
//! ```
//!
//! ---
//!
//! Developed by MegStudio (c)2025

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod reveal;
pub mod styles;
pub mod waitlist;

pub use carousel::{Carousel, ScreenPlacement};
pub use config::{ConfigError, SiteConfig};
pub use reveal::RevealLatch;
pub use waitlist::{Lead, LeadSink, SimulatedSink, SubmitStart, WaitlistError, WaitlistForm};

/// Company named in the footer copyright line.
pub const COMPANY: &str = "MegStudio";
