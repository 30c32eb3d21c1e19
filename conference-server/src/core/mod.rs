//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod announcement;
pub mod featured;
pub mod mail;

// Re-export commonly used items
pub use announcement::nearly_sold_out_announcement;
pub use featured::{FeaturedSpeaker, evaluate, find_featured_speakers, render_announcement};
pub use mail::confirmation_email;
