//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod content;
pub mod error;
pub mod key_action;
pub mod section;

// Re-export for convenience
pub use content::{Contact, Education, Job, Portfolio, Profile, Project, SkillGroup};
pub use error::{AppError, ContentError};
pub use key_action::KeyAction;
pub use section::{SectionId, UnknownSection};
