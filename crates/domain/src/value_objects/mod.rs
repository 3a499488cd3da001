//! Value Objects - Immutable, identity-less domain primitives

mod draft_length;
mod email_request;
mod relationship;
mod tone;

pub use draft_length::DraftLength;
pub use email_request::{EmailRequest, MIN_CONTEXT_CHARS};
pub use relationship::Relationship;
pub use tone::Tone;
