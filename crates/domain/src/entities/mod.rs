//! Domain entities - Generated drafts and their containers

mod email_variation;
mod variation_set;

pub use email_variation::EmailVariation;
pub use variation_set::{VARIATION_COUNT, VariationSet};
