//! Static classification tables: hue psychology and role usage advice.

pub mod psychology;
pub mod usage;

pub use psychology::{describe_by_hue, describe_hue, PsychologyDescription, HUE_BUCKETS};
pub use usage::{usage_advice, usage_advice_for_label, NO_USAGE_DATA};
