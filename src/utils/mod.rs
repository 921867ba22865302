//! Small helpers shared by the renderers and the webhook resolver

pub mod links;
pub mod timestamp;
