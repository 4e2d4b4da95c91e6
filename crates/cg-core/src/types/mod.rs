//! Common types used across cg-* crates

pub mod common;
pub mod ids;

pub use common::{Days, EventType, HttpMethod, Order, StatusUpdateCategory, StatusUpdateProjectType};
pub use ids::IdList;
