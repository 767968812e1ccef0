// Sub-modules organized by functional domain
pub mod api;
pub mod auth;
pub mod plan;
pub mod workout;

// Re-export all models so call sites can use `crate::db::models::*`

// API response structures
pub use api::*;

// Authentication and user models
pub use auth::*;

// Training plan models
pub use plan::*;

// Workout log models
pub use workout::*;
