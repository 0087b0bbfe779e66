//! Application-level configuration.
//!
//! - [`ProviderSettings`]: per-provider enablement, cache TTL and pacing
//! - [`ValidationParams`]: deadlines for providers and the text generator

pub mod provider_settings;
pub mod validation_params;

pub use provider_settings::ProviderSettings;
pub use validation_params::ValidationParams;
