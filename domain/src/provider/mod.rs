//! Provider contract types shared by the orchestrator and the scoring engine.
//!
//! - [`kind::ProviderKind`]: the fixed provider set
//! - [`result::ProviderResult`]: `Success` / `Failure` / `Disabled` / `NotConfigured`
//! - [`context::ValidationContext`]: outcomes for one request
//! - [`request::AnalysisRequest`]: what providers receive

pub mod context;
pub mod kind;
pub mod request;
pub mod result;

pub use context::ValidationContext;
pub use kind::ProviderKind;
pub use request::AnalysisRequest;
pub use result::{ProviderPayload, ProviderResult, ProviderStatus};
