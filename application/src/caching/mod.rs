//! Per-provider caching and pacing.
//!
//! - [`TtlCache`]: keyed payload cache with strict expiry
//! - [`RateLimiter`]: minimum interval between outbound calls
//! - [`ProviderSlot`]: one provider with its cache, limiter, deadline and
//!   in-flight coalescing
//!
//! All three are shared by every concurrent validation in the process.

pub mod rate_limiter;
pub mod slot;
pub mod ttl_cache;

pub use rate_limiter::RateLimiter;
pub use slot::ProviderSlot;
pub use ttl_cache::TtlCache;
