//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`text::TextScan`]: whole-word term matching used by every heuristic
//! - [`string::truncate`]: UTF-8 safe truncation

pub mod error;
pub mod string;
pub mod text;
