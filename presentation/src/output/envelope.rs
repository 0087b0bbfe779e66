//! JSON response envelope

use serde::Serialize;

/// `{"success": true, "data": ...}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a, T: Serialize> Envelope<'a, T> {
    pub fn ok(data: &'a T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<'a> Envelope<'a, ()> {
    pub fn error(message: &'a str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}
