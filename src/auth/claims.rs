use serde::{Deserialize, Serialize};

/// JWT payload: session identity plus the standard time/issuer fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,     // user ID
    pub email: String,
    pub iat: usize,   // issued at (unix timestamp)
    pub exp: usize,   // expires at (unix timestamp)
    pub iss: String,
    pub aud: String,
}
