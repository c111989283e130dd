//! Login, registration, and token lifecycle services.

pub mod service;

pub use service::{AuthService, LoginResult, RegisterRequest};
