//! Vidgate Core Library
//!
//! Framework-free building blocks shared by the vidgate media API: byte
//! decoding with a legacy fallback, external encoder presence checks, and
//! client address resolution behind a trusted proxy.

pub mod addr;
pub mod decode;
pub mod error;
pub mod toolcheck;

pub use error::{AddressError, DecodeError, Result, SessionError, ToolError, VidgateError};
pub use toolcheck::ToolVersion;
