//! Core domain models for linkmask
//!
//! This crate contains:
//! - Domain models (Message, MaskedMessage)
//! - Error taxonomy shared by every other crate

pub mod error;
pub mod message;

pub use error::{Error, MaskError, Result, SinkError, SourceError};
pub use message::{MaskedMessage, Message, OutputOrder};
