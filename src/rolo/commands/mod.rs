//! Command functions: one per user command, taking the pre-tokenized
//! argument list plus the owning collection and returning a display string.
//!
//! Wrong argument shapes are [`RoloError::Usage`](crate::error::RoloError)
//! errors; bad phone/date input propagates as validation errors; "not
//! found" conditions are ordinary `Ok` messages. Nothing here prints or
//! persists: the shell renders, the [`Assistant`](crate::api::Assistant)
//! saves.

pub mod birthdays;
pub mod config;
pub mod contacts;
pub mod notes;
