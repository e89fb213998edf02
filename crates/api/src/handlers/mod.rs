//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handler
//! bodies run under [`vvv_core::instrument::instrument`] so every request
//! logs its outcome and duration; storage is delegated to `vvv_db` and
//! errors are mapped via [`crate::error::AppError`].

pub mod health;
pub mod items;
