//! Request handlers.
//!
//! Handlers stay thin: extract the input, delegate to the repository, and
//! let [`AppError`](crate::error::AppError) turn the outcome into a
//! response. The `web` module maps the same outcomes to redirects instead
//! of JSON bodies.

pub mod list;
pub mod task;
pub mod transfer;
pub mod web;
