//! Filter, classify and sort hotel-package payloads.
//!
//! [`viewer::HotelViewer`] is the session API over a loaded
//! [`domain::Dataset`]. The web shell in [`router`] drives one fresh session
//! per request.

pub mod config;
pub mod domain;
pub mod errors;
pub mod payload;
pub mod query;
pub mod responses;
pub mod router;
pub mod spreadsheets;
pub mod templates;
pub mod viewer;

#[cfg(test)]
mod tests;
