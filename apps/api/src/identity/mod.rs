//! Identity document extraction: an uploaded Aadhaar card image is forwarded
//! to the vision provider and parsed into structured details.

pub mod handlers;
pub mod models;
