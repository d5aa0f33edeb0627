//! AgroBoost backend: identity document extraction, government scheme
//! listings, and crop recommendation with a rule-based fallback.

pub mod config;
pub mod errors;
pub mod identity;
pub mod recommend;
pub mod routes;
pub mod schemes;
pub mod state;
pub mod vision_client;
