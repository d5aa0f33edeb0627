//! Government scheme listings: a static scraped data file cleaned and
//! categorized at startup, served with simple keyword filters.

pub mod classify;
pub mod handlers;
pub mod models;
pub mod repository;
