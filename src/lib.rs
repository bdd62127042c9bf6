//! Back-office engine for the Sala de Juegos Ruiz playroom.
//!
//! This crate provides the time and cost engine used when entering play
//! sessions (clock conversions, end-time derivation and billing against the
//! venue's tariff table) and a paged collection cache for browsing catalog
//! data that is fetched once per filter and revealed incrementally.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod paging;
pub mod session;
