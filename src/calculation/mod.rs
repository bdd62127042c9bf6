//! Calculation logic for the playroom engine.
//!
//! This module contains the pure functions behind the session form and the
//! reports: 12h/24h clock conversion, end-time derivation, duration input,
//! session billing against the tariff table, and the reporting helpers.
//! None of them perform I/O or fail on expected edge cases.

mod billing;
mod clock;
mod duration;
mod reporting;

pub use billing::{Billing, TariffTable, compute_billing};
pub use clock::{ClockTime, add_minutes, to_12_hour, to_24_hour};
pub use duration::{DurationInput, MAX_INPUT_HOURS, MAX_INPUT_MINUTES, minutes_to_text};
pub use reporting::{DailyAggregate, DailySales, aggregate_sales_by_day, inventory_share_percent};
