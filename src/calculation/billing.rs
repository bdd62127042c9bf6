//! Session billing calculation.
//!
//! A play session is billed by the hour at the tariff of its location, plus a
//! flat fee for every extra controller. Amounts are whole currency units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::TariffRule;

/// An ordered set of tariff rules.
///
/// The first rule matching a location name supplies its hourly rate; a
/// location matching no rule has rate 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TariffTable {
    rules: Vec<TariffRule>,
}

impl TariffTable {
    /// Creates a table from rules in priority order.
    pub fn new(rules: Vec<TariffRule>) -> Self {
        Self { rules }
    }

    /// Returns the rules in priority order.
    pub fn rules(&self) -> &[TariffRule] {
        &self.rules
    }

    /// Returns the first rule that applies to the location, if any.
    pub fn matching_rule(&self, location: &str) -> Option<&TariffRule> {
        self.rules.iter().find(|rule| rule.matches(location))
    }

    /// Returns the hourly rate for a location, or 0 when none applies.
    pub fn rate_for(&self, location: &str) -> u32 {
        self.matching_rule(location)
            .map(|rule| rule.hourly_rate)
            .unwrap_or(0)
    }
}

/// The billing breakdown of a play session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    /// The hourly rate that was applied.
    pub hourly_rate: u32,
    /// Charge for the paid time.
    pub subtotal: u64,
    /// Charge for extra controllers.
    pub surcharge: u64,
    /// `subtotal + surcharge`.
    pub total: u64,
}

/// Computes the billing breakdown of a session.
///
/// `subtotal = round(paid_minutes / 60 × rate)` with halves rounded up,
/// `surcharge = extra_controllers × accessory_fee`. A location without a
/// tariff yields an all-zero breakdown rather than an error.
///
/// # Examples
///
/// ```
/// use playroom_engine::calculation::compute_billing;
/// use playroom_engine::config::TariffsConfig;
/// use playroom_engine::calculation::TariffTable;
///
/// let table = TariffTable::new(TariffsConfig::default().rules);
/// let billing = compute_billing("Play 5 número 1", 90, 1, &table, 200);
/// assert_eq!((billing.subtotal, billing.surcharge, billing.total), (1500, 200, 1700));
/// ```
pub fn compute_billing(
    location: &str,
    paid_minutes: u32,
    extra_controllers: u32,
    table: &TariffTable,
    accessory_fee: u32,
) -> Billing {
    let Some(rule) = table.matching_rule(location) else {
        return Billing::default();
    };

    // multiply first so exact halves stay exact
    let minute_units = Decimal::from(paid_minutes) * Decimal::from(rule.hourly_rate);
    let subtotal = (minute_units / Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0);
    let surcharge = u64::from(extra_controllers) * u64::from(accessory_fee);

    Billing {
        hourly_rate: rule.hourly_rate,
        subtotal,
        surcharge,
        total: subtotal + surcharge,
    }
}
