//! Reporting helpers for the sales dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Share of the total inventory value held by items on sale, as a percentage
/// rounded to one decimal place.
///
/// A zero or negative total yields 0 rather than an undefined ratio. A ratio
/// too large for a `Decimal` is rejected as an invalid `sale_value`.
///
/// ```
/// use playroom_engine::calculation::inventory_share_percent;
/// use rust_decimal::Decimal;
///
/// let share = inventory_share_percent(Decimal::from(1), Decimal::from(3)).unwrap();
/// assert_eq!(share.to_string(), "33.3");
/// assert_eq!(inventory_share_percent(Decimal::from(5), Decimal::ZERO), Ok(Decimal::ZERO));
/// ```
pub fn inventory_share_percent(sale_value: Decimal, total_value: Decimal) -> EngineResult<Decimal> {
    if total_value <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let percent = sale_value
        .checked_div(total_value)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| EngineError::InvalidAmount {
            field: "sale_value".to_string(),
            amount: sale_value,
        })?;

    Ok(percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
}

/// A pre-aggregated sales record as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Timestamp of the aggregated day.
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
    /// Sales amount, absent when the backend has none.
    #[serde(rename = "totalVentas", default)]
    pub total_sales: Option<Decimal>,
    /// Number of transactions, absent when the backend has none.
    #[serde(rename = "numeroTransacciones", default)]
    pub transactions: Option<u64>,
}

/// Sales for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySales {
    /// The calendar day (UTC).
    pub date: NaiveDate,
    /// Summed sales amount.
    pub total: Decimal,
    /// Summed transaction count.
    pub transactions: u64,
}

/// Groups aggregate records by UTC calendar day, keeping first-seen order.
pub fn aggregate_sales_by_day(records: &[DailyAggregate]) -> Vec<DailySales> {
    let mut days: Vec<DailySales> = Vec::new();

    for record in records {
        let date = record.date.date_naive();
        let total = record.total_sales.unwrap_or(Decimal::ZERO);
        let transactions = record.transactions.unwrap_or(0);

        match days.iter_mut().find(|d| d.date == date) {
            Some(day) => {
                day.total += total;
                day.transactions += transactions;
            }
            None => days.push(DailySales {
                date,
                total,
                transactions,
            }),
        }
    }

    days
}
