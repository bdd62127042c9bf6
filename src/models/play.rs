//! Play session model and the session-entry form.
//!
//! A play is a timed rental of a console or the ping-pong table. The form
//! collects a start time in 12-hour form and the paid duration; the end time
//! and the cost preview are always derived from those inputs.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calculation::{
    Billing, ClockTime, DurationInput, TariffTable, compute_billing, to_12_hour,
};
use crate::error::{EngineError, EngineResult};
use crate::paging::Identified;

/// Payment state of a play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Session running, payment not settled.
    #[default]
    #[serde(rename = "En Proceso")]
    InProgress,
    /// Fully paid.
    #[serde(rename = "Completado")]
    Completed,
    /// Time owed by the customer.
    #[serde(rename = "Pendiente")]
    Pending,
}

/// A play as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaySession {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Date of the session; the backend may append a time component.
    #[serde(rename = "fecha")]
    pub date: String,
    /// Customer name.
    #[serde(rename = "cliente")]
    pub client: String,
    /// Staff member who registered the session.
    #[serde(rename = "atendio")]
    pub attended_by: String,
    /// Paid minutes.
    #[serde(rename = "tiempoPagado")]
    pub paid_minutes: u32,
    /// Minutes owed.
    #[serde(rename = "tiempoPendiente", default)]
    pub pending_minutes: Option<u32>,
    /// Start time, `HH:MM`.
    #[serde(rename = "horaInicio")]
    pub start_time: String,
    /// End time, `HH:MM`.
    #[serde(rename = "horaFinal")]
    pub end_time: String,
    /// Location name.
    #[serde(rename = "lugarDeJuego")]
    pub location: String,
    /// Games played.
    #[serde(rename = "juegosJugados", default)]
    pub games: Vec<String>,
    /// Extra controllers rented.
    #[serde(rename = "controlAdicional", default)]
    pub extra_controllers: u32,
    /// Payment state.
    #[serde(rename = "estadoPago", default)]
    pub payment_status: PaymentStatus,
}

impl Identified for PlaySession {
    fn id(&self) -> &str {
        &self.id
    }
}

impl PlaySession {
    /// Loads this session into a form for editing.
    ///
    /// Stored 24-hour times are shown in 12-hour form and the stored minutes
    /// are split back into hour/minute fields.
    pub fn to_draft(&self) -> EngineResult<PlayDraft> {
        let day = self.date.split('T').next().unwrap_or_default();
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
            EngineError::InvalidField {
                field: "fecha".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(PlayDraft {
            date,
            client: self.client.clone(),
            attended_by: self.attended_by.clone(),
            paid_time: DurationInput::from_minutes(self.paid_minutes),
            pending_time: DurationInput::from_minutes(self.pending_minutes.unwrap_or(0)),
            start_time: to_12_hour(&self.start_time),
            location: self.location.clone(),
            games: self.games.clone(),
            extra_controllers: self.extra_controllers,
            payment_status: self.payment_status,
            editing: Some(self.id.clone()),
        })
    }
}

/// The session-entry form.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use playroom_engine::calculation::ClockTime;
/// use playroom_engine::models::PlayDraft;
///
/// let mut draft = PlayDraft::starting_at(
///     "Ana",
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     ClockTime::from_hm(22, 45).unwrap(),
/// );
/// draft.paid_time.set_hours("1");
/// draft.paid_time.set_minutes("30");
/// assert_eq!(draft.start_time, "10:45 PM");
/// assert_eq!(draft.end_time(), "12:15 AM");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlayDraft {
    /// Date of the session.
    pub date: NaiveDate,
    /// Customer name.
    pub client: String,
    /// Staff member registering the session.
    pub attended_by: String,
    /// Paid time fields.
    pub paid_time: DurationInput,
    pending_time: DurationInput,
    /// Start time as typed, `H:MM AM|PM`.
    pub start_time: String,
    /// Location name.
    pub location: String,
    games: Vec<String>,
    /// Extra controllers rented.
    pub extra_controllers: u32,
    /// Payment state.
    pub payment_status: PaymentStatus,
    editing: Option<String>,
}

impl PlayDraft {
    /// A blank form for today, starting now.
    pub fn new(attended_by: impl Into<String>) -> Self {
        Self::starting_at(attended_by, Local::now().date_naive(), ClockTime::now_local())
    }

    /// A blank form for the given date and start time.
    pub fn starting_at(attended_by: impl Into<String>, date: NaiveDate, start: ClockTime) -> Self {
        Self {
            date,
            client: String::new(),
            attended_by: attended_by.into(),
            paid_time: DurationInput::default(),
            pending_time: DurationInput::default(),
            start_time: start.to_12h_string(),
            location: String::new(),
            games: Vec::new(),
            extra_controllers: 0,
            payment_status: PaymentStatus::default(),
            editing: None,
        }
    }

    /// The id of the session being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Paid minutes from the paid time fields.
    pub fn paid_minutes(&self) -> u32 {
        self.paid_time.total_minutes()
    }

    /// Owed minutes.
    pub fn pending_minutes(&self) -> u32 {
        self.pending_time.total_minutes()
    }

    /// Pending time fields.
    pub fn pending_time(&self) -> &DurationInput {
        &self.pending_time
    }

    /// Updates the pending hours. Pending time is only recorded on existing
    /// sessions, so this is ignored for a new one.
    pub fn set_pending_hours(&mut self, raw: &str) {
        if self.editing.is_some() {
            self.pending_time.set_hours(raw);
        }
    }

    /// Updates the pending minutes; ignored for a new session.
    pub fn set_pending_minutes(&mut self, raw: &str) {
        if self.editing.is_some() {
            self.pending_time.set_minutes(raw);
        }
    }

    /// Games selected.
    pub fn games(&self) -> &[String] {
        &self.games
    }

    /// Replaces the game selection, keeping the previous one if more than
    /// `max_games` are given.
    pub fn set_games(&mut self, games: Vec<String>, max_games: usize) -> EngineResult<()> {
        if games.len() > max_games {
            return Err(EngineError::TooManyGames {
                max: max_games,
                selected: games.len(),
            });
        }
        self.games = games;
        Ok(())
    }

    /// The derived end time in 12-hour form.
    ///
    /// Empty until a valid start time and a non-zero paid duration exist.
    pub fn end_time(&self) -> String {
        self.end_clock()
            .map(|t| t.to_12h_string())
            .unwrap_or_default()
    }

    fn end_clock(&self) -> Option<ClockTime> {
        let paid = self.paid_minutes();
        if paid == 0 {
            return None;
        }
        ClockTime::parse_12h(&self.start_time).map(|start| start.add_minutes(i64::from(paid)))
    }

    /// Cost preview for the current inputs.
    ///
    /// All-zero until a location and a paid duration are entered.
    pub fn billing(&self, table: &TariffTable, accessory_fee: u32) -> Billing {
        if self.location.is_empty() || self.paid_minutes() == 0 {
            return Billing::default();
        }
        compute_billing(
            &self.location,
            self.paid_minutes(),
            self.extra_controllers,
            table,
            accessory_fee,
        )
    }

    /// Checks required fields and builds the payload sent to the backend.
    pub fn validate(&self) -> EngineResult<PlayPayload> {
        require("cliente", &self.client)?;
        require("atendio", &self.attended_by)?;
        if self.paid_minutes() == 0 {
            return Err(missing("tiempoPagado"));
        }
        let start = ClockTime::parse_12h(&self.start_time).ok_or_else(|| missing("horaInicio"))?;
        let end = self.end_clock().ok_or_else(|| missing("horaFinal"))?;
        require("lugarDeJuego", &self.location)?;

        Ok(PlayPayload {
            date: self.date,
            client: self.client.trim().to_string(),
            attended_by: self.attended_by.trim().to_string(),
            paid_minutes: self.paid_minutes(),
            pending_minutes: self.pending_minutes(),
            start_time: start.to_24h_string(),
            end_time: end.to_24h_string(),
            location: self.location.clone(),
            games: self.games.clone(),
            extra_controllers: self.extra_controllers,
            payment_status: self.payment_status,
        })
    }
}

fn missing(field: &str) -> EngineError {
    EngineError::MissingField {
        field: field.to_string(),
    }
}

fn require(field: &str, value: &str) -> EngineResult<()> {
    if value.trim().is_empty() {
        return Err(missing(field));
    }
    Ok(())
}

/// A validated play, ready to be created or updated on the backend.
///
/// Pricing is computed again by the backend; only the basic fields are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayPayload {
    /// Date of the session.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Customer name.
    #[serde(rename = "cliente")]
    pub client: String,
    /// Staff member.
    #[serde(rename = "atendio")]
    pub attended_by: String,
    /// Paid minutes.
    #[serde(rename = "tiempoPagado")]
    pub paid_minutes: u32,
    /// Owed minutes.
    #[serde(rename = "tiempoPendiente")]
    pub pending_minutes: u32,
    /// Start time, `HH:MM`.
    #[serde(rename = "horaInicio")]
    pub start_time: String,
    /// End time, `HH:MM`.
    #[serde(rename = "horaFinal")]
    pub end_time: String,
    /// Location name.
    #[serde(rename = "lugarDeJuego")]
    pub location: String,
    /// Games played.
    #[serde(rename = "juegosJugados")]
    pub games: Vec<String>,
    /// Extra controllers.
    #[serde(rename = "controlAdicional")]
    pub extra_controllers: u32,
    /// Payment state.
    #[serde(rename = "estadoPago")]
    pub payment_status: PaymentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TariffsConfig;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft_at(hour: u32, minute: u32) -> PlayDraft {
        PlayDraft::starting_at(
            "Ana",
            make_date("2025-03-01"),
            ClockTime::from_hm(hour, minute).unwrap(),
        )
    }

    fn complete_draft() -> PlayDraft {
        let mut draft = draft_at(15, 0);
        draft.client = "Luis".to_string();
        draft.location = "Play 5 número 1".to_string();
        draft.paid_time.set_hours("1");
        draft.paid_time.set_minutes("30");
        draft.extra_controllers = 1;
        draft
    }

    fn stored_session() -> PlaySession {
        serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "fecha": "2025-03-01T00:00:00.000Z",
            "cliente": "Luis",
            "atendio": "Ana",
            "tiempoPagado": 135,
            "tiempoPendiente": 20,
            "horaInicio": "21:30",
            "horaFinal": "23:45",
            "lugarDeJuego": "Play 4 número 2",
            "juegosJugados": ["FIFA 25"],
            "controlAdicional": 2,
            "estadoPago": "Pendiente",
            "total": 2200
        }))
        .unwrap()
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = draft_at(9, 5);
        assert_eq!(draft.start_time, "9:05 AM");
        assert_eq!(draft.payment_status, PaymentStatus::InProgress);
        assert_eq!(draft.paid_minutes(), 0);
        assert!(draft.editing().is_none());
    }

    #[test]
    fn test_end_time_empty_without_paid_time() {
        assert_eq!(draft_at(9, 5).end_time(), "");
    }

    #[test]
    fn test_end_time_follows_inputs() {
        let mut draft = draft_at(11, 30);
        draft.paid_time.set_minutes("45");
        assert_eq!(draft.end_time(), "12:15 PM");

        draft.paid_time.set_hours("2");
        assert_eq!(draft.end_time(), "2:15 PM");

        draft.start_time = "11:30 PM".to_string();
        assert_eq!(draft.end_time(), "2:15 AM");
    }

    #[test]
    fn test_end_time_empty_for_unparsable_start() {
        let mut draft = draft_at(9, 0);
        draft.start_time = "soon".to_string();
        draft.paid_time.set_hours("1");
        assert_eq!(draft.end_time(), "");
    }

    #[test]
    fn test_billing_preview() {
        let table = TariffTable::new(TariffsConfig::default().rules);
        let draft = complete_draft();
        let billing = draft.billing(&table, 200);

        assert_eq!(billing.subtotal, 1500);
        assert_eq!(billing.surcharge, 200);
        assert_eq!(billing.total, 1700);
    }

    #[test]
    fn test_billing_preview_zero_without_location() {
        let table = TariffTable::new(TariffsConfig::default().rules);
        let mut draft = complete_draft();
        draft.location.clear();
        assert_eq!(draft.billing(&table, 200), Billing::default());
    }

    #[test]
    fn test_billing_preview_zero_without_paid_time() {
        let table = TariffTable::new(TariffsConfig::default().rules);
        let mut draft = complete_draft();
        draft.paid_time = DurationInput::default();
        assert_eq!(draft.billing(&table, 200), Billing::default());
    }

    #[test]
    fn test_too_many_games_keeps_selection() {
        let mut draft = draft_at(9, 0);
        draft
            .set_games(vec!["FIFA 25".to_string(), "GTA V".to_string()], 2)
            .unwrap();

        let result = draft.set_games(
            vec!["FIFA 25".to_string(), "GTA V".to_string(), "Minecraft".to_string()],
            2,
        );

        assert_eq!(
            result,
            Err(EngineError::TooManyGames {
                max: 2,
                selected: 3
            })
        );
        assert_eq!(draft.games().len(), 2);
    }

    #[test]
    fn test_validate_builds_24h_payload() {
        let payload = complete_draft().validate().unwrap();

        assert_eq!(payload.start_time, "15:00");
        assert_eq!(payload.end_time, "16:30");
        assert_eq!(payload.paid_minutes, 90);
        assert_eq!(payload.pending_minutes, 0);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["fecha"], "2025-03-01");
        assert_eq!(json["horaInicio"], "15:00");
        assert_eq!(json["lugarDeJuego"], "Play 5 número 1");
        assert_eq!(json["estadoPago"], "En Proceso");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut draft = complete_draft();
        draft.client = "  ".to_string();
        assert_eq!(
            draft.validate(),
            Err(EngineError::MissingField {
                field: "cliente".to_string()
            })
        );

        let mut draft = complete_draft();
        draft.paid_time = DurationInput::default();
        assert_eq!(
            draft.validate(),
            Err(EngineError::MissingField {
                field: "tiempoPagado".to_string()
            })
        );

        let mut draft = complete_draft();
        draft.location.clear();
        assert_eq!(
            draft.validate(),
            Err(EngineError::MissingField {
                field: "lugarDeJuego".to_string()
            })
        );
    }

    #[test]
    fn test_pending_time_ignored_for_new_session() {
        let mut draft = draft_at(9, 0);
        draft.set_pending_minutes("30");
        assert_eq!(draft.pending_minutes(), 0);
    }

    #[test]
    fn test_stored_session_loads_for_editing() {
        let mut draft = stored_session().to_draft().unwrap();

        assert_eq!(draft.editing(), Some("p1"));
        assert_eq!(draft.date, make_date("2025-03-01"));
        assert_eq!(draft.start_time, "9:30 PM");
        assert_eq!(draft.paid_time.hours, Some(2));
        assert_eq!(draft.paid_time.minutes, Some(15));
        assert_eq!(draft.end_time(), "11:45 PM");
        assert_eq!(draft.payment_status, PaymentStatus::Pending);

        draft.set_pending_minutes("45");
        assert_eq!(draft.pending_minutes(), 45);
    }

    #[test]
    fn test_stored_session_with_bad_date() {
        let mut session = stored_session();
        session.date = "yesterday".to_string();
        assert!(matches!(
            session.to_draft(),
            Err(EngineError::InvalidField { field, .. }) if field == "fecha"
        ));
    }
}
