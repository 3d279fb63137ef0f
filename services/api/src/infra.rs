use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Deserializer};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Opaque ticket payload handed to the external tracker. The triage core
/// never sees this type; the rendered document travels as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketReceipt {
    pub ticket_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("ticket tracker rejected the request: {0}")]
    Rejected(String),
}

/// Boundary to the external issue tracker; implementations own
/// authentication, rate limiting, and error surfacing for that call.
pub trait TicketSink: Send + Sync {
    fn create(&self, ticket: Ticket) -> Result<TicketReceipt, TicketError>;
}

/// Stand-in tracker used by the demo, tests, and the default server wiring.
#[derive(Default)]
pub struct InMemoryTicketSink {
    next_id: AtomicU64,
    tickets: Mutex<Vec<Ticket>>,
}

impl TicketSink for InMemoryTicketSink {
    fn create(&self, ticket: Ticket) -> Result<TicketReceipt, TicketError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let mut guard = self.tickets.lock().expect("ticket mutex poisoned");
        guard.push(ticket);
        Ok(TicketReceipt {
            ticket_id: format!("CHOW-{id}"),
        })
    }
}

impl InMemoryTicketSink {
    pub fn tickets(&self) -> Vec<Ticket> {
        self.tickets.lock().expect("ticket mutex poisoned").clone()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{raw}': expected YYYY-MM-DD"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse_date(&value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
