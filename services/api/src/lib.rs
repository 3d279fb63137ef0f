mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use chow_triage::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}

pub use infra::{InMemoryTicketSink, Ticket, TicketError, TicketReceipt, TicketSink};
pub use routes::with_chow_routes;
