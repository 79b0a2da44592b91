//! Ticket commands: list/search, buy, update and delete.

use owo_colors::OwoColorize;
use serde_json::json;

use super::interactive::{AssumeYes, PromptConfirm};
use super::{CommandOutput, open_storefront};
use crate::display::{format_price, format_ticket_view};
use crate::error::{BoxOfficeError, Result};
use crate::store::TicketView;
use crate::storefront::{Confirm, DeleteOutcome};
use crate::types::{MovieId, ShowtimeId, TicketId};
use crate::utils::is_stdin_tty;

/// List tickets, optionally filtered by holder name.
pub async fn cmd_tickets(search: Option<&str>, remote: bool, json: bool) -> Result<()> {
    let mut storefront = open_storefront()?;
    storefront.load_tickets().await?;

    let view = match search {
        Some(query) if remote => storefront.search_remote(query).await?,
        Some(query) => storefront.search(query),
        None => storefront.state().ticket_view(),
    };

    let (query, matched) = match view {
        TicketView::All(_) => (None, true),
        TicketView::Filtered { query, .. } => (Some(query), true),
        TicketView::NoMatches { query, .. } => (Some(query), false),
    };

    CommandOutput::new(json!({
        "query": query,
        "matched": matched,
        "tickets": view.tickets(),
    }))
    .with_text(format_ticket_view(view))
    .print(json)
}

/// Buy one ticket for a showtime of the given movie.
pub async fn cmd_buy(
    movie_id: MovieId,
    showtime_id: ShowtimeId,
    name: &str,
    age: &str,
    json: bool,
) -> Result<()> {
    let mut storefront = open_storefront()?;
    storefront.select_movie(movie_id).await?;

    if storefront.select_showtime(showtime_id).is_none() {
        return Err(BoxOfficeError::InvalidInput(format!(
            "showtime {showtime_id} is not scheduled for movie {movie_id}"
        )));
    }
    storefront.set_holder_name(name);
    storefront.enter_holder_age(age);

    let receipt = storefront.purchase().await?;

    let text = format!(
        "Purchased ticket {} for {} (age {}) at showtime {}: {}",
        format!("#{}", receipt.ticket_id).cyan(),
        receipt.holder_name,
        receipt.holder_age,
        receipt.showtime_id,
        format_price(f64::from(receipt.price)).green()
    );

    CommandOutput::new(json!({
        "action": "purchased",
        "ticket": receipt,
    }))
    .with_text(text)
    .print(json)
}

/// Change the holder name and/or age of a ticket.
pub async fn cmd_update(
    ticket_id: TicketId,
    name: Option<&str>,
    age: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut storefront = open_storefront()?;
    storefront.set_update_ticket_id(ticket_id);
    if let Some(name) = name {
        storefront.set_update_holder_name(name);
    }
    if let Some(age) = age {
        storefront.enter_update_age(age);
    }

    let message = storefront.update_ticket().await?;

    CommandOutput::new(json!({
        "action": "updated",
        "ticket_id": ticket_id,
        "message": message,
    }))
    .with_text(format!("{} {}", "Updated:".green(), message))
    .print(json)
}

/// Delete a ticket, asking first unless `force` is set.
pub async fn cmd_delete(ticket_id: TicketId, force: bool, json: bool) -> Result<()> {
    if !force && (json || !is_stdin_tty()) {
        return Err(BoxOfficeError::ConfirmationRequired(format!(
            "use --force to delete ticket {ticket_id} non-interactively"
        )));
    }

    let mut storefront = open_storefront()?;
    storefront.load_tickets().await?;

    let confirm: &dyn Confirm = if force { &AssumeYes } else { &PromptConfirm };
    let outcome = storefront.delete_ticket(ticket_id, confirm).await?;

    let text = match outcome {
        DeleteOutcome::Cancelled => "Cancelled".dimmed().to_string(),
        DeleteOutcome::Deleted {
            ticket_id,
            showtime_id,
            tickets_refreshed,
        } => {
            let mut text = format!(
                "Deleted ticket {} (seat returned to showtime {})",
                format!("#{ticket_id}").cyan(),
                showtime_id
            );
            if !tickets_refreshed {
                text.push_str(&format!(
                    "\n{}",
                    "Ticket list could not be refreshed".yellow()
                ));
            }
            text
        }
    };

    CommandOutput::new(json!(outcome)).with_text(text).print(json)
}
