//! Local holder-name search over the loaded ticket list.

use crate::types::Ticket;

/// Tickets whose holder name contains `query`, ignoring case.
///
/// The query is trimmed first; an empty query yields `None` (no filter).
pub fn filter_by_holder(tickets: &[Ticket], query: &str) -> Option<Vec<Ticket>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    Some(
        tickets
            .iter()
            .filter(|ticket| ticket.holder_name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

/// Current search query and its result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketSearch {
    query: String,
    results: Option<Vec<Ticket>>,
}

/// What the ticket listing should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TicketView<'a> {
    /// No filter applied
    All(&'a [Ticket]),
    /// A search matched these tickets
    Filtered { query: &'a str, tickets: &'a [Ticket] },
    /// A search matched nothing; the unfiltered list is still shown
    NoMatches { query: &'a str, tickets: &'a [Ticket] },
}

impl<'a> TicketView<'a> {
    pub fn tickets(&self) -> &'a [Ticket] {
        match self {
            TicketView::All(tickets)
            | TicketView::Filtered { tickets, .. }
            | TicketView::NoMatches { tickets, .. } => tickets,
        }
    }
}

impl TicketSearch {
    /// Recompute results from scratch for `query`.
    pub fn run(&mut self, tickets: &[Ticket], query: &str) {
        self.query = query.to_string();
        self.results = filter_by_holder(tickets, query);
    }

    /// Replace results with a set computed elsewhere (e.g. by the service).
    pub fn set_results(&mut self, query: &str, results: Vec<Ticket>) {
        self.query = query.to_string();
        self.results = if query.trim().is_empty() {
            None
        } else {
            Some(results)
        };
    }

    pub fn clear(&mut self) {
        self.results = None;
    }

    pub fn results(&self) -> Option<&[Ticket]> {
        self.results.as_deref()
    }

    pub fn results_mut(&mut self) -> Option<&mut Vec<Ticket>> {
        self.results.as_mut()
    }

    pub fn view<'a>(&'a self, all: &'a [Ticket]) -> TicketView<'a> {
        match &self.results {
            None => TicketView::All(all),
            Some(results) if results.is_empty() => TicketView::NoMatches {
                query: self.query.trim(),
                tickets: all,
            },
            Some(results) => TicketView::Filtered {
                query: self.query.trim(),
                tickets: results,
            },
        }
    }
}
