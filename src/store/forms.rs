//! Entry forms for purchasing and updating tickets.

use crate::pricing::{parse_age, ticket_price};
use crate::types::{ShowtimeId, TicketId, TicketUpdate};

/// The purchase form: holder details, chosen showtime, and the derived price.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseForm {
    pub holder_name: String,
    pub holder_age: Option<u32>,
    pub showtime_id: Option<ShowtimeId>,
    pub price: Option<u32>,
}

/// The fields a purchase needs, borrowed from a filled-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseDraft<'a> {
    pub showtime_id: ShowtimeId,
    pub holder_name: &'a str,
    pub holder_age: u32,
}

impl PurchaseForm {
    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        self.holder_name = name.into();
    }

    /// Record raw age input and recompute the price from it.
    pub fn enter_age(&mut self, input: &str) -> u32 {
        let age = parse_age(input);
        self.holder_age = Some(age);
        let price = ticket_price(age);
        self.price = Some(price);
        price
    }

    pub fn select_showtime(&mut self, showtime_id: ShowtimeId) {
        self.showtime_id = Some(showtime_id);
    }

    /// Returns the purchase fields when every required field is filled in.
    ///
    /// An age of 0 (what unparseable input becomes) counts as missing.
    pub fn draft(&self) -> Option<PurchaseDraft<'_>> {
        let showtime_id = self.showtime_id?;
        let holder_age = self.holder_age.filter(|age| *age > 0)?;
        if self.holder_name.is_empty() {
            return None;
        }
        Some(PurchaseDraft {
            showtime_id,
            holder_name: &self.holder_name,
            holder_age,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The ticket update form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub ticket_id: Option<TicketId>,
    pub holder_name: String,
    pub holder_age: Option<u32>,
}

impl UpdateForm {
    pub fn set_ticket_id(&mut self, ticket_id: TicketId) {
        self.ticket_id = Some(ticket_id);
    }

    pub fn set_holder_name(&mut self, name: impl Into<String>) {
        self.holder_name = name.into();
    }

    /// Record raw age input; blank input clears the field.
    pub fn enter_age(&mut self, input: &str) {
        self.holder_age = if input.trim().is_empty() {
            None
        } else {
            Some(parse_age(input))
        };
    }

    /// The ticket id and the fields to send, or `None` if the form is incomplete.
    pub fn request(&self) -> Option<(TicketId, TicketUpdate)> {
        let ticket_id = self.ticket_id?;
        let update = TicketUpdate {
            holder_name: (!self.holder_name.is_empty()).then(|| self.holder_name.clone()),
            holder_age: self.holder_age,
        };
        if update.is_empty() {
            return None;
        }
        Some((ticket_id, update))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
