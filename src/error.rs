use std::fmt;

use thiserror::Error;

use crate::types::{ShowtimeId, TicketId};

/// A user-triggerable storefront action, used to phrase failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LoadMovies,
    LoadShowtimes,
    LoadListings,
    LoadTickets,
    SearchTickets,
    Purchase,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::LoadMovies => "load movies",
            Action::LoadShowtimes => "load showtimes",
            Action::LoadListings => "load movies and showtimes",
            Action::LoadTickets => "load tickets",
            Action::SearchTickets => "search tickets",
            Action::Purchase => "purchase ticket",
            Action::Update => "update ticket",
            Action::Delete => "delete ticket",
        };
        write!(f, "{text}")
    }
}

#[derive(Error, Debug)]
pub enum BoxOfficeError {
    // Local precondition violations: no network call is made
    #[error("please fill in all fields before purchasing a ticket")]
    IncompletePurchase,

    #[error("no available seats for showtime {0}")]
    NoSeatsAvailable(ShowtimeId),

    #[error("please provide a ticket ID and at least one field to update")]
    IncompleteUpdate,

    #[error("ticket '{0}' not found")]
    TicketNotFound(TicketId),

    #[error("confirmation required: {0}")]
    ConfirmationRequired(String),

    // Remote failures
    #[error("failed to {action}, please try again")]
    ActionFailed {
        action: Action,
        #[source]
        source: Box<BoxOfficeError>,
    },

    #[error("API error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl BoxOfficeError {
    /// Wrap a transport or remote failure for the given action.
    pub fn action_failed(action: Action, source: BoxOfficeError) -> Self {
        BoxOfficeError::ActionFailed {
            action,
            source: Box::new(source),
        }
    }

    /// True for failures detected locally, before any request was sent.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            BoxOfficeError::IncompletePurchase
                | BoxOfficeError::NoSeatsAvailable(_)
                | BoxOfficeError::IncompleteUpdate
                | BoxOfficeError::TicketNotFound(_)
                | BoxOfficeError::ConfirmationRequired(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BoxOfficeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_failed_hides_details() {
        let err = BoxOfficeError::action_failed(
            Action::Purchase,
            BoxOfficeError::Api {
                status: reqwest::StatusCode::BAD_REQUEST,
                message: "No seats available.".to_string(),
            },
        );
        assert_eq!(err.to_string(), "failed to purchase ticket, please try again");
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_precondition_classification() {
        assert!(BoxOfficeError::IncompletePurchase.is_precondition());
        assert!(BoxOfficeError::NoSeatsAvailable(3).is_precondition());
        assert!(BoxOfficeError::TicketNotFound(9).is_precondition());
        assert!(!BoxOfficeError::Config("bad".to_string()).is_precondition());
    }
}
