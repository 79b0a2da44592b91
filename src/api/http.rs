//! reqwest-backed client for the ticketing REST service.

use std::future::Future;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::Result;
use crate::types::{
    ApiMessage, CreatedTicket, Movie, MovieId, NewTicket, Showtime, Ticket, TicketId, TicketUpdate,
};

use super::{ApiError, TicketingApi};

/// HTTP implementation of [`TicketingApi`].
///
/// Requests carry no timeout and are never retried; a call runs until the
/// service answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpTicketingApi {
    client: Client,
    base_url: Url,
}

impl HttpTicketingApi {
    /// Create a client for the service rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Create a client from the configured base URL.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Send a request and turn non-success statuses into [`ApiError`].
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_body(status, &body);
            tracing::debug!(status = status.as_u16(), message = %error.message, "API request failed");
            return Err(error.into());
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let response = self.send(self.client.get(url).query(query)).await?;
        Ok(response.json().await?)
    }
}

/// Parse a base URL so that relative endpoint paths append to it.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl TicketingApi for HttpTicketingApi {
    fn list_movies(&self) -> impl Future<Output = Result<Vec<Movie>>> + Send {
        async move { self.get_json("api/movies", &[]).await }
    }

    fn list_showtimes(
        &self,
        movie_id: MovieId,
    ) -> impl Future<Output = Result<Vec<Showtime>>> + Send {
        async move {
            let movie_id = movie_id.to_string();
            self.get_json("api/showtimes", &[("movie_id", movie_id.as_str())])
                .await
        }
    }

    fn list_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send {
        async move { self.get_json("api/tickets", &[]).await }
    }

    fn search_tickets(
        &self,
        holder_name: &str,
    ) -> impl Future<Output = Result<Vec<Ticket>>> + Send {
        async move {
            self.get_json("api/tickets/search", &[("holder_name", holder_name)])
                .await
        }
    }

    fn create_ticket(
        &self,
        ticket: &NewTicket,
    ) -> impl Future<Output = Result<CreatedTicket>> + Send {
        async move {
            let url = self.endpoint("api/tickets")?;
            tracing::debug!(%url, showtime_id = ticket.showtime_id, "POST");
            let response = self.send(self.client.post(url).json(ticket)).await?;
            Ok(response.json().await?)
        }
    }

    fn update_ticket(
        &self,
        id: TicketId,
        update: &TicketUpdate,
    ) -> impl Future<Output = Result<ApiMessage>> + Send {
        async move {
            let url = self.endpoint(&format!("api/tickets/update/{id}"))?;
            tracing::debug!(%url, "PUT");
            let response = self.send(self.client.put(url).json(update)).await?;
            Ok(response.json().await?)
        }
    }

    fn delete_ticket(&self, id: TicketId) -> impl Future<Output = Result<()>> + Send {
        async move {
            let url = self.endpoint(&format!("api/tickets/{id}"))?;
            tracing::debug!(%url, "DELETE");
            // The body (if any) carries only a message; success is the status
            self.send(self.client.delete(url)).await?;
            Ok(())
        }
    }
}
