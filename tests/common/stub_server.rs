use std::collections::HashMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::{Value, json};

use boxoffice::api::TicketingApi;
use boxoffice::error::{BoxOfficeError, Result};
use boxoffice::types::{NewTicket, Ticket, TicketId, TicketUpdate};

use super::fake_api::FakeApi;

type Shared = Arc<FakeApi>;

/// A ticketing REST service on an ephemeral local port, backed by a [`FakeApi`].
///
/// The server runs on its own thread and runtime so both async tests and
/// blocking binary tests can talk to it.
#[allow(dead_code)]
pub struct StubServer {
    pub base_url: String,
    pub api: Shared,
}

#[allow(dead_code)]
impl StubServer {
    pub fn start(api: FakeApi) -> Self {
        let api = Arc::new(api);
        let listener = StdTcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        listener
            .set_nonblocking(true)
            .expect("Failed to make listener non-blocking");
        let addr = listener.local_addr().expect("Failed to read stub address");

        let app = router(api.clone());
        let (ready_tx, ready_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt listener");
                let _ = ready_tx.send(());
                axum::serve(listener, app).await.expect("Stub server failed");
            });
        });
        ready_rx.recv().expect("Stub server did not start");

        StubServer {
            base_url: format!("http://{addr}"),
            api,
        }
    }
}

fn router(api: Shared) -> Router {
    Router::new()
        .route("/api/movies", get(list_movies))
        .route("/api/showtimes", get(list_showtimes))
        .route("/api/tickets", get(list_tickets).post(create_ticket))
        .route("/api/tickets/search", get(search_tickets))
        .route("/api/tickets/update/:id", put(update_ticket))
        .route("/api/tickets/:id", delete(delete_ticket))
        .with_state(api)
}

/// Tickets as the service stores them: showtime_id is a text column.
fn stored(tickets: Vec<Ticket>) -> Value {
    Value::Array(
        tickets
            .into_iter()
            .map(|ticket| {
                let mut value = json!(ticket);
                value["showtime_id"] = json!(ticket.showtime_id.to_string());
                value
            })
            .collect(),
    )
}

fn reply<T: Serialize>(status: StatusCode, result: Result<T>) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(BoxOfficeError::Api { status, message }) => {
            let status = StatusCode::from_u16(status.as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "message": message }))).into_response()
        }
        Err(other) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": other.to_string() })),
        )
            .into_response(),
    }
}

async fn list_movies(State(api): State<Shared>) -> Response {
    reply(StatusCode::OK, api.list_movies().await)
}

async fn list_showtimes(
    State(api): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match params.get("movie_id").and_then(|id| id.parse().ok()) {
        Some(movie_id) => reply(StatusCode::OK, api.list_showtimes(movie_id).await),
        None => Json(json!([])).into_response(),
    }
}

async fn list_tickets(State(api): State<Shared>) -> Response {
    reply(StatusCode::OK, api.list_tickets().await.map(stored))
}

async fn search_tickets(
    State(api): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let holder_name = params.get("holder_name").cloned().unwrap_or_default();
    reply(
        StatusCode::OK,
        api.search_tickets(&holder_name).await.map(stored),
    )
}

async fn create_ticket(State(api): State<Shared>, Json(ticket): Json<NewTicket>) -> Response {
    reply(StatusCode::CREATED, api.create_ticket(&ticket).await)
}

async fn update_ticket(
    State(api): State<Shared>,
    Path(id): Path<TicketId>,
    Json(update): Json<TicketUpdate>,
) -> Response {
    reply(StatusCode::OK, api.update_ticket(id, &update).await)
}

async fn delete_ticket(State(api): State<Shared>, Path(id): Path<TicketId>) -> Response {
    match api.delete_ticket(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => reply(StatusCode::OK, Err::<(), _>(e)),
    }
}
