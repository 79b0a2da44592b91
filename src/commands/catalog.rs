//! Read-only catalog commands.
//!
//! - `movies`: the movie catalog
//! - `showtimes`: showtimes for one movie
//! - `listings`: every movie with its showtimes

use serde_json::json;

use super::{CommandOutput, open_storefront};
use crate::display::{format_listings, movie_table, showtime_table};
use crate::error::Result;
use crate::types::MovieId;

pub async fn cmd_movies(json: bool) -> Result<()> {
    let mut storefront = open_storefront()?;
    let movies = storefront.load_movies().await?;

    let text = if movies.is_empty() {
        "No movies available".to_string()
    } else {
        movie_table(movies)
    };

    CommandOutput::new(json!(movies)).with_text(text).print(json)
}

pub async fn cmd_showtimes(movie_id: MovieId, json: bool) -> Result<()> {
    let mut storefront = open_storefront()?;
    let showtimes = storefront.select_movie(movie_id).await?;

    let text = if showtimes.is_empty() {
        format!("No showtimes for movie {movie_id}")
    } else {
        showtime_table(showtimes)
    };

    CommandOutput::new(json!({
        "movie_id": movie_id,
        "showtimes": showtimes,
    }))
    .with_text(text)
    .print(json)
}

pub async fn cmd_listings(json: bool) -> Result<()> {
    let mut storefront = open_storefront()?;
    let listings = storefront.load_listings().await?;

    CommandOutput::new(json!(listings))
        .with_text(format_listings(listings))
        .print(json)
}
