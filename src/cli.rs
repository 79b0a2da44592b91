use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::types::{MovieId, ShowtimeId, TicketId};

#[derive(Parser)]
#[command(name = "boxoffice")]
#[command(about = "Movie theater box office client")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the movie catalog
    #[command(visible_alias = "m")]
    Movies {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List showtimes for a movie
    Showtimes {
        /// Movie ID
        movie_id: MovieId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show every movie with its showtimes and available seats
    #[command(visible_alias = "l")]
    Listings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List purchased tickets
    #[command(visible_alias = "t")]
    Tickets {
        /// Only show tickets whose holder name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Search on the server instead of filtering locally
        #[arg(long, requires = "search")]
        remote: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Buy a ticket
    Buy {
        /// Movie ID
        movie_id: MovieId,

        /// Showtime ID (must belong to the movie)
        showtime_id: ShowtimeId,

        /// Ticket holder's name
        #[arg(short, long)]
        name: String,

        /// Ticket holder's age
        #[arg(short, long, allow_hyphen_values = true)]
        age: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a ticket's holder name and/or age
    Update {
        /// Ticket ID
        ticket_id: TicketId,

        /// New holder name
        #[arg(short, long)]
        name: Option<String>,

        /// New holder age
        #[arg(short, long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a ticket and return its seat
    Delete {
        /// Ticket ID
        ticket_id: TicketId,

        /// Skip the confirmation prompt (required for non-interactive use)
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the ticket price for an age
    Price {
        /// Holder age
        #[arg(allow_negative_numbers = true)]
        age: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive box office session
    Shell,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (api.base_url, listing_concurrency)
        key: String,
        /// Value to set
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.base_url, listing_concurrency)
        key: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            cmd_buy, cmd_config_get, cmd_config_set, cmd_config_show, cmd_delete, cmd_listings,
            cmd_movies, cmd_price, cmd_shell, cmd_showtimes, cmd_tickets, cmd_update,
        };

        match self {
            Commands::Movies { json } => cmd_movies(json).await,
            Commands::Showtimes { movie_id, json } => cmd_showtimes(movie_id, json).await,
            Commands::Listings { json } => cmd_listings(json).await,
            Commands::Tickets {
                search,
                remote,
                json,
            } => cmd_tickets(search.as_deref(), remote, json).await,
            Commands::Buy {
                movie_id,
                showtime_id,
                name,
                age,
                json,
            } => cmd_buy(movie_id, showtime_id, &name, &age, json).await,
            Commands::Update {
                ticket_id,
                name,
                age,
                json,
            } => cmd_update(ticket_id, name.as_deref(), age.as_deref(), json).await,
            Commands::Delete {
                ticket_id,
                force,
                json,
            } => cmd_delete(ticket_id, force, json).await,
            Commands::Price { age, json } => cmd_price(&age, json),
            Commands::Shell => cmd_shell().await,

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "boxoffice", &mut io::stdout());
}
