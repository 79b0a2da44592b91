//! Interactive storefront shell.
//!
//! Keeps one [`Storefront`] alive across commands so selections, form
//! fields, cached seat counts and search results carry over between lines.

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use super::interactive::PromptConfirm;
use super::open_storefront;
use crate::api::TicketingApi;
use crate::display::{
    format_listings, format_price, format_seats_colored, format_selection, format_showtime_option,
    format_ticket_view, movie_table,
};
use crate::error::{BoxOfficeError, Result};
use crate::storefront::{DeleteOutcome, Storefront};
use crate::types::{MovieId, ShowtimeId, TicketId};
use crate::utils::split_args;

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true, override_usage = "<COMMAND> [ARGS]")]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// List the movie catalog
    Movies,
    /// Select a movie and show its showtimes
    Movie { id: MovieId },
    /// Select a showtime of the selected movie
    Showtime { id: ShowtimeId },
    /// Set the ticket holder's name
    Name {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Set the ticket holder's age and show the price
    Age {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Buy a ticket with the current selection
    Buy,
    /// Reload and list tickets
    Tickets,
    /// Search tickets by holder name
    Search {
        query: String,
        /// Ask the service instead of filtering locally
        #[arg(long)]
        remote: bool,
    },
    /// Clear the ticket search
    Clear,
    /// Update a ticket's holder name and/or age
    Update {
        id: TicketId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,
    },
    /// Delete a ticket
    Delete { id: TicketId },
    /// Show every movie with its showtimes
    Listings,
    /// Show the current selection
    Status,
    /// Reload movies, listings and tickets
    Refresh,
    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// Run the interactive shell until `quit` or end of input.
pub async fn cmd_shell() -> Result<()> {
    let mut storefront = open_storefront()?;

    println!(
        "{} (type {} for commands)",
        "Box office".cyan().bold(),
        "help".bold()
    );
    refresh(&mut storefront).await;

    let mut line = String::new();
    loop {
        print!("{} ", ">".cyan());
        io::stdout().flush()?;

        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let args = match split_args(&line) {
            Ok(args) if args.is_empty() => continue,
            Ok(args) => args,
            Err(e) => {
                report(&e);
                continue;
            }
        };

        let parsed = match ShellLine::try_parse_from(args) {
            Ok(parsed) => parsed,
            Err(e) => {
                // Help and usage errors alike
                let _ = e.print();
                continue;
            }
        };

        match run_line(&mut storefront, parsed.command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => report(&e),
        }
    }

    Ok(())
}

/// Print a failure and keep the shell running.
fn report(error: &BoxOfficeError) {
    if error.is_precondition() {
        println!("{}", error.to_string().yellow());
    } else {
        println!("{}", error.to_string().red());
    }
}

async fn refresh<A: TicketingApi>(storefront: &mut Storefront<A>) {
    for error in storefront.initialize().await {
        report(&error);
    }
}

async fn run_line<A: TicketingApi>(
    storefront: &mut Storefront<A>,
    command: ShellCommand,
) -> Result<Flow> {
    match command {
        ShellCommand::Movies => {
            let movies = storefront.load_movies().await?;
            println!("{}", movie_table(movies));
        }
        ShellCommand::Movie { id } => {
            let showtimes = storefront.select_movie(id).await?;
            if showtimes.is_empty() {
                println!("No showtimes for movie {id}");
            }
            for showtime in showtimes {
                println!("  {:>4}  {}", showtime.id, format_showtime_option(showtime));
            }
        }
        ShellCommand::Showtime { id } => match storefront.select_showtime(id) {
            Some(seats) => println!("Showtime {id}: {} seats", format_seats_colored(seats)),
            None => println!(
                "{}",
                format!("Showtime {id} is not among the loaded showtimes").yellow()
            ),
        },
        ShellCommand::Name { words } => storefront.set_holder_name(words.join(" ")),
        ShellCommand::Age { input } => {
            let price = storefront.enter_holder_age(&input);
            println!("Ticket Price: {}", format_price(f64::from(price)).green());
        }
        ShellCommand::Buy => {
            let receipt = storefront.purchase().await?;
            println!(
                "{} ticket {} for {}: {}",
                "Purchased".green(),
                format!("#{}", receipt.ticket_id).cyan(),
                receipt.holder_name,
                format_price(f64::from(receipt.price))
            );
        }
        ShellCommand::Tickets => {
            storefront.load_tickets().await?;
            println!("{}", format_ticket_view(storefront.state().ticket_view()));
        }
        ShellCommand::Search { query, remote } => {
            let view = if remote {
                storefront.search_remote(&query).await?
            } else {
                storefront.search(&query)
            };
            println!("{}", format_ticket_view(view));
        }
        ShellCommand::Clear => {
            println!("{}", format_ticket_view(storefront.search("")));
        }
        ShellCommand::Update { id, name, age } => {
            storefront.set_update_ticket_id(id);
            if let Some(name) = name {
                storefront.set_update_holder_name(name);
            }
            if let Some(age) = age {
                storefront.enter_update_age(&age);
            }
            let message = storefront.update_ticket().await?;
            println!("{}", message.green());
        }
        ShellCommand::Delete { id } => match storefront.delete_ticket(id, &PromptConfirm).await? {
            DeleteOutcome::Cancelled => println!("{}", "Cancelled".dimmed()),
            DeleteOutcome::Deleted {
                tickets_refreshed, ..
            } => {
                println!("{} ticket {}", "Deleted".green(), format!("#{id}").cyan());
                if !tickets_refreshed {
                    println!("{}", "Ticket list could not be refreshed".yellow());
                }
            }
        },
        ShellCommand::Listings => {
            let listings = storefront.load_listings().await?;
            println!("{}", format_listings(listings));
        }
        ShellCommand::Status => println!("{}", format_selection(storefront.state())),
        ShellCommand::Refresh => refresh(storefront).await,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}
