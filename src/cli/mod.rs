//! # CLI Module
//!
//! Terminal front end for vibefm. Every command builds its clients from
//! [`Settings`](crate::config::Settings), runs one or more core operations and
//! prints the outcome with the crate's output macros.
//!
//! ## Commands
//!
//! - [`auth`] - authorize with Spotify through the browser and print the token
//! - [`login_url`] - print the Spotify authorization URL
//! - [`serve`] - run the HTTP gateway
//! - [`history`] - show deduplicated recently played tracks
//! - [`recommend`] - show Claude's recommendations for the recent tracks
//!
//! ## Typical session
//!
//! ```bash
//! vibefm auth                                   # prints an access token
//! export SPOTIFY_ACCESS_TOKEN=BQC...
//! vibefm history --limit 30
//! vibefm recommend
//! ```
//!
//! Failures are fatal here: the command prints what went wrong, with a hint
//! when the error kind suggests one, and exits with status 1.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, error::Error, warning};

mod auth;
mod history;
mod recommend;
mod serve;

pub use auth::auth;
pub use auth::login_url;
pub use history::history;
pub use recommend::recommend;
pub use serve::serve;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Prints `err` with a hint for the caller and exits.
fn fail(err: Error) -> ! {
    match &err {
        Error::ProviderAuth => {
            error!("{}\nRun vibefm auth to get a fresh token.", err)
        }
        Error::ModelRateLimit(_) => {
            error!("{}\nWait a moment and run the command again.", err)
        }
        Error::MalformedAiResponse { raw, .. } => {
            warning!("Raw model response:\n{}", raw);
            error!("{}\nRun the command again to regenerate.", err)
        }
        Error::Config(_) | Error::ModelAuth(_) => error!(
            "{}\nCheck your settings in {}.",
            err,
            crate::config::env_path().display()
        ),
        _ => error!("{}", err),
    }
}
