//! Handlers for the local server started by `spotex auth`.
//!
//! - [`callback`] receives Spotify's redirect, exchanges the authorization
//!   code plus PKCE verifier for a token and hands it to the waiting flow.
//! - [`health`] reports name and version, which lets `auth` users check that
//!   the callback server is listening on `SERVER_ADDRESS`.
//!
//! Routes are wired in [`crate::server::router`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
