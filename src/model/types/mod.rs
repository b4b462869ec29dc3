#[cfg(feature = "ssr")]
mod app_state;
#[cfg(feature = "ssr")]
pub use app_state::*;

#[cfg(feature = "ssr")]
mod db;
#[cfg(feature = "ssr")]
pub use db::*;

mod candidate;
pub use candidate::*;

mod client;
pub use client::*;

mod error;
pub use error::*;

mod request_sequence;
pub use request_sequence::*;

mod tally;
pub use tally::*;
