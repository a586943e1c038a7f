//! # pocketstatus
//!
//! Request the status banner (MOTD) of Minecraft Bedrock Edition servers over
//! the RakNet unconnected ping.
//!
//! Example
//! ```rust,no_run
//! use pocketstatus::MotdRequest;
//!
//! env_logger::init();
//! let motd = MotdRequest::new("play.example.net", 19132)
//!     .query()
//!     .expect("can't reach the server");
//! println!("motd: {}", motd);
//! ```
//! Example with continuations running on a background thread:
//! ```rust,no_run
//! use pocketstatus::MotdRequest;
//!
//! MotdRequest::new("play.example.net", 19132).query_detached(
//!     |motd| println!("motd: {}", motd),
//!     |err| eprintln!("query failed: {}", err),
//! );
//! ```

pub mod errors;

mod background;
mod packet;
mod query;

pub use background::*;
pub use query::*;
