#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod session;
#[cfg(feature = "std")]
mod shared;
mod sink;

pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use session::*;
#[cfg(feature = "std")]
pub use shared::SharedSession;
pub use sink::*;
