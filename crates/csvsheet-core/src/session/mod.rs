//! Session state and logic (UI-agnostic).

mod eval;
mod io;
mod state;

pub use state::{Session, SessionOptions};
