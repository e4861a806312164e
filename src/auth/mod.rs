//! Session persistence, reactive auth state, and route gating.
//!
//! DESIGN
//! ======
//! The persisted session is owned by an injectable [`session::SessionStore`]
//! rather than ambient globals. [`context::Auth`] holds the one reactive
//! mirror of it (one writer, many readers); [`guard::RequireAuth`] gates
//! routes off that mirror. Token expiry is decided locally in
//! [`token`] with no server round trip.

pub mod context;
pub mod guard;
pub mod role;
pub mod session;
pub mod token;
