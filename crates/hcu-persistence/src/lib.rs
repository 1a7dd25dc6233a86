//! Persistent storage for configuration wizard sessions.
//!
//! A session is saved as a JSON [`SessionFile`] holding the user, the current
//! wizard step, the committed configuration and the fingerprint of the unit
//! catalog it was built against. Writes are atomic; loads reject files with
//! a newer `schema_version`.

mod error;
mod io;
mod types;

pub use error::{PersistenceError, Result};
pub use io::{load_session, load_session_if_exists, save_session};
pub use types::{CURRENT_SCHEMA_VERSION, SessionFile};
