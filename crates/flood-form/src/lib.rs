//! Form state for the flood intake form.
//!
//! [`FormState`] is the explicit state container owned by the top-level
//! view: the field set, the current error list and the submission state.
//! It is synchronous and single-owner; every user action is one method call.
//!
//! [`FormSession`] wraps a `FormState` with a [`Transport`] and the tokio
//! plumbing needed to run submissions in the background.
//!
//! [`Transport`]: flood_submit::Transport

mod error;
mod session;
mod state;

pub use error::{FormError, Result};
pub use session::FormSession;
pub use state::FormState;
