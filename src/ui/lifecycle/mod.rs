//! Per-screen fetch lifecycle.
//!
//! Every screen that loads remote content owns one state machine:
//!
//! ```text
//! Idle ──Start──→ Loading ──Resolved──→ Success(data)
//!                    │
//!                    └──Failed──→ Error { message }
//! ```
//!
//! `Success` and `Error` are terminal. Retrying means replacing the state
//! with a fresh one. Results are matched to the screen that asked for them
//! through a [`FetchTicket`].
//!
//! - `state.rs` - Lifecycle state enum
//! - `intent.rs` - Fetch events (Start, Resolved, Failed)
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `ticket.rs` - Generation numbers for stale-result detection

mod intent;
mod reducer;
mod state;
mod ticket;

pub use intent::GenerationIntent;
pub use reducer::GenerationReducer;
pub use state::GenerationState;
pub use ticket::{FetchTicket, TicketCounter};
