//! Poll, diff and notify.
//!
//! `SalaryPoller` (producer) owns the `WatchState` and pushes unseen entries
//! onto an unbounded queue; `SalaryNotifier` (consumer) drains it and sends
//! one webhook message per entry. `WatchService` spawns both and hands back a
//! `WatchHandle` to stop or await them.

mod notifier;
mod poller;
mod service;
mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use notifier::SalaryNotifier;
pub use poller::{ErrorReporter, SalaryPoller, TickOutcome};
pub use service::{WatchHandle, WatchService};
pub use state::{SeenSet, WatchState};
