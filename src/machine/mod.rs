//! Item state machine.
//!
//! Actions are deliberately state-tolerant: every action accepts the broadest set of source
//! states so that a bulk call over a mixed selection succeeds wherever it reasonably can.
//!
//! | Action    | Accepted from                          | Result                         |
//! |-----------|----------------------------------------|--------------------------------|
//! | `pause`   | any state except `error`               | `paused` (no-op when paused)   |
//! | `archive` | `seeding`, `stopped`                   | `stopped` + archived flag      |
//! | `delete`  | any state                              | removed from the store         |
//! | `hide`    | any state                              | added to the hidden set        |
//! | `resume`  | `paused`, `error`, unarchived `stopped`| derived active state           |

/// Actions and planned transitions.
pub mod enums;

/// The transition table.
pub mod impls;
