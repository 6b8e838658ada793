//! Adapters: concrete implementations of the port traits for host runs.
//!
//! | Adapter    | Implements | Connects to               |
//! |------------|------------|---------------------------|
//! | `log_sink` | EventSink  | `log` facade              |
//! | `sim_pin`  | OutputPin  | In-memory pin, logs edges |

pub mod log_sink;
pub mod sim_pin;
