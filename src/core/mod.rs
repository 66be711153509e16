//! # Core Application Logic
//!
//! This module contains the bookings business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • BookingStore         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No disk.  │
//!                    └───────────┬─────────────┘
//!                                │ snapshots
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`booking`]: `Booking`, `DateRange`, `BookingId`, `Entry`
//! - [`store`]: the versioned booking store and its subscriptions
//! - [`draft`]: add-booking form data and its validation
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`dates`]: timestamp conversion and formatting
//! - [`config`]: config file, env and CLI resolution (the only module
//!   that touches the filesystem)

pub mod action;
pub mod booking;
pub mod config;
pub mod dates;
pub mod draft;
pub mod state;
pub mod store;
