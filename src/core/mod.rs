//! # Core Application Logic
//!
//! The country list pipeline. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Country (data model) │
//!                    │  • CountryList (state)  │
//!                    │  • Action / update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  network   │
//!     │  Adapter   │                          │ repository │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`country`]: The `Country` record and its display accessors
//! - [`details`]: Display strings for the detail view
//! - [`state`]: The `CountryList` state machine
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`config`]: Settings with layered overrides

pub mod action;
pub mod config;
pub mod country;
pub mod details;
pub mod state;
