//! # Grievance Core
//!
//! Platform-independent library behind the student complaint and feedback
//! portal. Everything that can be decided without a browser lives here, so the
//! Dioxus front end (`grievance`) only turns view models into DOM nodes.
//!
//! ## Modules
//!
//! - [`model`] - Complaint, feedback, stats and login types (closed enums at the wire boundary)
//! - [`gateway`] - Backend access trait plus an in-memory backend for tests and demos
//! - [`mirror`] - Last-fetched snapshot of complaints and feedback, refreshed wholesale
//! - [`filter`] - Search, date, department and ownership filters
//! - [`view`] - View models: triage board, chart wedges, history lists, student views, notifications
//! - [`forms`] - Form validation and the star/emoji rating selector
//! - [`session`] - Session identity storage trait
//! - [`portal`] - The application-state object and its command handlers
//! - [`config`] - Production constants
//! - [`error`] - Error types
//!
//! ## Flow
//!
//! ```ignore
//! use grievance_core::gateway::InMemoryGateway;
//! use grievance_core::portal::Portal;
//! use grievance_core::session::InMemorySessionStore;
//!
//! let mut portal = Portal::new(InMemoryGateway::new(), InMemorySessionStore::new());
//! portal.load().await;
//! let board = portal.triage_board();
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod gateway;
pub mod mirror;
pub mod model;
pub mod portal;
pub mod session;
pub mod view;

pub use error::{GatewayError, PortalError, SessionError, ValidationError};
pub use model::{
    Complaint, ComplaintId, ComplaintStatus, Feedback, FeedbackCategory, Priority, Rating, Role,
    Timestamp,
};
pub use portal::Portal;
