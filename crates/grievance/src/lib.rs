//! Grievance - student complaint and feedback portal.
//!
//! Dioxus front end over [`grievance_core`]. Students submit complaints and
//! rate the service; administrators triage pending complaints, resolve them
//! and watch the mix of priorities and feedback.
//!
//! # Architecture
//!
//! - **Gateway**: [`gateway::HttpGateway`] talks JSON to the portal backend
//! - **Session**: [`storage::PlatformSessionStore`] keeps the signed-in email
//!   (localStorage on web, a JSON file on desktop)
//! - **State**: one shared [`state::PlatformPortal`] plus a published
//!   [`state::PortalSnapshot`] the components render from
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default `web` feature
//! - **Desktop**: `desktop` feature, session file under the user's data directory

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod config;
pub mod gateway;
pub mod state;
pub mod storage;
pub mod utils;
