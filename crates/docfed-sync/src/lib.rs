//! docfed sync — environment-sync settings for a platform integration.
//!
//! Mirrors a connection's `{production, preview, development}` sync
//! flags locally and submits the full replacement list on every change.
//!
//! # Modules
//!
//! - [`targets`]: sync target enum and set
//! - [`form`]: the settings form state machine
//! - [`client`]: integration update endpoint (trait + HTTP + mock)

pub mod client;
pub mod form;
pub mod targets;

pub use client::{HttpIntegrationApi, IntegrationApi, UpdateConnectionRequest};
pub use form::EnvSyncForm;
pub use targets::{SyncTarget, SyncTargetSet};
