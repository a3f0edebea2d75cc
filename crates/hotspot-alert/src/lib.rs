//! # hotspot-alert
//!
//! Per-cluster alert state machine (`none → active → acknowledged`) with a
//! hysteresis band between the escalation and de-escalation thresholds.
//! Owns alert records and hands intents to an [`AlertNotifier`].
//!
//! [`AlertNotifier`]: hotspot_core::traits::AlertNotifier

pub mod channel;
pub mod dispatcher;
pub mod intent;
pub mod track;

pub use channel::ChannelNotifier;
pub use dispatcher::AlertDispatcher;
pub use track::AlertTrack;
