use crate::models::AlertIntent;

/// The notifier could not accept an intent (queue closed, backend down).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("notifier unavailable: {reason}")]
pub struct NotifierUnavailable {
    pub reason: String,
}

/// Outbound notification collaborator.
///
/// Called while a species partition is locked, so implementations must not
/// block: queue the intent and return. Delivery retries belong to the
/// implementation; acknowledgments come back through the engine's
/// `confirm_delivery`. A hand-off error leaves the alert `pending` until an
/// explicit resend.
pub trait AlertNotifier: Send + Sync {
    fn notify(&self, intent: AlertIntent) -> Result<(), NotifierUnavailable>;
}

/// Discards every intent.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl AlertNotifier for NullNotifier {
    fn notify(&self, _intent: AlertIntent) -> Result<(), NotifierUnavailable> {
        Ok(())
    }
}
