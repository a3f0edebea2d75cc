mod clock;
mod notifier;

pub use clock::{Clock, ManualClock, SystemClock};
pub use notifier::{AlertNotifier, NotifierUnavailable, NullNotifier};
