use hotspot_core::ids::AlertId;
use hotspot_core::models::AlertState;
use serde::{Deserialize, Serialize};

/// Alert state of one cluster plus the alert raised for the current
/// activation period, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AlertTrack {
    pub state: AlertState,
    pub current_alert: Option<AlertId>,
}

impl AlertTrack {
    pub fn is_open(&self) -> bool {
        self.state != AlertState::None
    }

    /// Ordering used when absorbed tracks compete for a merge survivor.
    pub(crate) fn rank(&self) -> u8 {
        match self.state {
            AlertState::Active => 2,
            AlertState::Acknowledged => 1,
            AlertState::None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_outranks_acknowledged() {
        let active = AlertTrack {
            state: AlertState::Active,
            current_alert: None,
        };
        let acked = AlertTrack {
            state: AlertState::Acknowledged,
            current_alert: None,
        };
        assert!(active.rank() > acked.rank());
        assert!(acked.rank() > AlertTrack::default().rank());
        assert!(!AlertTrack::default().is_open());
    }
}
