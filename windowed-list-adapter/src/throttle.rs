/// One frame at 60 Hz, in milliseconds.
pub const FRAME_MS: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrottleState {
    /// No cooldown pending; the next event is accepted.
    Idle,
    /// A cooldown is pending until `until_ms`; events are dropped.
    Cooling { until_ms: u64 },
    /// Torn down. All events are dropped and the state never changes again.
    Disposed,
}

/// A leading-edge throttle for scroll events.
///
/// The first event after a quiet period is accepted and starts a cooldown; every event that
/// arrives before the cooldown expires is dropped. Dropped events are not queued or replayed, so
/// the accepted values are a strict, ordered sub-sequence of the input.
///
/// The throttle holds no timer of its own. The adapter supplies the clock as `now_ms` and either
/// calls [`Self::poll`] from its frame loop or lets [`Self::accept`] poll on the way in.
#[derive(Clone, Debug)]
pub struct LeadingEdgeThrottle {
    cooldown_ms: u64,
    state: ThrottleState,
    accepted: u64,
    dropped: u64,
}

impl Default for LeadingEdgeThrottle {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadingEdgeThrottle {
    pub fn new() -> Self {
        Self::with_cooldown_ms(FRAME_MS)
    }

    pub fn with_cooldown_ms(cooldown_ms: u64) -> Self {
        Self {
            cooldown_ms,
            state: ThrottleState::Idle,
            accepted: 0,
            dropped: 0,
        }
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    pub fn state(&self) -> ThrottleState {
        self.state
    }

    pub fn is_cooling(&self) -> bool {
        matches!(self.state, ThrottleState::Cooling { .. })
    }

    pub fn is_disposed(&self) -> bool {
        self.state == ThrottleState::Disposed
    }

    /// Fires the cooldown timer if its deadline has passed.
    ///
    /// Returns `true` when this call moved the throttle from `Cooling` back to `Idle`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let ThrottleState::Cooling { until_ms } = self.state else {
            return false;
        };
        if now_ms < until_ms {
            return false;
        }
        vtrace!(now_ms, until_ms, "LeadingEdgeThrottle: cooldown elapsed");
        self.state = ThrottleState::Idle;
        true
    }

    /// Offers an event at `now_ms`. Returns `true` if the caller should act on it.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        self.poll(now_ms);
        match self.state {
            ThrottleState::Idle => {
                self.state = ThrottleState::Cooling {
                    until_ms: now_ms.saturating_add(self.cooldown_ms),
                };
                self.accepted = self.accepted.saturating_add(1);
                true
            }
            ThrottleState::Cooling { .. } => {
                self.dropped = self.dropped.saturating_add(1);
                false
            }
            ThrottleState::Disposed => false,
        }
    }

    /// Cancels any pending cooldown and stops accepting events for good.
    pub fn dispose(&mut self) {
        if self.is_cooling() {
            vdebug!(state = ?self.state, "LeadingEdgeThrottle: cancelled pending cooldown");
        }
        self.state = ThrottleState::Disposed;
    }

    /// Number of events acted on.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Number of events dropped during a cooldown.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}
