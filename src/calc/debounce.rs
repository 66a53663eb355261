use crate::calc::download::Field;

/// Default quiet period before an edit triggers a recompute
pub const DEFAULT_DEBOUNCE_MS: f64 = 300.0;

/// Delays recomputes until input has been quiet for `delay_ms`.
///
/// The clock is supplied by the caller so the type stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer {
    delay_ms: f64,
    pending: Option<(Field, f64)>,
}

impl Debouncer {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Schedule a recompute for `field`, replacing anything pending
    pub fn schedule(&mut self, field: Field, now_ms: f64) {
        self.pending = Some((field, now_ms + self.delay_ms));
    }

    /// Return the pending field once its deadline has passed
    pub fn poll(&mut self, now_ms: f64) -> Option<Field> {
        match self.pending {
            Some((field, deadline)) if now_ms >= deadline => {
                self.pending = None;
                Some(field)
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
