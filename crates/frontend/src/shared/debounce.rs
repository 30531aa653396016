use gloo_timers::callback::Timeout;

/// Задержка поиска после последнего ввода
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Single pending browser timer.
///
/// `arm` cancels whatever is pending and schedules one callback; dropping
/// the timer (component teardown) cancels it as well.
#[derive(Default)]
pub struct DebounceTimer {
    pending: Option<Timeout>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn arm<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            let _ = timeout.cancel();
        }
    }
}
