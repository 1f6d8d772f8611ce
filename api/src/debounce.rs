//! Search debouncing and the platform sleep it rides on.
//!
//! A list view creates one [`Debouncer`] and funnels every keystroke
//! through it; only the call that is still the newest after the delay
//! resolves with its value, so a burst of typing produces a single fetch
//! for the final query string.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Delay between the last keystroke and the list fetch it triggers.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Single-threaded cooperative sleep: browser timer on wasm, tokio timer
/// elsewhere.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the newest generation for `value` and resolve with it after
    /// [`SEARCH_DEBOUNCE`] — unless a later call superseded it, in which
    /// case the future resolves to `None`.
    ///
    /// The generation is claimed eagerly, before the future is first
    /// polled, so overlapping calls order by call time.
    pub fn debounce(&self, value: String) -> impl Future<Output = Option<String>> + 'static {
        let claimed = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        async move {
            sleep(SEARCH_DEBOUNCE).await;
            (generation.load(Ordering::SeqCst) == claimed).then_some(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_collapse_into_one_query() {
        let debouncer = Debouncer::new();

        // "Juan" typed, then "Juan P" within the debounce window.
        let first = debouncer.debounce("Juan".to_string());
        let second = debouncer.debounce("Juan P".to_string());

        let (first, second) = futures::join!(first, second);
        assert_eq!(first, None);
        assert_eq!(second, Some("Juan P".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separated_edits_both_fire() {
        let debouncer = Debouncer::new();

        let first = debouncer.debounce("agua".to_string()).await;
        assert_eq!(first, Some("agua".to_string()));

        let second = debouncer.debounce("agua potable".to_string()).await;
        assert_eq!(second, Some("agua potable".to_string()));
    }
}
