//! Browser capabilities the core logic depends on, behind small seams so the
//! controllers and gateway run headless in tests.

use std::cell::Cell;
use std::rc::Rc;

/// Blocking user dialogs.
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Process-wide busy flag shared by every API call.
///
/// Counts in-flight calls and stays visible until the last one settles, so
/// overlapping requests cannot hide it early.
#[derive(Clone, Default)]
pub struct LoadingIndicator {
    in_flight: Rc<Cell<usize>>,
    on_change: Option<Rc<dyn Fn(bool)>>,
}

impl LoadingIndicator {
    pub fn new(on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            in_flight: Rc::new(Cell::new(0)),
            on_change: Some(Rc::new(on_change)),
        }
    }

    /// Marks one call as in flight until the guard drops.
    pub fn begin(&self) -> LoadingGuard {
        let n = self.in_flight.get();
        self.in_flight.set(n + 1);
        if n == 0 {
            self.notify(true);
        }
        LoadingGuard {
            indicator: self.clone(),
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.in_flight.get() > 0
    }

    fn finish(&self) {
        let n = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(n);
        if n == 0 {
            self.notify(false);
        }
    }

    fn notify(&self, visible: bool) {
        if let Some(f) = &self.on_change {
            f(visible);
        }
    }
}

#[must_use = "the indicator hides as soon as the guard is dropped"]
pub struct LoadingGuard {
    indicator: LoadingIndicator,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.indicator.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_indicator_tracks_single_call() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let ind = LoadingIndicator::new(move |v| log.borrow_mut().push(v));

        assert!(!ind.is_visible());
        {
            let _g = ind.begin();
            assert!(ind.is_visible());
        }
        assert!(!ind.is_visible());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_overlapping_calls_keep_indicator_visible() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let ind = LoadingIndicator::new(move |v| log.borrow_mut().push(v));

        let first = ind.begin();
        let second = ind.begin();
        drop(first);
        // First settle must not hide while the second is still running.
        assert!(ind.is_visible());
        drop(second);
        assert!(!ind.is_visible());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
