//! Visibility observation for the "load more" sentinel.
//!
//! An observer is a scoped resource: [`SentinelSlot`] holds at most one live
//! [`ObservationHandle`] and disconnects it on every path that disarms the
//! sentinel, including drop.

use log::trace;

/// A live observation of the sentinel. Must stop reporting after `disconnect`.
pub trait ObservationHandle {
    fn disconnect(&mut self);
}

/// Creates observations of the sentinel element.
pub trait ViewportObserver {
    type Handle: ObservationHandle;

    /// Start observing; intersections at or above `threshold` should be
    /// reported to the list as `sentinel_intersected`.
    fn observe(&mut self, threshold: f32) -> Self::Handle;
}

/// Holds the current observation, if any.
pub struct SentinelSlot<O: ViewportObserver> {
    observer: O,
    threshold: f32,
    active: Option<O::Handle>,
}

impl<O: ViewportObserver> SentinelSlot<O> {
    pub fn new(observer: O, threshold: f32) -> Self {
        Self {
            observer,
            threshold,
            active: None,
        }
    }

    /// Acquire or release the observation so it matches `armed`.
    pub fn sync(&mut self, armed: bool) {
        match (armed, self.active.is_some()) {
            (true, false) => {
                trace!("Sentinel armed, creating observer");
                self.active = Some(self.observer.observe(self.threshold));
            }
            (false, true) => self.release(),
            _ => {}
        }
    }

    pub fn release(&mut self) {
        if let Some(mut handle) = self.active.take() {
            trace!("Sentinel disarmed, disconnecting observer");
            handle.disconnect();
        }
    }

    pub fn is_observing(&self) -> bool {
        self.active.is_some()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }
}

impl<O: ViewportObserver> Drop for SentinelSlot<O> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Observer for front-ends that report intersections themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ObservationHandle for () {
    fn disconnect(&mut self) {}
}

impl ViewportObserver for NoopObserver {
    type Handle = ();

    fn observe(&mut self, _threshold: f32) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts observer lifecycles; shared so tests can inspect after moves.
    #[derive(Debug, Default, Clone)]
    pub(crate) struct CountingObserver {
        pub created: Rc<Cell<usize>>,
        pub disconnected: Rc<Cell<usize>>,
    }

    impl CountingObserver {
        pub(crate) fn live(&self) -> usize {
            self.created.get() - self.disconnected.get()
        }
    }

    pub(crate) struct CountingHandle {
        disconnected: Rc<Cell<usize>>,
    }

    impl ObservationHandle for CountingHandle {
        fn disconnect(&mut self) {
            self.disconnected.set(self.disconnected.get() + 1);
        }
    }

    impl ViewportObserver for CountingObserver {
        type Handle = CountingHandle;

        fn observe(&mut self, threshold: f32) -> CountingHandle {
            assert!((threshold - 0.1).abs() < f32::EPSILON);
            self.created.set(self.created.get() + 1);
            CountingHandle {
                disconnected: Rc::clone(&self.disconnected),
            }
        }
    }

    #[test]
    fn test_sync_acquires_once_and_releases() {
        let observer = CountingObserver::default();
        let mut slot = SentinelSlot::new(observer.clone(), 0.1);

        slot.sync(true);
        slot.sync(true);
        assert_eq!(observer.created.get(), 1);
        assert!(slot.is_observing());

        slot.sync(false);
        assert_eq!(observer.disconnected.get(), 1);
        assert!(!slot.is_observing());

        slot.sync(true);
        assert_eq!(observer.created.get(), 2);
        assert_eq!(observer.live(), 1);
    }

    #[test]
    fn test_drop_releases_live_observer() {
        let observer = CountingObserver::default();
        {
            let mut slot = SentinelSlot::new(observer.clone(), 0.1);
            slot.sync(true);
        }
        assert_eq!(observer.live(), 0);
    }
}
