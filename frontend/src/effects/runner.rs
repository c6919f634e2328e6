use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::count_up::{CountUp, Frame};
use super::frames::FrameScheduler;

struct RunnerState<S: FrameScheduler> {
    counter: CountUp,
    scheduler: Rc<S>,
    pending: Option<S::Handle>,
    on_value: Rc<dyn Fn(u32)>,
}

/// Drives a [`CountUp`] with real frames and reports every new value.
///
/// The runner owns the pending frame. Cancelling (or dropping) it drops
/// that frame, so nothing is reported after teardown.
pub struct CountUpRunner<S: FrameScheduler> {
    state: Rc<RefCell<RunnerState<S>>>,
}

impl<S: FrameScheduler> CountUpRunner<S> {
    pub fn new(counter: CountUp, scheduler: S, on_value: impl Fn(u32) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(RunnerState {
                counter,
                scheduler: Rc::new(scheduler),
                pending: None,
                on_value: Rc::new(on_value),
            })),
        }
    }

    /// Returns true if this observation started the animation, after which
    /// the caller should stop observing the region.
    pub fn notify_visibility(&self, visible_ratio: f64) -> bool {
        let started = {
            let mut state = self.state.borrow_mut();
            let now = state.scheduler.now();
            state.counter.observe(visible_ratio, now)
        };
        if started {
            debug!(
                "count-up to {} started",
                self.state.borrow().counter.target()
            );
            schedule(&self.state);
        }
        started
    }

    pub fn value(&self) -> u32 {
        self.state.borrow().counter.value()
    }

    pub fn is_animating(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn cancel(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.counter.cancel();
            state.pending.take()
        };
        drop(pending);
    }
}

impl<S: FrameScheduler> Drop for CountUpRunner<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule<S: FrameScheduler>(state: &Rc<RefCell<RunnerState<S>>>) {
    let weak = Rc::downgrade(state);
    let scheduler = state.borrow().scheduler.clone();
    let handle = scheduler.request_frame(Box::new(move |timestamp| {
        if let Some(state) = weak.upgrade() {
            on_frame(&state, timestamp);
        }
    }));
    state.borrow_mut().pending = Some(handle);
}

fn on_frame<S: FrameScheduler>(state: &Rc<RefCell<RunnerState<S>>>, timestamp: f64) {
    let (frame, on_value, fired) = {
        let mut state = state.borrow_mut();
        let fired = state.pending.take();
        (state.counter.frame(timestamp), state.on_value.clone(), fired)
    };
    drop(fired);

    match frame {
        Frame::Running(value) => {
            on_value(value);
            schedule(state);
        }
        Frame::Finished(value) => on_value(value),
        Frame::Idle => {}
    }
}
