use gloo_render::{request_animation_frame, AnimationFrame};

/// Source of time and animation frames.
///
/// Dropping the returned handle must cancel the frame if it has not fired
/// yet; runners rely on that for teardown.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    /// Milliseconds on the same clock as the frame timestamps.
    fn now(&self) -> f64;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// `requestAnimationFrame` and `performance.now()` of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = AnimationFrame;

    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_default()
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

#[cfg(test)]
pub mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::FrameScheduler;

    type Pending = (u64, Box<dyn FnOnce(f64)>);

    #[derive(Default)]
    struct State {
        now: f64,
        next_id: u64,
        queue: Vec<Pending>,
    }

    /// Frame scheduler driven by hand from tests.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        state: Rc<RefCell<State>>,
    }

    pub struct ManualHandle {
        id: u64,
        state: Weak<RefCell<State>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(state) = self.state.upgrade() {
                state.borrow_mut().queue.retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl ManualFrames {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pending(&self) -> usize {
            self.state.borrow().queue.len()
        }

        /// Moves the clock to `now` and fires every frame that was queued
        /// before the call.
        pub fn advance_to(&self, now: f64) {
            let due = {
                let mut state = self.state.borrow_mut();
                state.now = now;
                std::mem::take(&mut state.queue)
            };
            for (_, callback) in due {
                callback(now);
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn now(&self) -> f64 {
            self.state.borrow().now
        }

        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            state.queue.push((id, callback));
            ManualHandle {
                id,
                state: Rc::downgrade(&self.state),
            }
        }
    }

    mod tests {
        use std::cell::Cell;

        use super::*;

        #[test]
        fn dropped_handle_never_fires() {
            let frames = ManualFrames::new();
            let fired = Rc::new(Cell::new(false));
            let handle = {
                let fired = fired.clone();
                frames.request_frame(Box::new(move |_| fired.set(true)))
            };
            assert_eq!(frames.pending(), 1);
            drop(handle);
            assert_eq!(frames.pending(), 0);
            frames.advance_to(16.0);
            assert!(!fired.get());
        }

        #[test]
        fn frames_see_the_advanced_clock() {
            let frames = ManualFrames::new();
            let seen = Rc::new(Cell::new(0.0));
            let _handle = {
                let seen = seen.clone();
                frames.request_frame(Box::new(move |t| seen.set(t)))
            };
            frames.advance_to(42.0);
            assert_eq!(seen.get(), 42.0);
            assert_eq!(frames.now(), 42.0);
        }
    }
}
