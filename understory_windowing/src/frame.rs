// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame coalescing of scroll notifications.
//!
//! Scroll hosts can fire many notifications between two display refreshes.
//! [`ScrollCoalescer`] turns any burst of them into at most one
//! recomputation per frame: the first notification while idle requests a
//! frame from a [`FrameScheduler`], later ones only overwrite the stored
//! offset, and the frame callback hands back whichever offset arrived last.
//!
//! ```rust
//! use understory_windowing::{FrameScheduler, ScrollCoalescer};
//!
//! #[derive(Debug, Default)]
//! struct Frames {
//!     next: u32,
//! }
//!
//! impl FrameScheduler for Frames {
//!     type Token = u32;
//!
//!     fn request_frame(&mut self) -> Option<u32> {
//!         self.next += 1;
//!         Some(self.next)
//!     }
//!
//!     fn cancel_frame(&mut self, _token: u32) {}
//! }
//!
//! let mut frames = Frames::default();
//! let mut scroll = ScrollCoalescer::new(0.0_f64);
//!
//! for offset in [10.0, 20.0, 30.0] {
//!     // Deferred to the frame: nothing to recompute yet.
//!     assert_eq!(scroll.notify(offset, &mut frames), None);
//! }
//! assert!(scroll.is_pending());
//!
//! // The frame callback yields only the latest offset.
//! assert_eq!(scroll.on_frame(1), Some(30.0));
//! assert!(!scroll.is_pending());
//! ```

use core::fmt::Debug;

/// Source of "next display refresh" callbacks.
///
/// Browser hosts wrap `requestAnimationFrame` here, native hosts their
/// compositor's frame clock, and hosts with neither a timer. The host calls
/// back into the owning controller with the returned token when the frame
/// arrives.
pub trait FrameScheduler {
    /// Identifies one requested frame.
    type Token: Copy + Eq + Debug;

    /// Requests a callback at the next frame boundary.
    ///
    /// Returns `None` when no scheduling primitive exists (headless and
    /// server contexts); the caller then recomputes synchronously.
    fn request_frame(&mut self) -> Option<Self::Token>;

    /// Cancels a frame requested earlier. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: Self::Token);
}

/// Scheduler with no frame primitive: every notification recomputes
/// synchronously.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Immediate;

impl FrameScheduler for Immediate {
    type Token = ();

    fn request_frame(&mut self) -> Option<()> {
        None
    }

    fn cancel_frame(&mut self, _token: ()) {}
}

/// State of a [`ScrollCoalescer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollPhase<T> {
    /// No recomputation is scheduled.
    Idle,
    /// A frame was requested and will recompute with the latest offset.
    Pending(T),
    /// The owner was torn down; notifications are ignored.
    TornDown,
}

/// Tagged state machine that coalesces scroll notifications per frame.
///
/// `O` is the offset type (a scalar for lists, a `Vec2` for grids) and `T` the
/// scheduler's frame token.
#[derive(Clone, Debug)]
pub struct ScrollCoalescer<O, T> {
    latest: O,
    phase: ScrollPhase<T>,
}

impl<O: Copy, T: Copy + Eq + Debug> ScrollCoalescer<O, T> {
    /// Creates an idle coalescer starting at `initial`.
    #[must_use]
    pub fn new(initial: O) -> Self {
        Self {
            latest: initial,
            phase: ScrollPhase::Idle,
        }
    }

    /// The most recently notified offset.
    #[must_use]
    pub fn latest(&self) -> O {
        self.latest
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase<T> {
        self.phase
    }

    /// Returns `true` while a frame is outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, ScrollPhase::Pending(_))
    }

    /// Returns `true` after [`teardown`](Self::teardown).
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        matches!(self.phase, ScrollPhase::TornDown)
    }

    /// Records a scroll notification.
    ///
    /// Returns the offset to recompute with right now when the scheduler has
    /// no frame primitive; otherwise `None`, and the recomputation happens in
    /// [`on_frame`](Self::on_frame).
    pub fn notify<F>(&mut self, offset: O, scheduler: &mut F) -> Option<O>
    where
        F: FrameScheduler<Token = T>,
    {
        match self.phase {
            ScrollPhase::TornDown => None,
            ScrollPhase::Pending(_) => {
                self.latest = offset;
                None
            }
            ScrollPhase::Idle => {
                self.latest = offset;
                match scheduler.request_frame() {
                    Some(token) => {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(?token, "scheduled window recomputation");
                        self.phase = ScrollPhase::Pending(token);
                        None
                    }
                    None => Some(offset),
                }
            }
        }
    }

    /// Handles the frame callback for `token`.
    ///
    /// Returns the latest offset when `token` is the outstanding frame. Stale
    /// or unknown tokens, and any callback after teardown, yield `None`.
    pub fn on_frame(&mut self, token: T) -> Option<O> {
        match self.phase {
            ScrollPhase::Pending(pending) if pending == token => {
                self.phase = ScrollPhase::Idle;
                Some(self.latest)
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::trace!(?token, phase = ?self.phase, "ignored stale frame");
                None
            }
        }
    }

    /// Cancels any outstanding frame and returns to idle.
    ///
    /// Used when an immediate recomputation already consumed the latest
    /// offset. Returns `false` after teardown.
    pub fn flush<F>(&mut self, scheduler: &mut F) -> bool
    where
        F: FrameScheduler<Token = T>,
    {
        match self.phase {
            ScrollPhase::TornDown => false,
            ScrollPhase::Pending(token) => {
                scheduler.cancel_frame(token);
                self.phase = ScrollPhase::Idle;
                true
            }
            ScrollPhase::Idle => true,
        }
    }

    /// Cancels any outstanding frame and stops accepting notifications.
    pub fn teardown<F>(&mut self, scheduler: &mut F)
    where
        F: FrameScheduler<Token = T>,
    {
        if let ScrollPhase::Pending(token) = self.phase {
            scheduler.cancel_frame(token);
        }
        self.phase = ScrollPhase::TornDown;
    }
}
