/*
 *  Copyright (c) 2013 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use std::{
    sync::{
        atomic::{AtomicI64, Ordering},
        Arc,
    },
    time::Instant,
};

use super::units::{TimeDelta, Timestamp};

/// Source of time for a flow. Never read the wall clock directly, so the
/// control loop stays deterministic under simulation.
pub trait Clock: Send {
    fn now(&self) -> Timestamp;

    fn now_ms(&self) -> i64 {
        self.now().ms()
    }
}

/// Monotonic clock counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct RealTimeClock {
    start: Instant,
}

impl RealTimeClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for RealTimeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for RealTimeClock {
    fn now(&self) -> Timestamp {
        let elapsed = self.start.elapsed().as_micros();
        Timestamp::from_micros(i64::try_from(elapsed).unwrap_or(i64::MAX - 1))
    }
}

/// Manually advanced clock. Clones share the same time, so a test can keep a
/// handle while the flow owns another.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    now_us: Arc<AtomicI64>,
}

impl SimulatedClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            now_us: Arc::new(AtomicI64::new(start.us())),
        }
    }

    /// Moves the clock forward. Time never goes backwards: a negative or
    /// infinite delta is ignored.
    pub fn advance(&self, delta: TimeDelta) {
        if delta < TimeDelta::zero() || delta.is_infinite() {
            tracing::warn!("Ignoring simulated clock advance by {:?}", delta);
            return;
        }
        self.now_us.fetch_add(delta.us(), Ordering::SeqCst);
    }

    pub fn advance_ms(&self, ms: i64) {
        self.advance(TimeDelta::from_millis(ms));
    }

    pub fn set(&self, now: Timestamp) {
        self.now_us.store(now.us(), Ordering::SeqCst);
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_micros(self.now_us.load(Ordering::SeqCst))
    }
}
