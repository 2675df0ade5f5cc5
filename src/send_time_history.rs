/*
 *  Copyright (c) 2015 The WebRTC project authors. All Rights Reserved.
 *
 *  Use of this source code is governed by a BSD-style license
 *  that can be found in the LICENSE file in the root of the source
 *  tree. An additional intellectual property rights grant can be found
 *  in the file PATENTS.  All contributing project authors may
 *  be found in the AUTHORS file in the root of the source tree.
 */

use std::collections::{HashMap, VecDeque};

use crate::{api::units::Timestamp, BweError, Result};

/// Bounded record of send times for packets that haven't been acknowledged.
///
/// Once more than `capacity` packets are tracked the oldest inserted one is
/// forgotten. Lookups don't refresh recency.
#[derive(Debug)]
pub struct SendTimeHistory {
    capacity: usize,
    // Sequence number -> (send time, insertion id).
    send_times: HashMap<u16, (Timestamp, u64)>,
    // Insertion order. Entries whose id no longer matches `send_times` are stale
    // and skipped on eviction.
    insertion_order: VecDeque<(u16, u64)>,
    next_insertion_id: u64,
}

impl SendTimeHistory {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(BweError::ZeroCapacity);
        }

        Ok(Self {
            capacity,
            send_times: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
            next_insertion_id: 0,
        })
    }

    /// Records the send time of `sequence_number`, replacing any previous
    /// record, then evicts the oldest records above capacity.
    pub fn add_and_remove_old(&mut self, sequence_number: u16, send_time: Timestamp) {
        let id = self.next_insertion_id;
        self.next_insertion_id += 1;

        self.send_times.insert(sequence_number, (send_time, id));
        self.insertion_order.push_back((sequence_number, id));

        while self.send_times.len() > self.capacity {
            let Some((oldest, oldest_id)) = self.insertion_order.pop_front() else {
                break;
            };
            if self.is_current(oldest, oldest_id) {
                self.send_times.remove(&oldest);
            }
        }

        // Overwrites and resolves leave stale entries behind.
        if self.insertion_order.len() > 2 * self.capacity {
            let send_times = &self.send_times;
            self.insertion_order
                .retain(|&(seq, id)| matches!(send_times.get(&seq), Some(&(_, current)) if current == id));
        }
    }

    /// Removes and returns the send time of `sequence_number`. None if it was
    /// never recorded or has already been evicted or resolved.
    pub fn resolve(&mut self, sequence_number: u16) -> Option<Timestamp> {
        self.send_times
            .remove(&sequence_number)
            .map(|(send_time, _)| send_time)
    }

    /// Like [SendTimeHistory::resolve] but keeps the record.
    pub fn get(&self, sequence_number: u16) -> Option<Timestamp> {
        self.send_times
            .get(&sequence_number)
            .map(|&(send_time, _)| send_time)
    }

    pub fn contains(&self, sequence_number: u16) -> bool {
        self.send_times.contains_key(&sequence_number)
    }

    pub fn len(&self) -> usize {
        self.send_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.send_times.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn is_current(&self, sequence_number: u16, id: u64) -> bool {
        matches!(self.send_times.get(&sequence_number), Some(&(_, current)) if current == id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use test_trace::test;

    fn at(ms: i64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(SendTimeHistory::new(0).unwrap_err(), BweError::ZeroCapacity);
    }

    #[test]
    fn add_then_resolve() {
        let mut history = SendTimeHistory::new(10).unwrap();
        history.add_and_remove_old(1, at(100));
        history.add_and_remove_old(2, at(110));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1), Some(at(100)));
        assert_eq!(history.resolve(1), Some(at(100)));
        assert_eq!(history.resolve(1), None);
        assert!(!history.contains(1));
        assert!(history.contains(2));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn resolve_unknown_is_none() {
        let mut history = SendTimeHistory::new(10).unwrap();
        assert_eq!(history.resolve(42), None);
        assert!(history.is_empty());
    }

    #[test]
    fn keeps_most_recent_capacity_records() {
        const CAPACITY: usize = 5;
        let mut history = SendTimeHistory::new(CAPACITY).unwrap();

        for n in 0..20u16 {
            history.add_and_remove_old(n, at(n as i64));
            assert_eq!(history.len(), (n as usize + 1).min(CAPACITY));
        }

        for n in 0..15u16 {
            assert!(!history.contains(n), "{n} should have been evicted");
        }
        for n in 15..20u16 {
            assert_eq!(history.get(n), Some(at(n as i64)));
        }
    }

    #[test]
    fn lookup_does_not_refresh() {
        let mut history = SendTimeHistory::new(2).unwrap();
        history.add_and_remove_old(1, at(1));
        history.add_and_remove_old(2, at(2));
        assert_eq!(history.get(1), Some(at(1)));

        history.add_and_remove_old(3, at(3));
        assert!(!history.contains(1));
        assert!(history.contains(2));
        assert!(history.contains(3));
    }

    #[test]
    fn overwrite_moves_to_back() {
        let mut history = SendTimeHistory::new(2).unwrap();
        history.add_and_remove_old(1, at(1));
        history.add_and_remove_old(2, at(2));
        history.add_and_remove_old(1, at(10));
        assert_eq!(history.len(), 2);

        history.add_and_remove_old(3, at(3));
        assert!(!history.contains(2));
        assert_eq!(history.get(1), Some(at(10)));
        assert!(history.contains(3));
    }

    #[test]
    fn resolved_slots_are_reused() {
        let mut history = SendTimeHistory::new(3).unwrap();
        for n in 0..3u16 {
            history.add_and_remove_old(n, at(n as i64));
        }
        assert_eq!(history.resolve(0), Some(at(0)));

        // Room for one more without evicting anything.
        history.add_and_remove_old(3, at(3));
        assert_eq!(history.len(), 3);
        assert!(history.contains(1));
        assert!(history.contains(2));
        assert!(history.contains(3));
    }

    #[test]
    fn bounded_under_sequence_number_wraparound() {
        let mut history = SendTimeHistory::new(100).unwrap();
        let mut seq = 0u16;
        for n in 0..200_000i64 {
            history.add_and_remove_old(seq, at(n));
            seq = seq.wrapping_add(1);
            assert!(history.len() <= 100);
        }
        assert_eq!(history.len(), 100);
        assert!(history.insertion_order.len() <= 200);
        assert_eq!(history.get(seq.wrapping_sub(1)), Some(at(199_999)));
    }

    #[test]
    fn stale_queue_is_compacted() {
        let mut history = SendTimeHistory::new(4).unwrap();
        for n in 0..100i64 {
            history.add_and_remove_old(7, at(n));
        }
        assert_eq!(history.len(), 1);
        assert!(history.insertion_order.len() <= 8);
        assert_eq!(history.resolve(7), Some(at(99)));
    }
}
