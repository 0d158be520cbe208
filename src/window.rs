use std::error::Error;

use parking_lot::Mutex;
use ringbuf::traits::{Consumer, Observer, Producer};
use ringbuf::HeapRb;

/// A sliding window over an integer stream with cheap median lookup,
/// safe for concurrent use.
///
/// The window keeps the newest `size` values in a fixed-capacity FIFO ring
/// and mirrors them in a sorted vector, so the median is read straight out
/// of the middle of the mirror. An insertion costs a binary search plus a
/// shift bounded by the window size; a median read is O(1).
///
/// Every operation takes the internal mutex for its full duration, so one
/// instance can be shared between threads through an [`std::sync::Arc`].
pub struct Window {
    inner: Mutex<Inner>,
}

struct Inner {
    buffer: HeapRb<i64>,
    sorted: Vec<i64>,
}

impl Inner {
    /// Adds a value to the FIFO ring, returning the oldest value once the
    /// ring runs at capacity.
    ///
    /// The "nothing evicted" case must stay a real `None`. Reusing a numeric
    /// default here would delete a legitimately stored equal value from the
    /// mirror during the initial fill.
    fn push(&mut self, value: i64) -> Option<i64> {
        let evicted = if self.buffer.is_full() {
            self.buffer.try_pop()
        } else {
            None
        };
        self.buffer
            .try_push(value)
            .expect("ring has a free slot after eviction");
        evicted
    }

    /// Replays a ring update on the sorted mirror: removes one occurrence of
    /// the evicted value, then inserts the new value in order.
    fn apply(&mut self, evicted: Option<i64>, inserted: i64) {
        if let Some(old) = evicted {
            // First index holding a value >= old. With duplicates any one
            // occurrence will do, the multiset stays equal to the ring.
            let at = self.sorted.partition_point(|&v| v < old);
            if at < self.sorted.len() && self.sorted[at] == old {
                self.sorted.remove(at);
            }
        }
        // First index holding a value strictly greater, so a fresh duplicate
        // lands after the equal values already present.
        let at = self.sorted.partition_point(|&v| v <= inserted);
        self.sorted.insert(at, inserted);
    }

    /// Median of the mirror, `None` while it holds fewer than two values.
    ///
    /// For an even count this is `(a + b) / 2` over the two middle values,
    /// truncating toward zero as Rust integer division does.
    fn median(&self) -> Option<i64> {
        let n = self.sorted.len();
        if n < 2 {
            return None;
        }
        if n % 2 == 0 {
            Some((self.sorted[n / 2 - 1] + self.sorted[n / 2]) / 2)
        } else {
            Some(self.sorted[(n - 1) / 2])
        }
    }
}

impl Window {
    /// Creates a window holding up to `size` values.
    ///
    /// `size` zero is rejected, a window that can hold nothing has no
    /// meaningful median.
    pub fn new(size: usize) -> Result<Self, Box<dyn Error + Send + Sync>> {
        if size == 0 {
            return Err(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "window size must be at least 1",
            )));
        }
        Ok(Self {
            inner: Mutex::new(Inner {
                buffer: HeapRb::new(size),
                sorted: Vec::with_capacity(size),
            }),
        })
    }

    /// Adds a value to the window, evicting the oldest one once full.
    pub fn add_val(&self, value: i64) {
        let mut inner = self.inner.lock();
        let evicted = inner.push(value);
        inner.apply(evicted, value);
    }

    /// Returns the current median, `None` until the window holds at least
    /// two values.
    pub fn median(&self) -> Option<i64> {
        self.inner.lock().median()
    }

    /// Ring contents oldest to newest, and the sorted mirror.
    #[cfg(test)]
    fn snapshot(&self) -> (Vec<i64>, Vec<i64>) {
        let inner = self.inner.lock();
        (inner.buffer.iter().copied().collect(), inner.sorted.clone())
    }
}
