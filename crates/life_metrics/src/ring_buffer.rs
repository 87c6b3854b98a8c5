//! Fixed-capacity ring buffer for rolling statistics

pub struct RingBuffer<T> {
    samples: Vec<T>,
    capacity: usize,
    index: usize,
}

impl<T: Clone> RingBuffer<T> {
    /// A zero capacity is bumped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            index: 0,
        }
    }

    /// Append a sample, returning the evicted oldest one once full.
    pub fn push(&mut self, sample: T) -> Option<T> {
        let evicted = if self.samples.len() < self.capacity {
            self.samples.push(sample);
            None
        } else {
            Some(std::mem::replace(&mut self.samples[self.index], sample))
        };
        self.index = (self.index + 1) % self.capacity;
        evicted
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.index = 0;
    }

    pub fn latest(&self) -> Option<&T> {
        if self.samples.is_empty() {
            return None;
        }
        self.samples.get((self.index + self.capacity - 1) % self.capacity)
    }

    pub fn oldest(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let split = if self.is_full() { self.index } else { 0 };
        let (newer, older) = self.samples.split_at(split);
        older.iter().chain(newer.iter())
    }
}

// Specialize for f64 (frame rates)
impl RingBuffer<f64> {
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }

        let sum: f64 = self.samples.iter().sum();
        sum / self.samples.len() as f64
    }

    pub fn min_max(&self) -> (f64, f64) {
        if self.samples.is_empty() {
            return (0.0, 0.0);
        }

        self.samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &sample| {
                (min.min(sample), max.max(sample))
            })
    }
}
