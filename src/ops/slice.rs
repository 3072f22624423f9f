use crate::{
    error::{Error, Result},
    sequence::{Pair, Producer, Sequence},
};

/// Emits the pairs at positions `start..end`, counted in traversal order.
struct Slice {
    upstream: Producer,
    pulled: u64,
    start: u64,
    end: u64,
}

impl Iterator for Slice {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        while self.pulled < self.end {
            let pair = self.upstream.next()?;
            self.pulled += 1;
            if self.pulled > self.start {
                return Some(pair);
            }
        }
        // Release the upstream; nothing past `end` is ever pulled.
        self.upstream = Producer::empty();
        None
    }
}

impl Sequence {
    /// Keeps the pairs whose position `p` satisfies `start <= p < end`.
    ///
    /// Positions count pairs, not keys. The upstream is never pulled past
    /// position `end`.
    pub fn slice(self, start: i64, end: i64) -> Result<Sequence> {
        let start_position = u64::try_from(start).map_err(|_| {
            Error::new_invalid_range(format!("start position {start} is negative"))
        })?;
        if end < start {
            return Err(Error::new_invalid_range(format!(
                "end position {end} is before start position {start}"
            )));
        }
        let end_position = u64::try_from(end).map_err(|_| {
            Error::new_invalid_range(format!("end position {end} is negative"))
        })?;
        Ok(Sequence::from_pairs(Slice {
            upstream: self.into_producer(),
            pulled: 0,
            start: start_position,
            end: end_position,
        }))
    }

    /// The first `amount` pairs.
    pub fn take(self, amount: i64) -> Result<Sequence> {
        if amount < 0 {
            return Err(Error::new_invalid_range(format!(
                "amount {amount} must be a non-negative integer"
            )));
        }
        self.slice(0, amount)
    }

    pub fn limit(self, amount: i64) -> Result<Sequence> {
        self.take(amount)
    }
}
