use std::{fmt, rc::Rc};

use crate::value::Value;

/// A `(key, value)` pair flowing through a sequence.
pub type Pair = (Value, Value);

/// A single-pass, forward-only cursor over pairs.
///
/// Once the upstream iterator reports its end, the producer releases it and
/// stays exhausted; pulling again never restarts the source.
pub struct Producer {
    upstream: Option<Box<dyn Iterator<Item = Pair>>>,
}

impl Producer {
    pub fn new<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Pair>,
        I::IntoIter: 'static,
    {
        Producer {
            upstream: Some(Box::new(iter.into_iter())),
        }
    }

    pub fn empty() -> Self {
        Producer { upstream: None }
    }

    pub fn is_exhausted(&self) -> bool {
        self.upstream.is_none()
    }
}

impl Iterator for Producer {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        let pair = self.upstream.as_mut()?.next();
        if pair.is_none() {
            self.upstream = None;
        }
        pair
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer")
            .field("exhausted", &self.is_exhausted())
            .finish()
    }
}

/// Hands out automatic keys: one past the largest integer key seen so far,
/// starting at 0.
///
/// Once `i64::MAX` has been used or observed there is no next key, and
/// [`AutoKey::next_key`] returns `None` from then on.
#[derive(Debug)]
pub(crate) struct AutoKey {
    next: Option<i64>,
}

impl Default for AutoKey {
    fn default() -> Self {
        AutoKey { next: Some(0) }
    }
}

impl AutoKey {
    pub fn observe(&mut self, key: &Value) {
        let Some(i) = key.as_i64() else {
            return;
        };
        if let Some(next) = self.next {
            if i >= next {
                self.next = i.checked_add(1);
            }
        }
    }

    pub fn next_key(&mut self) -> Option<Value> {
        let key = self.next?;
        self.next = key.checked_add(1);
        Some(Value::from(key))
    }
}

/// Replays a materialized run of pairs. Several cursors may share one buffer.
pub(crate) struct Buffered {
    pairs: Rc<[Pair]>,
    position: usize,
}

impl Buffered {
    pub fn new(pairs: Rc<[Pair]>) -> Self {
        Buffered { pairs, position: 0 }
    }
}

impl Iterator for Buffered {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        let pair = self.pairs.get(self.position)?.clone();
        self.position += 1;
        Some(pair)
    }
}
