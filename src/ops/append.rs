use crate::{
    error::{Error, Result},
    sequence::{AutoKey, Pair, Producer, Sequence},
    value::Value,
};

/// A null key means "no key". Anything else must be scalar.
fn check_key(key: Value) -> Result<Option<Value>> {
    if key.is_null() {
        Ok(None)
    } else if key.is_scalar() {
        Ok(Some(key))
    } else {
        Err(Error::new_invalid_key(format!(
            "cannot use a {} value as an element key",
            key.kind_name()
        )))
    }
}

struct Append {
    upstream: Producer,
    keys: AutoKey,
    pending: Option<(Option<Value>, Value)>,
}

impl Iterator for Append {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        if let Some((key, value)) = self.upstream.next() {
            self.keys.observe(&key);
            return Some((key, value));
        }
        let (key, value) = self.pending.take()?;
        match key.or_else(|| self.keys.next_key()) {
            Some(key) => Some((key, value)),
            None => {
                tracing::warn!(
                    "dropping appended value: the next automatic key would exceed i64::MAX"
                );
                None
            }
        }
    }
}

struct Prepend {
    pending: Option<(Option<Value>, Value)>,
    upstream: Producer,
}

impl Iterator for Prepend {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        match self.pending.take() {
            Some((key, value)) => Some((key.unwrap_or_else(|| Value::from(0)), value)),
            None => self.upstream.next(),
        }
    }
}

impl Sequence {
    /// Emits every pair of this sequence, then `value` under the next
    /// automatic key.
    ///
    /// If the upstream used the key `i64::MAX` there is no next key. The
    /// value is then dropped with a warning rather than overwriting that
    /// entry.
    pub fn append(self, value: impl Into<Value>) -> Sequence {
        self.append_pending(None, value.into())
    }

    /// Emits every pair of this sequence, then `value` under `key`. A null
    /// key behaves like [`Sequence::append`].
    pub fn append_keyed(self, value: impl Into<Value>, key: impl Into<Value>) -> Result<Sequence> {
        let key = check_key(key.into())?;
        Ok(self.append_pending(key, value.into()))
    }

    fn append_pending(self, key: Option<Value>, value: Value) -> Sequence {
        Sequence::from_pairs(Append {
            upstream: self.into_producer(),
            keys: AutoKey::default(),
            pending: Some((key, value)),
        })
    }

    /// Emits `value` under key 0, then every pair of this sequence.
    pub fn prepend(self, value: impl Into<Value>) -> Sequence {
        self.prepend_pending(None, value.into())
    }

    pub fn prepend_keyed(self, value: impl Into<Value>, key: impl Into<Value>) -> Result<Sequence> {
        let key = check_key(key.into())?;
        Ok(self.prepend_pending(key, value.into()))
    }

    fn prepend_pending(self, key: Option<Value>, value: Value) -> Sequence {
        Sequence::from_pairs(Prepend {
            pending: Some((key, value)),
            upstream: self.into_producer(),
        })
    }
}
