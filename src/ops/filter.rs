use crate::{sequence::Sequence, value::Value};

impl Sequence {
    /// Drops every pair for which `predicate(value, key)` returns true.
    ///
    /// Note the polarity: the predicate names what to exclude. Pairs for which
    /// it returns false are kept, with their keys.
    pub fn filter<F>(self, mut predicate: F) -> Sequence
    where
        F: FnMut(&Value, &Value) -> bool + 'static,
    {
        Sequence::from_pairs(
            self.into_producer()
                .filter(move |(key, value)| !predicate(value, key)),
        )
    }

    /// Keeps only integers and floats, with their original keys.
    pub fn filter_numeric(self) -> Sequence {
        self.filter(|value, _| !value.is_numeric())
    }
}

#[cfg(test)]
mod tests {
    use crate::{array, Sequence, Value};

    #[test]
    fn predicate_selects_what_to_drop() {
        let mut sequence = Sequence::new(vec![1, 2, 3, 4])
            .unwrap()
            .filter(|value, _| value.as_i64().is_some_and(|i| i % 2 == 0));
        assert_eq!(sequence.to_array().unwrap(), array![0 => 1, 2 => 3]);
    }

    #[test]
    fn predicate_sees_keys() {
        let mut sequence = Sequence::new(array!["keep" => 1, "drop" => 2])
            .unwrap()
            .filter(|_, key| key.as_str() == Some("drop"));
        assert_eq!(sequence.to_array().unwrap(), array!["keep" => 1]);
    }

    #[test]
    fn filter_numeric_keeps_numbers_and_keys() {
        let mut sequence = Sequence::new(vec![
            Value::from(1),
            Value::from(2),
            Value::from("x"),
            Value::from(3),
        ])
        .unwrap()
        .filter_numeric();
        assert_eq!(sequence.to_array().unwrap(), array![0 => 1, 1 => 2, 3 => 3]);
    }

    #[test]
    fn filter_numeric_drops_numeric_strings() {
        let mut sequence = Sequence::new(vec![Value::from("1"), Value::from(1.5), Value::new_null()])
            .unwrap()
            .filter_numeric();
        assert_eq!(sequence.to_values(), vec![Value::from(1.5)]);
    }
}
