use crate::sequence::{AutoKey, Sequence};

impl Sequence {
    /// Emits the original keys as values, under fresh keys 0, 1, 2...
    pub fn keys(self) -> Sequence {
        let mut positions = AutoKey::default();
        Sequence::from_pairs(
            self.into_producer()
                .map_while(move |(key, _)| Some((positions.next_key()?, key))),
        )
    }
}
