use std::{fmt, rc::Rc};

use crate::{
    error::{Error, Result},
    sequence::{producer::AutoKey, Pair, Producer, Sequence},
    value::{Array, Value},
};

/// The shapes a sequence can be built from.
pub enum Source {
    /// A concrete container. The array is shared, not consumed, so the
    /// container itself can be traversed again elsewhere.
    Container(Rc<Array>),
    /// A deferred generator, started on the first pull.
    Generator(Generator),
    /// An existing cursor.
    Producer(Producer),
}

impl Source {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Source::Container(_) => "container",
            Source::Generator(_) => "generator",
            Source::Producer(_) => "producer",
        }
    }

    pub(crate) fn into_producer(self) -> Producer {
        match self {
            Source::Container(array) => Producer::new(ContainerCursor { array, position: 0 }),
            Source::Generator(generator) => {
                Producer::new(std::iter::once_with(move || generator.start()).flatten())
            }
            Source::Producer(producer) => producer,
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Source").field(&self.kind_name()).finish()
    }
}

struct ContainerCursor {
    array: Rc<Array>,
    position: usize,
}

impl Iterator for ContainerCursor {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        let (key, value) = self.array.entry_at(self.position)?;
        self.position += 1;
        Some((key.to_value(), value.clone()))
    }
}

/// A zero-argument callable that starts a lazy stream of pairs.
///
/// The callable is not invoked when the sequence is built, only when the
/// sequence is first pulled.
pub struct Generator {
    start: Box<dyn FnOnce() -> Producer>,
}

impl Generator {
    /// A generator emitting explicit `(key, value)` pairs.
    pub fn pairs<F, I>(start: F) -> Self
    where
        F: FnOnce() -> I + 'static,
        I: Iterator<Item = Pair> + 'static,
    {
        Generator {
            start: Box::new(move || Producer::new(start())),
        }
    }

    /// A generator emitting bare values, keyed 0, 1, 2...
    pub fn values<F, I>(start: F) -> Self
    where
        F: FnOnce() -> I + 'static,
        I: Iterator<Item = Value> + 'static,
    {
        Generator {
            start: Box::new(move || {
                let mut keys = AutoKey::default();
                Producer::new(start().map_while(move |value| Some((keys.next_key()?, value))))
            }),
        }
    }

    fn start(self) -> Producer {
        (self.start)()
    }
}

/// Conversion into a [`Source`], failing with [`Error::InvalidInput`] for
/// inputs that cannot produce pairs.
pub trait IntoSource {
    fn into_source(self) -> Result<Source>;
}

impl IntoSource for Source {
    fn into_source(self) -> Result<Source> {
        Ok(self)
    }
}

impl IntoSource for Array {
    fn into_source(self) -> Result<Source> {
        Ok(Source::Container(Rc::new(self)))
    }
}

impl IntoSource for Rc<Array> {
    fn into_source(self) -> Result<Source> {
        Ok(Source::Container(self))
    }
}

impl<T> IntoSource for Vec<T>
where
    T: Into<Value>,
{
    fn into_source(self) -> Result<Source> {
        self.into_iter()
            .map(Into::into)
            .collect::<Array>()
            .into_source()
    }
}

impl IntoSource for Generator {
    fn into_source(self) -> Result<Source> {
        Ok(Source::Generator(self))
    }
}

impl IntoSource for Producer {
    fn into_source(self) -> Result<Source> {
        Ok(Source::Producer(self))
    }
}

impl IntoSource for Sequence {
    fn into_source(self) -> Result<Source> {
        Ok(Source::Producer(self.into_producer()))
    }
}

/// Only array values are containers; any other value is rejected.
impl IntoSource for Value {
    fn into_source(self) -> Result<Source> {
        self.into_shared_array()
            .map(Source::Container)
            .map_err(|value| {
                Error::new_invalid_input(format!(
                    "cannot use a {} value as a sequence source",
                    value.kind_name()
                ))
            })
    }
}
