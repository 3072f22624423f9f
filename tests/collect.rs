use collect::{array, Error, Generator, Producer, Sequence, Strictness, Value};

fn ints(items: &[i64]) -> Vec<Value> {
    items.iter().copied().map(Value::from).collect()
}

#[test]
fn instantiate_with_array() -> anyhow::Result<()> {
    let mut sequence = Sequence::new(vec![1, 2, 3])?;
    assert_eq!(sequence.to_array()?, array![1, 2, 3]);
    Ok(())
}

#[test]
fn instantiate_with_callback() -> anyhow::Result<()> {
    let mut sequence = Sequence::new(Generator::values(|| (1..=3).map(Value::from)))?;
    assert_eq!(sequence.to_array()?, array![1, 2, 3]);
    Ok(())
}

#[test]
fn instantiate_with_keyed_callback() -> anyhow::Result<()> {
    let generator = Generator::pairs(|| {
        vec![
            (Value::from("a"), Value::from(1)),
            (Value::from(5), Value::from(2)),
        ]
        .into_iter()
    });
    let mut sequence = Sequence::new(generator)?.append(3);
    assert_eq!(sequence.to_array()?, array!["a" => 1, 5 => 2, 6 => 3]);
    Ok(())
}

#[test]
fn instantiate_with_producer() -> anyhow::Result<()> {
    let pairs = (1..=3).map(|i: i64| (Value::from(i - 1), Value::from(i)));
    let mut sequence = Sequence::new(Producer::new(pairs))?;
    assert_eq!(sequence.to_array()?, array![1, 2, 3]);
    Ok(())
}

#[test]
fn instantiate_with_non_container_value() {
    let err = Sequence::new(Value::from("text")).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn append() -> anyhow::Result<()> {
    let expected = array![1, 2, 3, 4];
    assert_eq!(Sequence::new(vec![1, 2, 3])?.append(4).to_array()?, expected);
    assert_eq!(
        Sequence::new(vec![1, 2, 3])?
            .append_keyed(4, Value::new_null())?
            .to_array()?,
        expected
    );
    Ok(())
}

#[test]
fn append_with_key() -> anyhow::Result<()> {
    let mut sequence = Sequence::new(vec![1, 2, 3])?.append_keyed(4, "key")?;
    assert_eq!(sequence.to_array()?, array![0 => 1, 1 => 2, 2 => 3, "key" => 4]);
    Ok(())
}

#[test]
fn append_with_non_scalar_key() -> anyhow::Result<()> {
    let result = Sequence::new(vec![1, 2, 3])?.append_keyed(4, array![]);
    assert!(matches!(result, Err(Error::InvalidKey(_))));
    Ok(())
}

#[test]
fn concat_collection() -> anyhow::Result<()> {
    let mut sequence = Sequence::new(vec![1, 2, 3])?.concat(Sequence::new(vec![4, 5, 6])?)?;
    assert_eq!(sequence.to_values(), ints(&[1, 2, 3, 4, 5, 6]));
    Ok(())
}

#[test]
fn concat_array() -> anyhow::Result<()> {
    let mut sequence = Sequence::new(vec![1, 2, 3])?.concat(vec![4, 5, 6])?;
    assert_eq!(sequence.to_values(), ints(&[1, 2, 3, 4, 5, 6]));
    Ok(())
}

#[test]
fn concat_non_iterable() -> anyhow::Result<()> {
    let result = Sequence::new(vec![1, 2, 3])?.concat(Value::from(4));
    assert!(matches!(result, Err(Error::InvalidInput(_))));
    Ok(())
}

#[test]
fn long_chain_over_an_unbounded_generator() -> anyhow::Result<()> {
    let naturals = Generator::values(|| (1..).map(|i: i64| Value::from(i)));
    let mut sequence = Sequence::new(naturals)?
        .filter(|value, _| value.as_i64().is_some_and(|i| i % 3 != 0))
        .map(|value, _| Value::from(value.as_i64().unwrap_or(0) * value.as_i64().unwrap_or(0)))
        .prepend_keyed("start", "label")?
        .take(4)?;
    assert_eq!(
        sequence.to_array()?,
        array!["label" => "start", 2 => 9, 5 => 36, 8 => 81]
    );
    Ok(())
}

#[test]
fn terminal_operations_after_a_chain() -> anyhow::Result<()> {
    let build = || -> anyhow::Result<Sequence> {
        Ok(Sequence::new(vec![
            Value::from(4),
            Value::from("n/a"),
            Value::from(-2.5),
            Value::from(10),
        ])?
        .slice(0, 4)?)
    };

    assert_eq!(build()?.max(Strictness::Lenient)?, Value::from(10));
    assert_eq!(build()?.min(Strictness::Lenient)?, Value::from(-2.5));
    assert_eq!(build()?.sum(Strictness::Lenient)?, Value::from(11.5));
    assert!(build()?.max(Strictness::Strict).is_err());
    assert!(build()?.contains("n/a", Strictness::Strict));
    assert!(build()?.some(|value, _| value.as_str().is_some()));
    assert!(!build()?.every(|value, _| value.is_numeric()));
    assert_eq!(build()?.filter_numeric().size(), 3);
    Ok(())
}

#[test]
fn reusable_chains_through_apply() -> anyhow::Result<()> {
    fn first_two_doubled(sequence: Sequence) -> collect::Result<Sequence> {
        sequence
            .map(|value, _| Value::from(value.as_i64().unwrap_or(0) * 2))
            .take(2)
    }

    let mut sequence = Sequence::new(vec![5, 6, 7])?.apply(first_two_doubled)?;
    assert_eq!(sequence.to_array()?, array![10, 12]);

    let result = Sequence::new(vec![5])?.apply(|mut sequence| sequence.to_values());
    assert!(matches!(result, Err(Error::ContractViolation(_))));
    Ok(())
}
