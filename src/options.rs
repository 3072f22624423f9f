/// Selects between the lenient and strict variant of an operation.
///
/// For comparisons, `Strict` means identity comparison and `Lenient` means
/// loose equality. For numeric reductions, `Strict` rejects non-numeric values
/// and `Lenient` skips them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strictness {
    #[default]
    Lenient,
    Strict,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        self == Strictness::Strict
    }
}

impl From<bool> for Strictness {
    fn from(strict: bool) -> Self {
        if strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        }
    }
}
