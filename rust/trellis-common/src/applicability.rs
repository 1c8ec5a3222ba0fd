/// Two-case result reported by one member of a handler chain.
///
/// A chain member that cannot interpret its input reports
/// [`Applicability::NotApplicable`] and the dispatcher moves on to the next
/// member in order. Genuine failures travel through `Result` instead, so
/// ordinary "not mine" routing never rides on the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability<T> {
    /// The member interpreted the input and produced its result.
    Applicable(T),
    /// The member does not apply to this input; try the next one.
    NotApplicable,
}

impl<T> Applicability<T> {
    /// Whether the member handled the input.
    pub fn is_applicable(&self) -> bool {
        matches!(self, Applicability::Applicable(_))
    }

    /// The produced value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Applicability::Applicable(value) => Some(value),
            Applicability::NotApplicable => None,
        }
    }

    /// Transform the produced value while keeping the verdict.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Applicability<U> {
        match self {
            Applicability::Applicable(value) => Applicability::Applicable(f(value)),
            Applicability::NotApplicable => Applicability::NotApplicable,
        }
    }
}
