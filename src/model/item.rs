// Selectable entries and the outcome of a selection.

/// One row the user can pick. `value` is matched alongside `display` and is
/// what the host usually returns; `payload` rides along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<T> {
    display: String,
    value: String,
    payload: T,
}

impl<T> Item<T> {
    pub fn new(display: impl Into<String>, value: impl Into<String>, payload: T) -> Self {
        Self { display: display.into(), value: value.into(), payload }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }
}

/// Outcome of an interaction. Anything other than `Pending` is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<I> {
    Pending,
    Confirmed(I),
    Cancelled,
}

impl<I> Completion<I> {
    pub fn confirmed(self) -> Option<I> {
        match self {
            Completion::Confirmed(item) => Some(item),
            _ => None,
        }
    }
}
