/// `true` stops retrying and hands the outcome back, even when it is an error.
pub trait Judgment<E> {
    fn judge(&self, outcome: &Result<(), E>) -> bool;
}

pub trait DataJudgment<D, E> {
    fn judge(&self, data: &D, outcome: &Result<(), E>) -> bool;
}

/// Used when no judgment is configured: accepts `Ok(())`, ignoring data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultJudgment;

impl<E> Judgment<E> for DefaultJudgment {
    fn judge(&self, outcome: &Result<(), E>) -> bool {
        outcome.is_ok()
    }
}

impl<D, E> DataJudgment<D, E> for DefaultJudgment {
    fn judge(&self, _data: &D, outcome: &Result<(), E>) -> bool {
        outcome.is_ok()
    }
}

impl<E, F> Judgment<E> for F
where
    F: Fn(&Result<(), E>) -> bool,
{
    fn judge(&self, outcome: &Result<(), E>) -> bool {
        self(outcome)
    }
}

impl<D, E, F> DataJudgment<D, E> for F
where
    F: Fn(&D, &Result<(), E>) -> bool,
{
    fn judge(&self, data: &D, outcome: &Result<(), E>) -> bool {
        self(data, outcome)
    }
}
