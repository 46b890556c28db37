// ============================================================
// Error kinds - every way a FundMe call can be rejected
// ============================================================

/// Failure kinds surfaced to callers. Helpers return them in a `Result`,
/// endpoints turn them into a revert carrying `as_str()`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FundError {
    /// Payment converts to less than the USD minimum.
    InsufficientContribution,
    /// Withdrawal attempted by anyone but the owner.
    NotOwner,
    /// Balance still held after paying out the owner.
    TransferFailed,
    /// Funder index past the end of the list.
    IndexOutOfRange,
    /// Price feed reported a zero or negative answer.
    InvalidPrice,
}

impl FundError {
    pub const fn as_str(self) -> &'static str {
        match self {
            FundError::InsufficientContribution => "FundMe__InsufficientContribution",
            FundError::NotOwner => "FundMe__NotOwner",
            FundError::TransferFailed => "FundMe__TransferFailed",
            FundError::IndexOutOfRange => "FundMe__IndexOutOfRange",
            FundError::InvalidPrice => "FundMe__InvalidPrice",
        }
    }
}
