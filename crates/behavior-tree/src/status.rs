//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// For conditions, `Success` means the condition held. For actions, it
/// means the action was produced; `Failure` means it could not be (e.g. no
/// legal step), letting a parent try the next alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// `Success` when `condition` holds, `Failure` otherwise.
    #[inline]
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl From<bool> for Status {
    fn from(condition: bool) -> Self {
        Status::from_bool(condition)
    }
}
