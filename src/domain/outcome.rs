/// What happened when the conversion hotkey fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Skipped(SkipReason),
    Failed(Failure),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    Disabled,
    NoSelection,
    SelectionUnavailable,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Disabled => "disabled",
            SkipReason::NoSelection => "no_selection",
            SkipReason::SelectionUnavailable => "selection_unavailable",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    Delivery,
}

impl Failure {
    pub fn as_str(self) -> &'static str {
        match self {
            Failure::Delivery => "delivery",
        }
    }
}
