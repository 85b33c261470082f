use crate::Chips;

/// What a caller (human or AI) asks the Hand State Machine to do.
/// `Raise(T)` names the *total* the seat's `current_bet` should become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    Fold,
    Check,
    Call,
    Raise(Chips),
    AllIn,
}

impl std::fmt::Display for ActionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ActionRequest::Fold => write!(f, "fold"),
            ActionRequest::Check => write!(f, "check"),
            ActionRequest::Call => write!(f, "call"),
            ActionRequest::Raise(to) => write!(f, "raise to {to}"),
            ActionRequest::AllIn => write!(f, "all-in"),
        }
    }
}

/// The action as actually resolved by the Hand State Machine, with concrete
/// chip amounts, for logging and for the event stream. `amount` is the total
/// wager (new `current_bet`) for `Raise`/`AllIn`, the incremental chips moved
/// for `Call`/`Blind`, and `0` for `Fold`/`Check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedAction {
    Blind(Chips),
    Fold,
    Check,
    Call(Chips),
    /// A raise that reopens action for seats that already acted this street.
    Raise(Chips),
    /// A committed-all-chips action; `reopens` mirrors whether it crossed the
    /// minimum-raise increment (and therefore behaves like `Raise` for
    /// reopening purposes) or was a short all-in that behaves like `Call`.
    AllIn { total: Chips, reopens: bool },
}

impl ResolvedAction {
    pub fn name(&self) -> &'static str {
        match self {
            ResolvedAction::Blind(_) => "blind",
            ResolvedAction::Fold => "fold",
            ResolvedAction::Check => "check",
            ResolvedAction::Call(_) => "call",
            ResolvedAction::Raise(_) => "raise",
            ResolvedAction::AllIn { .. } => "all-in",
        }
    }

    pub fn amount(&self) -> Chips {
        match self {
            ResolvedAction::Blind(a) | ResolvedAction::Call(a) | ResolvedAction::Raise(a) => *a,
            ResolvedAction::AllIn { total, .. } => *total,
            ResolvedAction::Fold | ResolvedAction::Check => 0,
        }
    }
}

impl std::fmt::Display for ResolvedAction {
    #[cfg(not(feature = "server"))]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ResolvedAction::Blind(a) => write!(f, "posts blind {a}"),
            ResolvedAction::Fold => write!(f, "folds"),
            ResolvedAction::Check => write!(f, "checks"),
            ResolvedAction::Call(a) => write!(f, "calls {a}"),
            ResolvedAction::Raise(a) => write!(f, "raises to {a}"),
            ResolvedAction::AllIn { total, .. } => write!(f, "is all-in for {total}"),
        }
    }

    /// Colored like the reference CLI's table view: red for giving up,
    /// yellow for matching, green for pushing chips forward.
    #[cfg(feature = "server")]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            ResolvedAction::Blind(a) => write!(f, "{}", format!("posts blind {a}").yellow()),
            ResolvedAction::Fold => write!(f, "{}", "folds".red()),
            ResolvedAction::Check => write!(f, "{}", "checks".yellow()),
            ResolvedAction::Call(a) => write!(f, "{}", format!("calls {a}").yellow()),
            ResolvedAction::Raise(a) => write!(f, "{}", format!("raises to {a}").green()),
            ResolvedAction::AllIn { total, .. } => {
                write!(f, "{}", format!("is all-in for {total}").green())
            }
        }
    }
}
