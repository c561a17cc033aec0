use strum::{Display, EnumString};

/// What the player sensed about an attribute while standing in a room: was it present in one of the four neighbors?
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum NeighborSensed {
    #[default]
    Unknown,
    No,
    Yes,
}

impl NeighborSensed {
    pub(crate) fn from_clue(clue: bool) -> Self {
        match clue {
            true => Self::Yes,
            false => Self::No,
        }
    }
}

/// The current verdict on whether a room itself holds an attribute.
///
/// [`Yes`](Self::Yes) and [`No`](Self::No) are locked; propagation never revises them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum DeducedState {
    #[default]
    Unknown,
    Maybe,
    Yes,
    No,
}

/// How confident a visible hint is, so a front end can pick a visual treatment for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Display)]
pub enum Severity {
    Low,
    High,
}

impl DeducedState {
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Yes | Self::No)
    }

    /// Whether this state is worth showing the player; `Unknown` and `No` carry no label.
    pub fn is_visible_hint(self) -> bool {
        matches!(self, Self::Maybe | Self::Yes)
    }

    /// [`Severity`] of a visible hint, [`None`] otherwise.
    pub fn severity(self) -> Option<Severity> {
        match self {
            Self::Maybe => Some(Severity::Low),
            Self::Yes => Some(Severity::High),
            Self::Unknown | Self::No => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DeducedState, NeighborSensed, Severity};

    #[test]
    fn classification() {
        assert!(DeducedState::Yes.is_locked());
        assert!(DeducedState::No.is_locked());
        assert!(!DeducedState::Maybe.is_locked());
        assert!(!DeducedState::Unknown.is_locked());

        assert!(DeducedState::Maybe.is_visible_hint());
        assert!(DeducedState::Yes.is_visible_hint());
        assert!(!DeducedState::No.is_visible_hint());
        assert!(!DeducedState::Unknown.is_visible_hint());

        assert_eq!(DeducedState::Maybe.severity(), Some(Severity::Low));
        assert_eq!(DeducedState::Yes.severity(), Some(Severity::High));
        assert_eq!(DeducedState::No.severity(), None);
    }

    #[test]
    fn parse() {
        assert_eq!("maybe".parse::<DeducedState>().unwrap(), DeducedState::Maybe);
        assert_eq!("YES".parse::<NeighborSensed>().unwrap(), NeighborSensed::Yes);
        assert!("perhaps".parse::<DeducedState>().is_err());
    }
}
