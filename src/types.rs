//! Core domain types for the learning engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four grid-direction moves.
///
/// The action set is closed: exactly these four actions exist, numbered
/// 0-3, and the set is never extended at runtime. Numeric ids are converted
/// once at the service boundary via [`Action::try_from`]; internally only
/// this enum is used.
///
/// # Examples
///
/// ```
/// use qslide::Action;
///
/// let action = Action::try_from(2u8)?;
/// assert_eq!(action, Action::Down);
/// assert_eq!(action.id(), 2);
/// # Ok::<(), qslide::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

/// Number of actions in the fixed set.
pub const ACTION_COUNT: usize = 4;

impl Action {
    /// All actions in id order.
    pub const ALL: [Action; ACTION_COUNT] =
        [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Last-resort default returned by the policy when every action,
    /// including the full fixed set, has been ruled out.
    pub const FALLBACK: Action = Action::Right;

    /// Numeric id of this action (0-3).
    pub const fn id(self) -> u8 {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
        }
    }

    /// Index into per-action arrays.
    pub(crate) const fn index(self) -> usize {
        self.id() as usize
    }
}

impl TryFrom<u8> for Action {
    type Error = crate::Error;

    fn try_from(id: u8) -> crate::Result<Self> {
        match id {
            0 => Ok(Action::Up),
            1 => Ok(Action::Right),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            id => Err(crate::Error::InvalidAction { id }),
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.id()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_ids_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::try_from(action.id()).unwrap(), action);
        }
    }

    #[test]
    fn out_of_range_id_is_rejected() {
        let result = Action::try_from(4u8);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidAction { id: 4 })
        ));
    }

    #[test]
    fn all_actions_are_distinct() {
        for (i, a) in Action::ALL.iter().enumerate() {
            for b in &Action::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
