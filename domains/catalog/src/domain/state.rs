//! Admin panel state machine
//!
//! The admin screen drives one popup at a time: an editor (add or edit), a
//! browse-all list, or a delete confirmation. Holding the whole panel
//! state in a single value makes "two popups open" unrepresentable, which
//! the scattered visibility flags of an earlier design allowed.

use matchday_common::StateError;

use crate::domain::entities::{League, Team};

/// Which catalog entity a popup is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    League,
    Team,
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::League => write!(f, "league"),
            CatalogKind::Team => write!(f, "team"),
        }
    }
}

/// A concrete catalog entity carried by edit and delete flows
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    League(League),
    Team(Team),
}

impl CatalogEntry {
    pub fn kind(&self) -> CatalogKind {
        match self {
            CatalogEntry::League(_) => CatalogKind::League,
            CatalogEntry::Team(_) => CatalogKind::Team,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            CatalogEntry::League(league) => &league.id,
            CatalogEntry::Team(team) => &team.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::League(league) => &league.name,
            CatalogEntry::Team(team) => &team.name,
        }
    }
}

/// Admin panel states
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AdminState {
    /// No popup open
    #[default]
    Idle,
    /// Editor open in create mode
    Adding(CatalogKind),
    /// Editor open in edit mode, prefilled from the carried entity
    Editing(CatalogEntry),
    /// Delete confirmation dialog with a single pending target
    ConfirmingDelete(CatalogEntry),
    /// Browse-all list popup
    Browsing(CatalogKind),
}

impl AdminState {
    /// Whether an editor popup (create or edit) is open
    pub fn is_editor_open(&self) -> bool {
        matches!(self, AdminState::Adding(_) | AdminState::Editing(_))
    }

    /// The entity awaiting delete confirmation, if any
    pub fn pending_delete(&self) -> Option<&CatalogEntry> {
        match self {
            AdminState::ConfirmingDelete(entry) => Some(entry),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdminState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminState::Idle => write!(f, "idle"),
            AdminState::Adding(kind) => write!(f, "adding({})", kind),
            AdminState::Editing(entry) => write!(f, "editing({})", entry.kind()),
            AdminState::ConfirmingDelete(entry) => {
                write!(f, "confirming_delete({})", entry.kind())
            }
            AdminState::Browsing(kind) => write!(f, "browsing({})", kind),
        }
    }
}

/// Events that drive the admin panel
#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent {
    OpenAdd(CatalogKind),
    OpenEdit(CatalogEntry),
    OpenList(CatalogKind),
    RequestDelete(CatalogEntry),
    ConfirmDelete,
    CancelDelete,
    Close,
}

impl std::fmt::Display for AdminEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminEvent::OpenAdd(_) => write!(f, "open_add"),
            AdminEvent::OpenEdit(_) => write!(f, "open_edit"),
            AdminEvent::OpenList(_) => write!(f, "open_list"),
            AdminEvent::RequestDelete(_) => write!(f, "request_delete"),
            AdminEvent::ConfirmDelete => write!(f, "confirm_delete"),
            AdminEvent::CancelDelete => write!(f, "cancel_delete"),
            AdminEvent::Close => write!(f, "close"),
        }
    }
}

/// Admin panel state machine
pub struct AdminStateMachine;

impl AdminStateMachine {
    /// Attempt a state transition
    pub fn transition(current: &AdminState, event: AdminEvent) -> Result<AdminState, StateError> {
        let next = match (current, &event) {
            // Popups open from the idle screen or on top of the browse
            // list, which they replace.
            (AdminState::Idle | AdminState::Browsing(_), AdminEvent::OpenAdd(kind)) => {
                AdminState::Adding(*kind)
            }
            (AdminState::Idle | AdminState::Browsing(_), AdminEvent::OpenEdit(entry)) => {
                AdminState::Editing(entry.clone())
            }
            (AdminState::Idle | AdminState::Browsing(_), AdminEvent::RequestDelete(entry)) => {
                AdminState::ConfirmingDelete(entry.clone())
            }
            (AdminState::Idle | AdminState::Browsing(_), AdminEvent::OpenList(kind)) => {
                AdminState::Browsing(*kind)
            }

            // Only a pending confirmation can be confirmed or cancelled
            (AdminState::ConfirmingDelete(_), AdminEvent::ConfirmDelete) => AdminState::Idle,
            (AdminState::ConfirmingDelete(_), AdminEvent::CancelDelete) => AdminState::Idle,

            // Dismissing whatever is open is always allowed
            (_, AdminEvent::Close) => AdminState::Idle,

            _ => {
                return Err(StateError::InvalidTransition {
                    state: current.to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: &AdminState, event: AdminEvent) -> bool {
        Self::transition(current, event).is_ok()
    }
}
