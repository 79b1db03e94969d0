use crate::battle::state::{BattleId, Phase, Side};
use crate::creature::CreatureId;
use thiserror::Error;

/// Main error type for the creature arena battle engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// A referenced battle or creature does not resolve
    #[error("not found: {0}")]
    NotFound(#[from] NotFoundError),
    /// The action is illegal for the current phase or turn owner
    #[error("invalid action: {0}")]
    InvalidAction(#[from] ActionError),
    /// The battle already has a winner and accepts nothing further
    #[error("battle {battle_id} has already ended")]
    TerminalBattle { battle_id: BattleId },
    /// A battle is already stored under the requested id
    #[error("battle {battle_id} already exists")]
    BattleExists { battle_id: BattleId },
    /// The storage collaborator failed
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors for ids that do not resolve through storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("battle {0}")]
    Battle(BattleId),
    #[error("creature {0}")]
    Creature(CreatureId),
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("it is not {side}'s turn")]
    NotYourTurn { side: Side },
    #[error("cannot {action} while the battle is {phase}")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error("move index {index} is out of range ({available} moves known)")]
    InvalidMoveIndex { index: usize, available: usize },
    #[error("{0} is not in the roster")]
    NotInRoster(CreatureId),
    #[error("{0} has fainted")]
    CreatureFainted(CreatureId),
    #[error("{0} is already active")]
    AlreadyActive(CreatureId),
    #[error("{side} has no reserves to switch in")]
    NoReserves { side: Side },
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,
    #[error("record codec error: {0}")]
    Codec(String),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;
