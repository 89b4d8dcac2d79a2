//! Categorical rejection reasons for player actions
//!
//! Every failure is recoverable: the caller drops the action and the
//! snapshot stays untouched. Display renders the wire token the command
//! front end echoes back to players.

use thiserror::Error;

/// Why an action was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("INVALID_GAME_STATE")]
    InvalidGameState,

    #[error("NOT_YOUR_TURN")]
    NotYourTurn,

    #[error("UNIT_NOT_FOUND")]
    UnitNotFound,

    #[error("NOT_YOUR_UNIT")]
    NotYourUnit,

    #[error("CANNOT_ATTACK_ALLY")]
    CannotAttackAlly,

    #[error("INSUFFICIENT_AP")]
    InsufficientAp,

    #[error("OUT_OF_RANGE")]
    OutOfRange,

    #[error("BLOCKED_BY_WALL")]
    BlockedByWall,

    #[error("OUT_OF_BOUNDS")]
    OutOfBounds,

    #[error("OBSTRUCTED_BY_WALL")]
    ObstructedByWall,

    #[error("OBSTRUCTED_BY_UNIT")]
    ObstructedByUnit,

    #[error("STATIONARY_MOVE")]
    StationaryMove,

    #[error("NOT_A_MEDIC")]
    NotAMedic,

    #[error("CANNOT_HEAL_ENEMY")]
    CannotHealEnemy,

    #[error("CANNOT_SELF_HEAL")]
    CannotSelfHeal,

    #[error("NOT_ADJACENT")]
    NotAdjacent,

    #[error("ALREADY_FULL_HP")]
    AlreadyFullHp,

    #[error("CANNOT_OVERWATCH")]
    CannotOverwatch,

    #[error("NOT_A_PLAYER")]
    NotAPlayer,

    #[error("LOBBY_NOT_FOUND")]
    LobbyNotFound,

    #[error("GAME_ALREADY_STARTED")]
    GameAlreadyStarted,

    #[error("LOBBY_FULL")]
    LobbyFull,

    #[error("BUDGET_EXCEEDED")]
    BudgetExceeded,

    #[error("INVALID_UNIT_TYPE")]
    InvalidUnitType,

    #[error("INSUFFICIENT_RAP")]
    InsufficientRap,

    #[error("NO_DRAW_OFFER")]
    NoDrawOffer,

    #[error("CANNOT_ACCEPT_OWN_OFFER")]
    CannotAcceptOwnOffer,
}

pub type Result<T> = std::result::Result<T, Rejection>;
