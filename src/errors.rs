use generational_arena::Index;
use thiserror::Error;

use crate::arena::Side;

/// Failures the arena operations can produce.
///
/// An absent node is never an error anywhere in this crate: it is the
/// defined base case of the height formula and yields 0.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("node not found in arena: {0:?}")]
    NodeNotFound(Index),

    #[error("{side:?} child slot already occupied on parent {parent:?}")]
    SlotOccupied { parent: Index, side: Side },

    #[error("tree already has a root")]
    RootExists,
}

pub type TreeResult<T> = Result<T, TreeError>;
