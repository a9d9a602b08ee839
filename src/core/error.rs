//! Error types for the card container model.
//!
//! These cover conditions a caller can reasonably hit (drawing from an empty
//! pile, naming a container that doesn't exist). Broken invariants, such as a
//! card whose owner doesn't hold it, are bugs and panic instead.

use thiserror::Error;

use super::entity::{CardId, ContainerId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("{0} is empty")]
    EmptyContainer(ContainerId),

    #[error("{0} is not a container on this table")]
    InvalidTarget(ContainerId),

    #[error("{0} is not on this table")]
    CardNotFound(CardId),

    #[error("{0} already exists")]
    ContainerExists(ContainerId),

    #[error("{0} was not dealt on this table")]
    ForeignCard(CardId),

    #[error("{0} is already on this table")]
    DuplicateCard(CardId),

    #[error("no more card or container ids")]
    IdsExhausted,
}

pub type TableResult<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            TableError::EmptyContainer(ContainerId::new(2)).to_string(),
            "Container(2) is empty"
        );
        assert_eq!(
            TableError::InvalidTarget(ContainerId::new(9)).to_string(),
            "Container(9) is not a container on this table"
        );
        assert_eq!(
            TableError::CardNotFound(CardId(7)).to_string(),
            "Card(7) is not on this table"
        );
        assert_eq!(
            TableError::ForeignCard(CardId(60)).to_string(),
            "Card(60) was not dealt on this table"
        );
    }
}
