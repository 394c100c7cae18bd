use serde::{de::DeserializeOwned, Serialize};

use crate::{block::Block, transaction::Transaction};

/// Error that occurs when persisting an entity.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The entity could not be encoded.
    #[error("Failed to encode {entity} as JSON: {error}")]
    Encode {
        /// Name of the entity type
        entity: &'static str,
        /// The underlying error
        error: serde_json::Error,
    },
    /// The bytes do not contain a valid entity.
    #[error("Failed to decode {entity} from JSON: {error}")]
    Decode {
        /// Name of the entity type
        entity: &'static str,
        /// The underlying error
        error: serde_json::Error,
    },
}

/// Conversion of an entity to and from a JSON byte buffer.
pub trait JsonPersist: Serialize + DeserializeOwned {
    /// Name of the entity, used in error messages.
    const ENTITY: &'static str;

    /// Encodes the entity as JSON.
    fn to_json(&self) -> Result<Vec<u8>, PersistenceError> {
        serde_json::to_vec(self).map_err(|error| PersistenceError::Encode {
            entity: Self::ENTITY,
            error,
        })
    }

    /// Decodes an entity from JSON.
    fn from_json(bytes: &[u8]) -> Result<Self, PersistenceError> {
        serde_json::from_slice(bytes).map_err(|error| PersistenceError::Decode {
            entity: Self::ENTITY,
            error,
        })
    }
}

impl JsonPersist for Block {
    const ENTITY: &'static str = "block";
}

impl JsonPersist for Transaction {
    const ENTITY: &'static str = "transaction";
}
