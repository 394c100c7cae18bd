use std::fmt;

use ethrpc_primitives::{
    decode_ambiguous_scalar,
    quantity::{decode_hex_int, QuantityError},
    AmbiguousScalar, ScalarError, U256,
};

/// Width of bounded integer quantities, e.g. gas, indices and timestamps.
pub(crate) const QUANTITY_BITS: usize = 64;
/// Width of arbitrary-precision quantities, e.g. difficulty and value.
pub(crate) const BIG_QUANTITY_BITS: usize = 256;
/// Width of the normalized recovery id.
pub(crate) const STANDARD_V_BITS: usize = 8;

/// The category of a [`ConversionError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric string does not parse at its required width or base.
    MalformedNumeric,
    /// A field required by the target representation is absent.
    MissingRequiredField,
    /// Neither interpretation of a vendor-ambiguous scalar succeeded.
    AmbiguousScalarDecodeFailure,
}

/// The entity whose conversion failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A block
    Block,
    /// A standalone transaction
    Transaction,
    /// A transaction contained in a block
    BlockTransaction {
        /// Position of the transaction in the block
        index: usize,
    },
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Block => f.write_str("block"),
            EntityKind::Transaction => f.write_str("transaction"),
            EntityKind::BlockTransaction { index } => write!(f, "transaction #{index} of block"),
        }
    }
}

/// Error that occurs when converting between the canonical and the wire
/// representation of an entity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A numeric field is malformed.
    #[error("Malformed {entity} field `{field}`: {error}")]
    MalformedNumeric {
        /// The entity being converted
        entity: EntityKind,
        /// Wire name of the field
        field: &'static str,
        /// The decoding error
        error: QuantityError,
    },
    /// A required field is absent.
    #[error("Missing {entity} field `{field}`")]
    MissingRequiredField {
        /// The entity being converted
        entity: EntityKind,
        /// Wire name of the field
        field: &'static str,
    },
    /// A field with a dialect-dependent encoding could not be decoded.
    #[error("Undecodable {entity} field `{field}`: {error}")]
    AmbiguousScalarDecodeFailure {
        /// The entity being converted
        entity: EntityKind,
        /// Wire name of the field
        field: &'static str,
        /// The decoding error
        error: ScalarError,
    },
}

impl ConversionError {
    /// The category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::MalformedNumeric { .. } => ErrorKind::MalformedNumeric,
            ConversionError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            ConversionError::AmbiguousScalarDecodeFailure { .. } => {
                ErrorKind::AmbiguousScalarDecodeFailure
            }
        }
    }

    /// The entity whose conversion failed.
    pub fn entity(&self) -> EntityKind {
        match self {
            ConversionError::MalformedNumeric { entity, .. }
            | ConversionError::MissingRequiredField { entity, .. }
            | ConversionError::AmbiguousScalarDecodeFailure { entity, .. } => *entity,
        }
    }

    /// Wire name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ConversionError::MalformedNumeric { field, .. }
            | ConversionError::MissingRequiredField { field, .. }
            | ConversionError::AmbiguousScalarDecodeFailure { field, .. } => field,
        }
    }

    /// Attributes a transaction error to the transaction at `index` of a
    /// block.
    pub(crate) fn in_block(mut self, index: usize) -> Self {
        match &mut self {
            ConversionError::MalformedNumeric { entity, .. }
            | ConversionError::MissingRequiredField { entity, .. }
            | ConversionError::AmbiguousScalarDecodeFailure { entity, .. } => {
                *entity = EntityKind::BlockTransaction { index };
            }
        }
        self
    }
}

/// Decodes the fields of a single wire entity, tagging errors with the
/// entity and field name.
pub(crate) struct FieldDecoder {
    entity: EntityKind,
}

impl FieldDecoder {
    pub fn new(entity: EntityKind) -> Self {
        Self { entity }
    }

    pub fn big(
        &self,
        field: &'static str,
        value: &str,
        bit_width: usize,
    ) -> Result<U256, ConversionError> {
        decode_hex_int(value, bit_width).map_err(|error| {
            log::debug!("Failed to decode {} field `{field}`: {error}", self.entity);
            ConversionError::MalformedNumeric {
                entity: self.entity,
                field,
                error,
            }
        })
    }

    pub fn u64(&self, field: &'static str, value: &str) -> Result<u64, ConversionError> {
        self.big(field, value, QUANTITY_BITS)
            .map(|value| value.to::<u64>())
    }

    pub fn optional_u64(
        &self,
        field: &'static str,
        value: Option<&String>,
    ) -> Result<Option<u64>, ConversionError> {
        value.map(|value| self.u64(field, value)).transpose()
    }

    pub fn optional_big(
        &self,
        field: &'static str,
        value: Option<&String>,
        bit_width: usize,
    ) -> Result<Option<U256>, ConversionError> {
        value
            .map(|value| self.big(field, value, bit_width))
            .transpose()
    }

    pub fn scalar(
        &self,
        field: &'static str,
        value: &AmbiguousScalar,
        bit_width: usize,
    ) -> Result<U256, ConversionError> {
        decode_ambiguous_scalar(value, bit_width).map_err(|error| {
            log::debug!("Failed to decode {} field `{field}`: {error}", self.entity);
            ConversionError::AmbiguousScalarDecodeFailure {
                entity: self.entity,
                field,
                error,
            }
        })
    }

    pub fn scalar_u64(
        &self,
        field: &'static str,
        value: &AmbiguousScalar,
    ) -> Result<u64, ConversionError> {
        self.scalar(field, value, QUANTITY_BITS)
            .map(|value| value.to::<u64>())
    }

    pub fn require<'value, T>(
        &self,
        field: &'static str,
        value: Option<&'value T>,
    ) -> Result<&'value T, ConversionError> {
        value.ok_or(ConversionError::MissingRequiredField {
            entity: self.entity,
            field,
        })
    }
}
