use serde::{de, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

/// Helper module for (de)serializing `()` as an empty params sequence.
pub mod empty_params {
    use super::{de, Deserialize, Deserializer, SerializeSeq, Serializer};

    /// Deserializes `[]` or a missing sequence into `()`.
    pub fn deserialize<'de, DeserializerT>(d: DeserializerT) -> Result<(), DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        let params = Option::<Vec<serde_json::Value>>::deserialize(d)?.unwrap_or_default();
        if params.is_empty() {
            Ok(())
        } else {
            Err(de::Error::invalid_length(params.len(), &"an empty sequence"))
        }
    }

    /// Serializes `()` into `[]`.
    pub fn serialize<SerializerT>(
        _params: &(),
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        s.serialize_seq(Some(0))?.end()
    }
}

/// Helper module for (de)serializing a single value as a one-element params
/// sequence.
pub mod sequence {
    use super::{de, Deserialize, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Deserializes the only element of a sequence.
    pub fn deserialize<'de, T, DeserializerT>(d: DeserializerT) -> Result<T, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let mut params = Vec::<T>::deserialize(d)?;
        if params.len() == 1 {
            Ok(params.remove(0))
        } else {
            Err(de::Error::invalid_length(
                params.len(),
                &"a sequence of length 1",
            ))
        }
    }

    /// Serializes a value as the only element of a sequence.
    pub fn serialize<T, SerializerT>(
        value: &T,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
        T: Serialize,
    {
        let mut seq = s.serialize_seq(Some(1))?;
        seq.serialize_element(value)?;
        seq.end()
    }
}

/// Helper module for (de)serializing a `u64` as a quantity string.
pub mod u64 {
    use super::{de, Deserialize, Deserializer, Serializer};
    use crate::quantity::{decode_u64, encode_u64};

    /// Deserializes a quantity string into a `u64`.
    pub fn deserialize<'de, DeserializerT>(d: DeserializerT) -> Result<u64, DeserializerT::Error>
    where
        DeserializerT: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        decode_u64(&value).map_err(de::Error::custom)
    }

    /// Serializes a `u64` as a minimal quantity string.
    pub fn serialize<SerializerT>(
        value: &u64,
        s: SerializerT,
    ) -> Result<SerializerT::Ok, SerializerT::Error>
    where
        SerializerT: Serializer,
    {
        s.serialize_str(&encode_u64(*value))
    }
}
