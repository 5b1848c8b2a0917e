use std::fmt;

///
/// IndexKey
///
/// Key bytes tagged with the stable id of the index that owns them.
/// Ordering is by index id, then bytes.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct IndexKey {
    index_id: String,
    bytes: Vec<u8>,
}

impl IndexKey {
    #[must_use]
    pub fn new(index_id: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            index_id: index_id.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn index_id(&self) -> &str {
        &self.index_id
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.index_id)?;
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}
