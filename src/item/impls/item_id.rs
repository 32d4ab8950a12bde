use std::fmt;
use std::fmt::Formatter;
use crate::item::structs::item_id::ItemId;
use crate::item::structs::item_id_visitor::ItemIdVisitor;

impl ItemId {
    /// Index of the store shard owning this ID.
    #[inline(always)]
    pub fn shard(&self) -> usize {
        self.0[0] as usize
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl std::str::FromStr for ItemId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = ItemId([0u8; 32]);
        hex::decode_to_slice(s, &mut result.0)?;
        Ok(result)
    }
}

impl From<[u8; 32]> for ItemId {
    fn from(data: [u8; 32]) -> Self {
        ItemId(data)
    }
}

impl serde::ser::Serialize for ItemId {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for ItemId {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        des.deserialize_str(ItemIdVisitor)
    }
}
