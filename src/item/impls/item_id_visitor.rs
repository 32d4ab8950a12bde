use std::fmt;
use std::fmt::Formatter;
use crate::item::structs::item_id::ItemId;
use crate::item::structs::item_id_visitor::ItemIdVisitor;

impl<'v> serde::de::Visitor<'v> for ItemIdVisitor {
    type Value = ItemId;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a 64 character long hash")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.len() != 64 {
            return Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(v),
                &"expected a 64 character long string",
            ));
        }

        let mut res = ItemId([0u8; 32]);

        if hex::decode_to_slice(v, &mut res.0).is_err() {
            return Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(v),
                &"expected a hexadecimal string",
            ));
        }
        Ok(res)
    }
}
