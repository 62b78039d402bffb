//! A general RLP decoder that produces a tree of [RlpValue]s.

use crate::{errors::RlpError, params::MAX_RLP_DEPTH};
use alloc::vec::Vec;
use alloy_primitives::Bytes;
use alloy_rlp::{BufMut, Decodable, Encodable, Header};

/// A decoded RLP item: either a byte string or a list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpValue {
    /// An RLP string.
    Bytes(Bytes),
    /// An RLP list.
    List(Vec<RlpValue>),
}

impl RlpValue {
    /// Returns the string payload, or [None] if `self` is a list.
    pub const fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            Self::List(_) => None,
        }
    }

    /// Returns `true` if `self` is an [RlpValue::List].
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Decodes one item from the front of `buf`, advancing it past the item.
    fn decode_at_depth(buf: &mut &[u8], depth: usize) -> Result<Self, RlpError> {
        if depth > MAX_RLP_DEPTH {
            return Err(RlpError::DepthExceeded);
        }

        // Single bytes below 0x80 are their own payload; the header does not advance past them.
        let header = Header::decode(buf)?;
        let remaining: &[u8] = *buf;
        if remaining.len() < header.payload_length {
            return Err(RlpError::Truncated);
        }
        let (mut payload, rest) = remaining.split_at(header.payload_length);
        *buf = rest;

        if !header.list {
            return Ok(Self::Bytes(Bytes::copy_from_slice(payload)));
        }

        let mut items = Vec::new();
        while !payload.is_empty() {
            items.push(Self::decode_at_depth(&mut payload, depth + 1)?);
        }
        Ok(Self::List(items))
    }

    /// Returns the encoded length of the items of a list.
    ///
    /// Lengths are not cached, so encoding a tree recomputes them for every nesting level and
    /// costs O(depth²) on deeply nested lists.
    fn list_payload_length(items: &[Self]) -> usize {
        items.iter().map(Encodable::length).sum()
    }
}

impl Decodable for RlpValue {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::decode_at_depth(buf, 0).map_err(Into::into)
    }
}

impl Encodable for RlpValue {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::Bytes(bytes) => bytes.encode(out),
            Self::List(items) => {
                let payload_length = Self::list_payload_length(items);
                Header { list: true, payload_length }.encode(out);
                items.iter().for_each(|item| item.encode(out));
            }
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Bytes(bytes) => bytes.length(),
            Self::List(items) => {
                let payload_length = Self::list_payload_length(items);
                payload_length + alloy_rlp::length_of_length(payload_length)
            }
        }
    }
}

impl From<Bytes> for RlpValue {
    fn from(bytes: Bytes) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<Self>> for RlpValue {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

/// Decodes `data` as exactly one RLP item.
///
/// The whole buffer must be consumed; any bytes left after the item yield
/// [RlpError::TrailingData]. No shape is enforced on the result.
pub fn decode_exact(data: &[u8]) -> Result<RlpValue, RlpError> {
    let mut buf = data;
    let value = RlpValue::decode_at_depth(&mut buf, 0)?;
    if !buf.is_empty() {
        return Err(RlpError::TrailingData { remaining: buf.len() });
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;
    use alloc::vec;
    use alloy_primitives::{bytes, hex};

    #[test]
    fn test_decode_single_byte() {
        assert_eq!(decode_exact(&[0x7f]).unwrap(), RlpValue::Bytes(bytes!("7f")));
        assert_eq!(decode_exact(&[0x00]).unwrap(), RlpValue::Bytes(bytes!("00")));
    }

    #[test]
    fn test_decode_short_string() {
        const RLP: [u8; 4] = hex!("83646f67");
        assert_eq!(decode_exact(&RLP).unwrap(), RlpValue::Bytes(bytes!("646f67")));
    }

    #[test]
    fn test_decode_empty_string_and_list() {
        assert_eq!(decode_exact(&[0x80]).unwrap(), RlpValue::Bytes(Bytes::new()));
        assert_eq!(decode_exact(&[0xc0]).unwrap(), RlpValue::List(vec![]));
    }

    #[test]
    fn test_decode_long_string() {
        let mut rlp = vec![0xb8, 0x38];
        rlp.extend_from_slice(&[0xaa; 56]);
        assert_eq!(decode_exact(&rlp).unwrap(), RlpValue::Bytes(Bytes::from(vec![0xaa; 56])));
    }

    #[test]
    fn test_decode_nested_list() {
        // [ [], [[]], [ [], [[]] ] ]
        const RLP: [u8; 8] = hex!("c7c0c1c0c3c0c1c0");
        let empty = RlpValue::List(vec![]);
        let one = RlpValue::List(vec![empty.clone()]);
        let expected = RlpValue::List(vec![
            empty.clone(),
            one.clone(),
            RlpValue::List(vec![empty, one]),
        ]);
        assert_eq!(decode_exact(&RLP).unwrap(), expected);
    }

    #[test]
    fn test_decode_long_list() {
        let item = RlpValue::Bytes(Bytes::from(vec![0x11; 30]));
        let list = RlpValue::List(vec![item.clone(), item]);
        let encoded = alloy_rlp::encode(&list);
        assert_eq!(encoded[0], 0xf8);
        assert_eq!(decode_exact(&encoded).unwrap(), list);
    }

    #[test]
    fn test_decode_trailing_data() {
        assert_eq!(
            decode_exact(&hex!("83646f6700ff")),
            Err(RlpError::TrailingData { remaining: 2 })
        );
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_exact(&[]), Err(RlpError::Truncated));
        assert_eq!(decode_exact(&hex!("83646f")), Err(RlpError::Truncated));
        assert_eq!(decode_exact(&hex!("b9")), Err(RlpError::Truncated));
        assert_eq!(decode_exact(&hex!("c3c2")), Err(RlpError::Truncated));
    }

    #[test]
    fn test_decode_item_overruns_list() {
        // The inner string claims two bytes but the list payload only holds one.
        assert_eq!(decode_exact(&hex!("c2820102")), Err(RlpError::Truncated));
    }

    #[test]
    fn test_decode_non_canonical() {
        assert_eq!(
            decode_exact(&hex!("8105")),
            Err(RlpError::Malformed(alloy_rlp::Error::NonCanonicalSingleByte))
        );
        assert!(matches!(decode_exact(&hex!("b801ff")), Err(RlpError::Malformed(_))));
    }

    fn nested_lists(depth: usize) -> RlpValue {
        (0..depth).fold(RlpValue::List(vec![]), |inner, _| RlpValue::List(vec![inner]))
    }

    #[test]
    fn test_decode_depth_exceeded() {
        let encoded = alloy_rlp::encode(nested_lists(MAX_RLP_DEPTH + 1));
        assert_eq!(decode_exact(&encoded), Err(RlpError::DepthExceeded));
    }

    #[test]
    fn test_decode_max_depth_accepted() {
        let tree = nested_lists(MAX_RLP_DEPTH);
        assert_eq!(decode_exact(&alloy_rlp::encode(&tree)).unwrap(), tree);
    }

    #[test]
    fn test_decodable_advances_buffer() {
        let data = hex!("83646f67c0");
        let mut buf = &data[..];
        assert_eq!(RlpValue::decode(&mut buf).unwrap(), RlpValue::Bytes(bytes!("646f67")));
        assert_eq!(RlpValue::decode(&mut buf).unwrap(), RlpValue::List(vec![]));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_encode_matches_decode() {
        let tree = RlpValue::List(vec![
            RlpValue::Bytes(bytes!("646f67")),
            RlpValue::List(vec![RlpValue::Bytes(Bytes::from(vec![0x42; 60]))]),
            RlpValue::Bytes(bytes!("01")),
        ]);
        let encoded = alloy_rlp::encode(&tree);
        assert_eq!(encoded.len(), tree.length());
        assert_eq!(decode_exact(&encoded).unwrap(), tree);
    }

    #[test]
    fn test_as_bytes() {
        assert_eq!(RlpValue::Bytes(bytes!("01")).as_bytes(), Some(&bytes!("01")));
        assert_eq!(RlpValue::List(vec![]).as_bytes(), None);
    }

    #[test]
    fn test_is_list() {
        assert!(decode_exact(&[0xc0]).unwrap().is_list());
        assert!(!decode_exact(&[0x80]).unwrap().is_list());
    }
}
