//! Byte layout of persisted records.
//!
//! Every record is an RLP list `[kind_tag, length, payload]`:
//!
//! * primitive kinds: `payload` is the flat big-endian element buffer, one
//!   byte per `boolean`, raw bits for floating point;
//! * references: `payload` is a list with one entry per element, `[]` for
//!   null and `[child_kind_tag, child_slot]` otherwise.

use alloc::vec::Vec;

use rlp::{Rlp, RlpStream};

use crate::{ArrayId, BackingStore, Corruption, ElementKind, ExitError, Slot};

/// Content of a decoded record.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
	/// Elements of a primitive array.
	Values(BackingStore),
	/// Children of a reference array, in element order.
	Children(Vec<Option<(ElementKind, Slot)>>),
}

/// Encode `store`, resolving each referenced array to its kind and slot.
pub fn encode<F>(store: &BackingStore, mut resolve: F) -> Result<Vec<u8>, ExitError>
where
	F: FnMut(ArrayId) -> Result<(ElementKind, Slot), ExitError>,
{
	let mut stream = RlpStream::new_list(3);
	stream.append(&store.kind().tag());
	stream.append(&(store.len() as u64));

	match store {
		BackingStore::Reference(children) => {
			stream.begin_list(children.len());
			for child in children {
				match child {
					Some(id) => {
						let (kind, slot) = resolve(*id)?;
						stream.begin_list(2);
						stream.append(&kind.tag());
						stream.append(&slot.0);
					}
					None => {
						stream.begin_list(0);
					}
				}
			}
		}
		_ => {
			stream.append(&values_payload(store));
		}
	}

	Ok(stream.out().to_vec())
}

/// Decode a record expected to hold an array of `kind`.
pub fn decode(kind: ElementKind, bytes: &[u8]) -> Result<Decoded, Corruption> {
	let rlp = Rlp::new(bytes);
	let info = rlp.payload_info().map_err(|_| Corruption::Malformed)?;
	if info.total() != bytes.len() || !rlp.is_list() || rlp.item_count().map_err(malformed)? != 3 {
		return Err(Corruption::Malformed);
	}

	let tag: u8 = rlp.val_at(0).map_err(malformed)?;
	if ElementKind::from_tag(tag).ok_or(Corruption::Malformed)? != kind {
		return Err(Corruption::KindMismatch);
	}

	let length: u64 = rlp.val_at(1).map_err(malformed)?;
	if length > i32::MAX as u64 {
		return Err(Corruption::LengthMismatch);
	}
	let length = length as usize;

	let payload = rlp.at(2).map_err(malformed)?;
	match kind.width() {
		Some(width) => {
			if !payload.is_data() {
				return Err(Corruption::Malformed);
			}
			let data = payload.data().map_err(malformed)?;
			if length.checked_mul(width) != Some(data.len()) {
				return Err(Corruption::LengthMismatch);
			}
			Ok(Decoded::Values(values_from_payload(kind, data)?))
		}
		None => {
			if !payload.is_list() {
				return Err(Corruption::Malformed);
			}
			if payload.item_count().map_err(malformed)? != length {
				return Err(Corruption::LengthMismatch);
			}

			let mut children = Vec::with_capacity(length);
			for entry in payload.iter() {
				if !entry.is_list() {
					return Err(Corruption::Malformed);
				}
				match entry.item_count().map_err(malformed)? {
					0 => children.push(None),
					2 => {
						let tag: u8 = entry.val_at(0).map_err(malformed)?;
						let child = ElementKind::from_tag(tag).ok_or(Corruption::Malformed)?;
						let slot: u64 = entry.val_at(1).map_err(malformed)?;
						children.push(Some((child, Slot(slot))));
					}
					_ => return Err(Corruption::Malformed),
				}
			}
			Ok(Decoded::Children(children))
		}
	}
}

fn malformed(_: rlp::DecoderError) -> Corruption {
	Corruption::Malformed
}

fn values_payload(store: &BackingStore) -> Vec<u8> {
	let mut out = Vec::with_capacity(store.len() * store.kind().width().unwrap_or(0));
	match store {
		BackingStore::Boolean(buf) => out.extend(buf.iter().map(|v| *v as u8)),
		BackingStore::Byte(buf) => out.extend(buf.iter().map(|v| *v as u8)),
		BackingStore::Char(buf) => buf.iter().for_each(|v| out.extend_from_slice(&v.to_be_bytes())),
		BackingStore::Short(buf) => buf.iter().for_each(|v| out.extend_from_slice(&v.to_be_bytes())),
		BackingStore::Int(buf) => buf.iter().for_each(|v| out.extend_from_slice(&v.to_be_bytes())),
		BackingStore::Long(buf) => buf.iter().for_each(|v| out.extend_from_slice(&v.to_be_bytes())),
		BackingStore::Float(buf) => buf
			.iter()
			.for_each(|v| out.extend_from_slice(&v.to_bits().to_be_bytes())),
		BackingStore::Double(buf) => buf
			.iter()
			.for_each(|v| out.extend_from_slice(&v.to_bits().to_be_bytes())),
		BackingStore::Reference(_) => (),
	}
	out
}

// `data.len()` is a multiple of the element width of `kind`.
fn values_from_payload(kind: ElementKind, data: &[u8]) -> Result<BackingStore, Corruption> {
	macro_rules! chunks {
		($n:literal, $f:expr) => {
			data.chunks_exact($n)
				.map(|c| {
					let mut raw = [0u8; $n];
					raw.copy_from_slice(c);
					$f(raw)
				})
				.collect()
		};
	}

	Ok(match kind {
		ElementKind::Boolean => BackingStore::Boolean(
			data.iter()
				.map(|b| match b {
					0 => Ok(false),
					1 => Ok(true),
					_ => Err(Corruption::Malformed),
				})
				.collect::<Result<_, _>>()?,
		),
		ElementKind::Byte => BackingStore::Byte(data.iter().map(|b| *b as i8).collect()),
		ElementKind::Char => BackingStore::Char(chunks!(2, u16::from_be_bytes)),
		ElementKind::Short => BackingStore::Short(chunks!(2, i16::from_be_bytes)),
		ElementKind::Int => BackingStore::Int(chunks!(4, i32::from_be_bytes)),
		ElementKind::Long => BackingStore::Long(chunks!(8, i64::from_be_bytes)),
		ElementKind::Float => {
			BackingStore::Float(chunks!(4, |raw| f32::from_bits(u32::from_be_bytes(raw))))
		}
		ElementKind::Double => {
			BackingStore::Double(chunks!(8, |raw| f64::from_bits(u64::from_be_bytes(raw))))
		}
		ElementKind::Reference => BackingStore::Reference(Vec::new()),
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn no_children(_: ArrayId) -> Result<(ElementKind, Slot), ExitError> {
		unreachable!()
	}

	#[test]
	fn int_record_layout() {
		let store = BackingStore::Int(vec![1, -1]);
		let bytes = encode(&store, no_children).unwrap();
		assert_eq!(hex::encode(&bytes), "cb05028800000001ffffffff");
	}

	#[test]
	fn primitive_records_decode_to_the_same_values() {
		let stores = vec![
			BackingStore::Boolean(vec![true, false, true]),
			BackingStore::Char(vec![0x263a, 0]),
			BackingStore::Long(vec![i64::MIN, 0, i64::MAX]),
			BackingStore::Double(vec![-0.0, 1.5, f64::INFINITY]),
		];
		for store in stores {
			let bytes = encode(&store, no_children).unwrap();
			assert_eq!(decode(store.kind(), &bytes), Ok(Decoded::Values(store)));
		}
	}

	#[test]
	fn reference_record_keeps_nulls_and_order() {
		let store = BackingStore::Reference(vec![Some(ArrayId(4)), None, Some(ArrayId(2))]);
		let bytes = encode(&store, |id| Ok((ElementKind::Int, Slot(id.0 as u64 * 10)))).unwrap();
		assert_eq!(
			decode(ElementKind::Reference, &bytes),
			Ok(Decoded::Children(vec![
				Some((ElementKind::Int, Slot(40))),
				None,
				Some((ElementKind::Int, Slot(20))),
			]))
		);
	}

	#[test]
	fn wrong_kind_is_rejected() {
		let bytes = encode(&BackingStore::Int(vec![1]), no_children).unwrap();
		assert_eq!(decode(ElementKind::Long, &bytes), Err(Corruption::KindMismatch));
	}

	#[test]
	fn garbage_is_rejected() {
		assert_eq!(decode(ElementKind::Int, &[]), Err(Corruption::Malformed));
		assert_eq!(decode(ElementKind::Int, &[0xff, 0x00]), Err(Corruption::Malformed));

		// [0x05, 1, [0x00000007]]: payload must be a byte string.
		let bytes = hex::decode("c70501c400000007").unwrap();
		assert_eq!(decode(ElementKind::Int, &bytes), Err(Corruption::Malformed));

		let mut bytes = encode(&BackingStore::Int(vec![1]), no_children).unwrap();
		bytes.push(0);
		assert_eq!(decode(ElementKind::Int, &bytes), Err(Corruption::Malformed));
	}

	#[test]
	fn non_canonical_boolean_is_rejected() {
		// [0x01, 1, 0x02]
		let bytes = hex::decode("c3010102").unwrap();
		assert_eq!(decode(ElementKind::Boolean, &bytes), Err(Corruption::Malformed));
		let bytes = hex::decode("c3010101").unwrap();
		assert_eq!(
			decode(ElementKind::Boolean, &bytes),
			Ok(Decoded::Values(BackingStore::Boolean(vec![true])))
		);
	}

	#[test]
	fn truncated_payload_is_a_length_mismatch() {
		// [0x05, 2, 0x00000001]: two ints declared, one present.
		let bytes = hex::decode("c705028400000001").unwrap();
		assert_eq!(decode(ElementKind::Int, &bytes), Err(Corruption::LengthMismatch));
		assert_eq!(decode(ElementKind::Int, &bytes[..7]), Err(Corruption::Malformed));
	}
}
