// crates/synctab-core/src/table/format.rs

use crate::error::{Result, SyncError};
use crate::table::checksum::crc32;
use crate::table::{Table, BUCKETS};

const MAGIC: &[u8; 4] = b"SYT1";
const VERSION: u16 = 1;

const SLOT_EMPTY: u8 = 0;
const SLOT_FILLED: u8 = 1;

/// A finished table together with the candidate set its indexes refer to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedTable {
    pub candidates: Vec<u32>,
    pub table: Table,
}

/// Layout (little-endian):
/// MAGIC[4]
/// version:u16
/// lines:u16
/// candidates_len:u16
/// candidates: repeated u32
/// slots[128]: flag:u8 (0 empty, 1 filled), then `lines` x index:u8 when filled
/// crc32:u32          (over everything before crc32)
pub fn encode(table: &Table, candidates: &[u32]) -> Result<Vec<u8>> {
    let lines = u16::try_from(table.lines())
        .map_err(|_| SyncError::TableFormat(format!("too many lines: {}", table.lines())))?;
    let n = u16::try_from(candidates.len())
        .map_err(|_| SyncError::TableFormat("too many candidates".into()))?;

    let mut b = Vec::with_capacity(10 + candidates.len() * 4 + BUCKETS * (1 + table.lines()) + 4);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&VERSION.to_le_bytes());
    b.extend_from_slice(&lines.to_le_bytes());
    b.extend_from_slice(&n.to_le_bytes());
    for c in candidates {
        b.extend_from_slice(&c.to_le_bytes());
    }

    for (bucket, slot) in table.iter() {
        match slot {
            None => b.push(SLOT_EMPTY),
            Some(a) => {
                b.push(SLOT_FILLED);
                for &len in a {
                    let idx = candidates
                        .iter()
                        .position(|&c| c == len)
                        .and_then(|i| u8::try_from(i).ok())
                        .ok_or_else(|| {
                            SyncError::TableFormat(format!(
                                "slot {bucket}: length {len} is not an indexable candidate"
                            ))
                        })?;
                    b.push(idx);
                }
            }
        }
    }

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());
    Ok(b)
}

pub fn decode(bytes: &[u8]) -> Result<SavedTable> {
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(SyncError::TableFormat("bad magic".into()));
    }
    if bytes.len() < 8 {
        return Err(SyncError::TableFormat("unexpected eof".into()));
    }

    // crc first: everything after it assumes the payload is intact
    let crc_off = bytes.len() - 4;
    let crc_expected = u32::from_le_bytes([
        bytes[crc_off],
        bytes[crc_off + 1],
        bytes[crc_off + 2],
        bytes[crc_off + 3],
    ]);
    if crc_expected != crc32(&bytes[..crc_off]) {
        return Err(SyncError::TableFormat("crc32 mismatch".into()));
    }
    let body = &bytes[..crc_off];

    let mut i = 4usize;
    let version = read_u16(body, &mut i)?;
    if version != VERSION {
        return Err(SyncError::TableFormat(format!("unsupported version {version}")));
    }
    let lines = read_u16(body, &mut i)? as usize;
    let n = read_u16(body, &mut i)? as usize;

    let mut candidates = Vec::with_capacity(n);
    for _ in 0..n {
        candidates.push(read_u32(body, &mut i)?);
    }

    let mut slots = Vec::with_capacity(BUCKETS);
    for bucket in 0..BUCKETS {
        match read_u8(body, &mut i)? {
            SLOT_EMPTY => slots.push(None),
            SLOT_FILLED => {
                let mut a = Vec::with_capacity(lines);
                for _ in 0..lines {
                    let idx = read_u8(body, &mut i)? as usize;
                    let len = candidates.get(idx).copied().ok_or_else(|| {
                        SyncError::TableFormat(format!(
                            "slot {bucket}: candidate index {idx} out of range"
                        ))
                    })?;
                    a.push(len);
                }
                slots.push(Some(a));
            }
            other => {
                return Err(SyncError::TableFormat(format!(
                    "slot {bucket}: unknown flag {other}"
                )))
            }
        }
    }

    if i != body.len() {
        return Err(SyncError::TableFormat("trailing bytes".into()));
    }

    let table = Table::from_slots(lines, slots)?;
    Ok(SavedTable { candidates, table })
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(SyncError::TableFormat("unexpected eof".into()));
    }
    Ok(())
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8> {
    need(bytes, *i, 1)?;
    let v = bytes[*i];
    *i += 1;
    Ok(v)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let v = u32::from_le_bytes([bytes[*i], bytes[*i + 1], bytes[*i + 2], bytes[*i + 3]]);
    *i += 4;
    Ok(v)
}
