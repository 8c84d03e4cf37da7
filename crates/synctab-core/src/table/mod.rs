// crates/synctab-core/src/table/mod.rs
//
// 128 buckets, one per even byte offset 0, 2, ..., 254 inside a 256-byte window.
// A filled bucket holds the N raw line lengths whose sum lands on that offset:
//   bucket = (sum mod 256) / 2

pub mod checksum;
pub mod format;

use crate::error::{Result, SyncError};

pub const BUCKETS: usize = 128;

#[inline]
pub fn bucket_of(sum: u64) -> usize {
    ((sum % 256) / 2) as usize
}

#[inline]
pub fn offset_of(bucket: usize) -> u32 {
    (bucket * 2) as u32
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    lines: usize,
    slots: Vec<Option<Vec<u32>>>,
}

impl Table {
    pub fn new(lines: usize) -> Self {
        Self {
            lines,
            slots: vec![None; BUCKETS],
        }
    }

    /// Rebuild a table from decoded slots, checking length and bucket invariants.
    pub fn from_slots(lines: usize, slots: Vec<Option<Vec<u32>>>) -> Result<Self> {
        if slots.len() != BUCKETS {
            return Err(SyncError::TableFormat(format!(
                "expected {BUCKETS} slots, got {}",
                slots.len()
            )));
        }
        for (bucket, slot) in slots.iter().enumerate() {
            let Some(a) = slot else { continue };
            if a.len() != lines {
                return Err(SyncError::TableFormat(format!(
                    "slot {bucket}: {} lengths, expected {lines}",
                    a.len()
                )));
            }
            let sum = a.iter().map(|&v| u64::from(v)).sum::<u64>();
            if bucket_of(sum) != bucket {
                return Err(SyncError::TableFormat(format!(
                    "slot {bucket}: sum {sum} belongs to offset {}",
                    offset_of(bucket_of(sum))
                )));
            }
        }
        Ok(Self { lines, slots })
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn slot(&self, bucket: usize) -> Option<&[u32]> {
        self.slots.get(bucket).and_then(|s| s.as_deref())
    }

    pub fn is_filled(&self, bucket: usize) -> bool {
        self.slot(bucket).is_some()
    }

    /// First wins: fills an empty bucket and returns true, leaves a filled one untouched.
    pub fn try_fill(&mut self, bucket: usize, assignment: &[u32]) -> bool {
        debug_assert_eq!(assignment.len(), self.lines);
        debug_assert_eq!(
            bucket_of(assignment.iter().map(|&v| u64::from(v)).sum()),
            bucket
        );
        match self.slots.get_mut(bucket) {
            Some(slot) if slot.is_none() => {
                *slot = Some(assignment.to_vec());
                true
            }
            _ => false,
        }
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn missing(&self) -> usize {
        BUCKETS - self.filled()
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    /// `(bucket, slot)` in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&[u32]>)> + '_ {
        self.slots.iter().enumerate().map(|(b, s)| (b, s.as_deref()))
    }
}

/// Sum of a raw assignment, in bytes.
pub fn assignment_sum(assignment: &[u32]) -> u64 {
    assignment.iter().map(|&v| u64::from(v)).sum()
}
