// crates/synctab-core/src/search/vertical.rs
//
// Vertical-scroll subset: a residue class of stride 16 over the 128 buckets
// (stride 32 in real bytes) whose 8 buckets are all filled is usable on its own.

use crate::table::{offset_of, Table, BUCKETS};

pub const VERTICAL_STRIDE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerticalScroll {
    pub residue: usize,
    /// Byte offset of the residue's first bucket.
    pub offset: u32,
}

/// First residue (ascending) whose whole class is filled. Never mutates the table.
pub fn find_vertical(table: &Table) -> Option<VerticalScroll> {
    (0..VERTICAL_STRIDE)
        .find(|&r| (r..BUCKETS).step_by(VERTICAL_STRIDE).all(|b| table.is_filled(b)))
        .map(|residue| VerticalScroll {
            residue,
            offset: offset_of(residue),
        })
}
