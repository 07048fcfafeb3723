//! Layout of a structure made of two `u32` fields.
//!
//! Both fields share the same 4-byte natural alignment, so `b` starts right
//! where `a` ends and the structure carries no padding.

use std::mem::{self, size_of};

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub a: u32,
    pub b: u32,
}

pub const OFFSET_A: usize = mem::offset_of!(Pair, a);
pub const OFFSET_B: usize = mem::offset_of!(Pair, b);

const _: () = assert!(OFFSET_A == 0);
const _: () = assert!(OFFSET_B == OFFSET_A + size_of::<u32>());
const _: () = assert!(size_of::<Pair>() == 2 * size_of::<u32>());

/// Selects one field of [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    A,
    B,
}

impl Field {
    /// Declaration order.
    pub const ALL: [Field; 2] = [Field::A, Field::B];

    pub fn name(self) -> &'static str {
        match self {
            Field::A => "a",
            Field::B => "b",
        }
    }

    pub fn size(self) -> usize {
        match self {
            Field::A | Field::B => size_of::<u32>(),
        }
    }

    fn previous(self) -> Option<Field> {
        match self {
            Field::A => None,
            Field::B => Some(Field::A),
        }
    }
}

/// Byte offset of `field` from the start of a [`Pair`].
pub const fn offset_of(field: Field) -> usize {
    match field {
        Field::A => OFFSET_A,
        Field::B => OFFSET_B,
    }
}

/// Bytes of padding inserted between the previous field (or the start of
/// the struct) and `field`.
pub fn padding_before(field: Field) -> usize {
    let end_of_previous = field
        .previous()
        .map_or(0, |prev| offset_of(prev) + prev.size());
    offset_of(field) - end_of_previous
}

impl Pair {
    /// Offset measured on this instance: the distance between the field's
    /// address and the address of `self`.
    pub fn field_addr_offset(&self, field: Field) -> usize {
        let base = self as *const Pair as usize;
        let addr = match field {
            Field::A => &self.a as *const u32 as usize,
            Field::B => &self.b as *const u32 as usize,
        };
        addr - base
    }
}
