// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Hands out appointment identifiers.
///
/// Identifier 0 means "not assigned yet". The allocator is seeded from the
/// largest identifier found in the store and only ever counts upwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    /// An allocator whose next identifier is 1.
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// An allocator whose next identifier is `last + 1`.
    pub const fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// The most recently issued or observed identifier.
    pub const fn last(&self) -> u64 {
        self.last
    }

    /// Issues a fresh identifier.
    pub fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Records an identifier that already exists, so it is never issued again.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}
