//! Fixed-capacity bump allocator for per-build scratch memory.
//!
//! Blocks are handed out as offsets into one pre-sized buffer. There is no per-block free:
//! memory comes back in bulk when a [`TemporaryMemory`] checkpoint is ended.

/// A region handed out by [`Arena::push_size`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArenaBlock {
    offset: usize,
    len: usize,
}

impl ArenaBlock {
    /// Byte length of the block.
    pub fn len(self) -> usize {
        self.len
    }

    /// True for zero-sized pushes.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Checkpoint returned by [`Arena::begin_temporary`]; hand it back to [`Arena::end_temporary`].
#[derive(Debug)]
#[must_use = "a temporary checkpoint must be ended to release its memory"]
pub struct TemporaryMemory {
    used: usize,
    depth: u32,
}

/// Pre-sized bump allocator with a high-water mark.
#[derive(Debug)]
pub struct Arena {
    memory: Vec<u8>,
    used: usize,
    temp_count: u32,
}

impl Arena {
    /// Allocate the backing block once; it never grows.
    pub fn with_capacity(size: usize) -> Self {
        Self {
            memory: vec![0; size],
            used: 0,
            temp_count: 0,
        }
    }

    /// Total capacity in bytes.
    pub fn size(&self) -> usize {
        self.memory.len()
    }

    /// Current high-water mark.
    pub fn used(&self) -> usize {
        self.used
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.used
    }

    /// Bump-allocate `size` zeroed bytes.
    ///
    /// # Panics
    ///
    /// Exhausting the arena is a fatal sizing bug, not a recoverable condition.
    pub fn push_size(&mut self, size: usize) -> ArenaBlock {
        let end = self.used.checked_add(size);
        assert!(
            matches!(end, Some(end) if end <= self.memory.len()),
            "arena exhausted: {} used + {} requested > {} bytes",
            self.used,
            size,
            self.memory.len()
        );
        let block = ArenaBlock {
            offset: self.used,
            len: size,
        };
        self.used += size;
        self.memory[block.offset..self.used].fill(0);
        block
    }

    /// Read access to a previously pushed block.
    pub fn bytes(&self, block: ArenaBlock) -> &[u8] {
        &self.memory[block.offset..block.offset + block.len]
    }

    /// Write access to a previously pushed block.
    pub fn bytes_mut(&mut self, block: ArenaBlock) -> &mut [u8] {
        &mut self.memory[block.offset..block.offset + block.len]
    }

    /// Save the high-water mark. Checkpoints nest.
    pub fn begin_temporary(&mut self) -> TemporaryMemory {
        self.temp_count += 1;
        TemporaryMemory {
            used: self.used,
            depth: self.temp_count,
        }
    }

    /// Restore the high-water mark saved by the matching [`Arena::begin_temporary`].
    ///
    /// # Panics
    ///
    /// Ending checkpoints out of order.
    pub fn end_temporary(&mut self, temp: TemporaryMemory) {
        assert_eq!(
            temp.depth, self.temp_count,
            "temporary memory ended out of order"
        );
        assert!(self.used >= temp.used, "arena shrank below a checkpoint");
        self.used = temp.used;
        self.temp_count -= 1;
    }

    /// Number of open temporary checkpoints.
    pub fn temporary_count(&self) -> u32 {
        self.temp_count
    }

    /// Assert every temporary checkpoint has been ended.
    pub fn check(&self) {
        assert_eq!(self.temp_count, 0, "unbalanced temporary memory");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/arena.rs"]
mod tests;
