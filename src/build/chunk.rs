//! Splitting a word list into contiguous partitions

use crate::{Error, Result};
use std::ops::Range;

/// A contiguous slice of the input assigned to one worker
#[derive(Debug)]
pub struct Partition<'a, W> {
    index: usize,
    offset: usize,
    words: &'a [W],
}

impl<'a, W> Partition<'a, W> {
    /// Position of this partition in chunk order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset of the first word in the original input
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Input offsets covered by this partition
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.words.len()
    }

    pub fn words(&self) -> &'a [W] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// Derives would require `W: Clone`/`W: Copy`; the slice reference is always copyable.
impl<W> Clone for Partition<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for Partition<'_, W> {}

/// Split `words` into at most `workers` balanced, contiguous partitions
///
/// Every partition gets `len / workers` words and the first `len % workers`
/// partitions get one extra. When there are fewer words than workers, one
/// single-word partition is produced per word; empty input yields no
/// partitions. Concatenating the partitions in order gives back `words`.
pub fn split<W>(words: &[W], workers: usize) -> Result<Vec<Partition<'_, W>>> {
    if workers == 0 {
        return Err(Error::InvalidConfiguration(
            "cannot split input across zero workers".to_string(),
        ));
    }

    let count = workers.min(words.len());
    if count == 0 {
        return Ok(Vec::new());
    }

    let base = words.len() / count;
    let remainder = words.len() % count;

    let mut partitions = Vec::with_capacity(count);
    let mut rest = words;
    let mut offset = 0;
    for index in 0..count {
        let size = base + usize::from(index < remainder);
        let (head, tail) = rest.split_at(size);
        partitions.push(Partition {
            index,
            offset,
            words: head,
        });
        offset += size;
        rest = tail;
    }
    Ok(partitions)
}
