use std::ops::Range;

use crate::error::{Error, Result};

/// A record-aligned byte range of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub len: usize,
}

impl Segment {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Split `data` into contiguous segments of at most `target` bytes.
///
/// Every segment except the one ending at `data.len()` ends with `\n`: the
/// tentative end is pulled back to the end of the last complete record.
/// Fails if a chunk holds no newline at all.
pub fn segments(data: &[u8], target: usize) -> Result<Vec<Segment>> {
    let len = data.len();
    let mut segments = Vec::with_capacity(len / target.max(1) + 1);
    let mut offset = 0;

    while offset < len {
        let mut end = (offset + target).min(len);
        if end != len {
            while end > offset && data[end - 1] != b'\n' {
                end -= 1;
            }
            if end == offset {
                return Err(Error::NoRecordBoundary { offset });
            }
        }
        segments.push(Segment {
            start: offset,
            len: end - offset,
        });
        offset = end;
    }

    Ok(segments)
}
