use std::{fs::File, ops::Deref, path::Path};

use memmap2::Mmap;

use crate::error::Result;

/// Read-only view over the whole input file.
///
/// Zero-length files are never mapped; they deref to an empty slice.
pub enum Source {
    Mapped(Mmap),
    Empty,
}

impl Source {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Self::Empty);
        }
        // The input is not modified while the run is in progress.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Self::Mapped(mmap))
    }
}

impl Deref for Source {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Mapped(mmap) => mmap,
            Self::Empty => &[],
        }
    }
}
