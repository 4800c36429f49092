//! Global id spaces for images and strings of loaded objects.
//!
//! Every allocation must be released exactly once with the same arguments it was allocated with.

use std::collections::{BTreeMap, HashMap};
use std::ops::Range;

use bevy::ecs::resource::Resource;


/// First image id available to objects. Lower ids belong to the base sprite set.
pub const OBJECT_IMAGE_BASE: u32 = 0x0001_0000;
/// Number of image ids available to objects.
pub const OBJECT_IMAGE_CAPACITY: u32 = 0x0010_0000;

/// First string id available to objects.
pub const OBJECT_STRING_BASE: u16 = 0x3800;
/// Number of string ids available to objects.
pub const OBJECT_STRING_CAPACITY: u16 = 0x2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u32);

/// A contiguous run of image ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRange {
    pub base:  ImageId,
    pub count: u32,
}

impl ImageRange {
    /// The id of the `index`-th image of the range.
    #[must_use]
    pub fn get(self, index: u32) -> Option<ImageId> {
        (index < self.count).then(|| ImageId(self.base.0 + index))
    }
}

/// First-fit allocator of contiguous image id ranges.
#[derive(Debug, Resource)]
pub struct ImageAllocator {
    /// Free ranges keyed by start, never adjacent to each other.
    free:      BTreeMap<u32, u32>,
    /// Allocated ranges keyed by start, mapping to their length.
    allocated: BTreeMap<u32, u32>,
}

impl Default for ImageAllocator {
    fn default() -> Self { Self::new(OBJECT_IMAGE_BASE..OBJECT_IMAGE_BASE + OBJECT_IMAGE_CAPACITY) }
}

impl ImageAllocator {
    #[must_use]
    pub fn new(ids: Range<u32>) -> Self {
        let mut free = BTreeMap::new();
        if !ids.is_empty() {
            free.insert(ids.start, ids.end - ids.start);
        }
        Self { free, allocated: BTreeMap::new() }
    }

    pub fn allocate(&mut self, count: u32) -> Result<ImageRange, Error> {
        if count == 0 {
            return Err(Error::EmptyRequest);
        }
        let (&start, &len) = self
            .free
            .iter()
            .find(|&(_, &len)| len >= count)
            .ok_or(Error::Exhausted { requested: count })?;
        self.free.remove(&start);
        if len > count {
            self.free.insert(start + count, len - count);
        }
        self.allocated.insert(start, count);
        Ok(ImageRange { base: ImageId(start), count })
    }

    pub fn free(&mut self, range: ImageRange) -> Result<(), Error> {
        let start = range.base.0;
        match self.allocated.get(&start) {
            None => return Err(Error::NotAllocated { id: start }),
            Some(&count) if count != range.count => {
                return Err(Error::CountMismatch { id: start, allocated: count, released: range.count });
            }
            Some(_) => {}
        }
        self.allocated.remove(&start);

        let mut start = start;
        let mut len = range.count;
        if let Some((&prev_start, &prev_len)) = self.free.range(..start).next_back()
            && prev_start + prev_len == start
        {
            self.free.remove(&prev_start);
            start = prev_start;
            len += prev_len;
        }
        if let Some(next_len) = self.free.remove(&(start + len)) {
            len += next_len;
        }
        self.free.insert(start, len);
        Ok(())
    }

    /// Number of ranges allocated and not yet released.
    #[must_use]
    pub fn outstanding(&self) -> usize { self.allocated.len() }

    /// Number of ids that can still be allocated, possibly fragmented.
    #[must_use]
    pub fn available(&self) -> u32 { self.free.values().sum() }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringId(pub u16);

/// Allocator of string ids that keeps the text of every allocated id.
#[derive(Debug, Resource)]
pub struct StringAllocator {
    next:      u16,
    end:       u16,
    recycled:  Vec<u16>,
    allocated: HashMap<u16, String>,
}

impl Default for StringAllocator {
    fn default() -> Self {
        Self::new(OBJECT_STRING_BASE..OBJECT_STRING_BASE + OBJECT_STRING_CAPACITY)
    }
}

impl StringAllocator {
    #[must_use]
    pub fn new(ids: Range<u16>) -> Self {
        Self { next: ids.start, end: ids.end, recycled: Vec::new(), allocated: HashMap::new() }
    }

    pub fn allocate(&mut self, text: impl Into<String>) -> Result<StringId, Error> {
        let id = if let Some(id) = self.recycled.pop() {
            id
        } else if self.next < self.end {
            self.next += 1;
            self.next - 1
        } else {
            return Err(Error::Exhausted { requested: 1 });
        };
        self.allocated.insert(id, text.into());
        Ok(StringId(id))
    }

    pub fn free(&mut self, id: StringId) -> Result<(), Error> {
        if self.allocated.remove(&id.0).is_none() {
            return Err(Error::NotAllocated { id: u32::from(id.0) });
        }
        self.recycled.push(id.0);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: StringId) -> Option<&str> { self.allocated.get(&id.0).map(String::as_str) }

    #[must_use]
    pub fn outstanding(&self) -> usize { self.allocated.len() }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("cannot allocate an empty range")]
    EmptyRequest,
    #[error("no free range of {requested} ids")]
    Exhausted { requested: u32 },
    #[error("id {id} is not the start of an allocation")]
    NotAllocated { id: u32 },
    #[error("id {id} was allocated with {allocated} ids but released with {released}")]
    CountMismatch { id: u32, allocated: u32, released: u32 },
}
