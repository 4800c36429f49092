//! Image tables of objects.

use std::ops::RangeInclusive;

use store::{ImageDescriptor, ImageFile};

use crate::alloc::OBJECT_IMAGE_CAPACITY;
use crate::chunk::MAX_DECODED_LEN;
use crate::context::{ObjectError, ReadContext};
use crate::stream::{self, Stream};


/// Size of an element header in a legacy image table.
pub const LEGACY_ELEMENT_LEN: usize = 16;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct ImageFlags: u16 {
        const HAS_TRANSPARENCY = 1 << 0;
        const RLE_COMPRESSION  = 1 << 2;
        const PALETTE          = 1 << 3;
        const HAS_ZOOM_SPRITE  = 1 << 4;
        const NO_ZOOM_DRAW     = 1 << 5;
        /// Pixels are 32-bit RGBA imported from a PNG, not palette indices.
        const RGBA             = 1 << 15;
    }
}

/// Header of one image. Pixel data lives in the table's shared buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageEntry {
    /// Offset of the pixel data in [`ImageTable::data`].
    pub offset:        u32,
    pub width:         i16,
    pub height:        i16,
    pub x_offset:      i16,
    pub y_offset:      i16,
    pub flags:         ImageFlags,
    pub zoomed_offset: u16,
}

impl ImageEntry {
    /// An empty image that stands in for one that could not be loaded.
    #[must_use]
    pub fn placeholder() -> Self { Self::default() }
}

/// Provides images of external sources referenced as `$NAME[a..b]`,
/// such as the base game's sprite files.
pub trait ImageSource {
    /// Returns the images `range` of source `name`, or `None` if the source or range is unavailable.
    fn images(&self, name: &str, range: RangeInclusive<u32>) -> Option<ImageTable>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTable {
    entries: Vec<ImageEntry>,
    data:    Vec<u8>,
}

impl ImageTable {
    #[must_use]
    pub fn new(entries: Vec<ImageEntry>, data: Vec<u8>) -> Self { Self { entries, data } }

    #[must_use]
    pub fn entries(&self) -> &[ImageEntry] { &self.entries }

    #[must_use]
    pub fn data(&self) -> &[u8] { &self.data }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn push(&mut self, mut entry: ImageEntry, pixels: &[u8]) {
        entry.offset = self.data.len() as u32;
        self.data.extend_from_slice(pixels);
        self.entries.push(entry);
    }

    pub fn push_placeholders(&mut self, count: usize) {
        self.entries.extend(std::iter::repeat_n(ImageEntry::placeholder(), count));
    }

    /// Appends all images of `other`, rebasing their data offsets.
    pub fn append(&mut self, other: Self) {
        let base = self.data.len() as u32;
        self.data.extend(other.data);
        self.entries.extend(
            other.entries.into_iter().map(|entry| ImageEntry { offset: entry.offset + base, ..entry }),
        );
    }

    /// Reads a legacy image table. When images are not requested, the table is only skipped.
    pub fn read_legacy(
        &mut self,
        ctx: &mut ReadContext<'_>,
        stream: &mut Stream<'_>,
    ) -> stream::Result<()> {
        let count = stream.read_u32()? as usize;
        let declared_len = stream.read_u32()? as usize;
        let headers_len = count.saturating_mul(LEGACY_ELEMENT_LEN);

        if !ctx.should_load_images() {
            stream.skip(headers_len)?;
            let data_len = declared_len.min(stream.remaining());
            return stream.skip(data_len);
        }

        let mut entries = Vec::with_capacity(count.min(stream.remaining() / LEGACY_ELEMENT_LEN));
        for _ in 0..count {
            entries.push(ImageEntry {
                offset:        stream.read_u32()?,
                width:         stream.read_i16()?,
                height:        stream.read_i16()?,
                x_offset:      stream.read_i16()?,
                y_offset:      stream.read_i16()?,
                flags:         ImageFlags::from_bits_retain(stream.read_u16()?),
                zoomed_offset: stream.read_u16()?,
            });
        }

        let mut data_len = declared_len;
        if stream.remaining() > declared_len {
            ctx.log_warning(ObjectError::BadImageTable, "Image table size longer than expected.");
            data_len = stream.remaining();
        }
        // A table is never larger than the record holding it.
        data_len = data_len.min(MAX_DECODED_LEN.max(stream.remaining()));
        let mut data = vec![0; data_len];
        if stream.read_partial(&mut data) < data_len {
            ctx.log_warning(ObjectError::BadImageTable, "Image table size shorter than expected.");
        }

        for (index, entry) in entries.iter().enumerate() {
            if entry.offset as usize > data_len {
                ctx.log_warning(
                    ObjectError::BadImageTable,
                    format!("Image {index} points outside of the image data."),
                );
            }
        }

        self.append(Self { entries, data });
        Ok(())
    }

    /// Imports the `images` array of a manifest. Skipped entirely when images are not requested.
    pub fn read_json(&mut self, ctx: &mut ReadContext<'_>, images: &[ImageDescriptor]) {
        if !ctx.should_load_images() {
            return;
        }
        for descriptor in images {
            match descriptor {
                ImageDescriptor::Shorthand(text) if text.starts_with('$') => {
                    self.read_source_reference(ctx, text);
                }
                ImageDescriptor::Shorthand(path) => {
                    self.read_png(ctx, &ImageFile { path: path.clone(), ..ImageFile::default() });
                }
                ImageDescriptor::File(file) => self.read_png(ctx, file),
            }
        }
    }

    fn read_source_reference(&mut self, ctx: &mut ReadContext<'_>, text: &str) {
        let Some((name, range)) = parse_source_reference(text) else {
            ctx.log_error(ObjectError::BadImageTable, format!("Invalid image reference {text}."));
            return;
        };
        let count = (range.end() - range.start())
            .checked_add(1)
            .filter(|&count| count <= OBJECT_IMAGE_CAPACITY);
        let Some(count) = count else {
            let message = format!("Image reference {text} is too large.");
            ctx.log_error(ObjectError::BadImageTable, message);
            return;
        };
        let count = count as usize;
        match ctx.image_source().and_then(|source| source.images(name, range.clone())) {
            Some(table) if table.len() == count => self.append(table),
            _ => {
                ctx.log_warning(
                    ObjectError::BadImageTable,
                    format!("Images {text} are not available, using placeholders."),
                );
                self.push_placeholders(count);
            }
        }
    }

    fn read_png(&mut self, ctx: &mut ReadContext<'_>, file: &ImageFile) {
        match decode_png(ctx, file) {
            Ok((entry, pixels)) => self.push(entry, &pixels),
            Err(err) => {
                ctx.log_error(
                    ObjectError::BadImageTable,
                    format!("Unable to load image {}: {err}", file.path),
                );
            }
        }
    }
}

/// Parses `$NAME[a..b]` or `$NAME[a]`.
#[must_use]
pub fn parse_source_reference(text: &str) -> Option<(&str, RangeInclusive<u32>)> {
    let rest = text.strip_prefix('$')?;
    let (name, range) = rest.strip_suffix(']')?.split_once('[')?;
    if name.is_empty() {
        return None;
    }
    let range = match range.split_once("..") {
        Some((start, end)) => start.trim().parse().ok()?..=end.trim().parse().ok()?,
        None => {
            let index = range.trim().parse().ok()?;
            index..=index
        }
    };
    if range.is_empty() {
        return None;
    }
    Some((name, range))
}

#[derive(Debug, thiserror::Error)]
enum PngError {
    #[error("{0}")]
    Retriever(#[from] crate::retriever::Error),
    #[error("{0}")]
    Decode(#[from] image::ImageError),
    #[error("source rectangle is outside of the {0}x{1} image")]
    OutOfBounds(u32, u32),
    #[error("image is larger than {}x{} pixels", i16::MAX, i16::MAX)]
    TooLarge,
}

fn decode_png(ctx: &ReadContext<'_>, file: &ImageFile) -> Result<(ImageEntry, Vec<u8>), PngError> {
    let bytes = ctx.get_data(&file.path)?;
    let mut rgba = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)?.to_rgba8();
    let (full_width, full_height) = rgba.dimensions();

    let x = file.src_x.unwrap_or(0);
    let y = file.src_y.unwrap_or(0);
    let width = file.src_width.unwrap_or_else(|| full_width.saturating_sub(x));
    let height = file.src_height.unwrap_or_else(|| full_height.saturating_sub(y));
    if x.checked_add(width).is_none_or(|right| right > full_width)
        || y.checked_add(height).is_none_or(|bottom| bottom > full_height)
    {
        return Err(PngError::OutOfBounds(full_width, full_height));
    }
    let cropped = image::imageops::crop(&mut rgba, x, y, width, height).to_image();

    let entry = ImageEntry {
        offset:        0,
        width:         i16::try_from(width).map_err(|_| PngError::TooLarge)?,
        height:        i16::try_from(height).map_err(|_| PngError::TooLarge)?,
        x_offset:      file.x,
        y_offset:      file.y,
        flags:         ImageFlags::RGBA,
        zoomed_offset: 0,
    };
    Ok((entry, cropped.into_raw()))
}
