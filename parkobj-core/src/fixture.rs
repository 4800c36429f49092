//! Builders of test inputs.

use std::fs::{self, File};
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::chunk::{self, Encoding};
use crate::descriptor::{LegacyEntry, checksum};
use crate::images::{ImageEntry, ImageSource, ImageTable};

/// Creates an empty directory unique to this test run.
pub fn temp_dir(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "parkobj-{name}-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, data) in entries {
        zip.start_file(*name, zip::write::SimpleFileOptions::default()).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255])).save(path).unwrap();
}

/// Appends a legacy string table with the given `(language, text)` pairs.
pub fn strings(out: &mut Vec<u8>, strings: &[(u8, &str)]) {
    for (language, text) in strings {
        out.push(*language);
        out.extend_from_slice(text.as_bytes());
        out.push(0);
    }
    out.push(0xFF);
}

/// Appends a legacy image table of `count` 1x1 images with one byte of pixel data each.
pub fn images(out: &mut Vec<u8>, count: u32) {
    out.write_u32::<LittleEndian>(count).unwrap();
    out.write_u32::<LittleEndian>(count).unwrap();
    for i in 0..count {
        out.write_u32::<LittleEndian>(i).unwrap();
        out.write_i16::<LittleEndian>(1).unwrap();
        out.write_i16::<LittleEndian>(1).unwrap();
        out.write_i16::<LittleEndian>(0).unwrap();
        out.write_i16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
        out.write_u16::<LittleEndian>(0).unwrap();
    }
    out.extend((0..count).map(|i| i as u8));
}

/// Appends an empty scenery group reference.
pub fn no_group(out: &mut Vec<u8>) { out.extend_from_slice(&[0xFF; LegacyEntry::LEN]); }

/// Builds a complete legacy object file with a correct checksum.
pub fn legacy_file(mut entry: LegacyEntry, encoding: Encoding, data: &[u8]) -> Vec<u8> {
    entry.checksum = checksum(&entry, data);
    let mut out = entry.to_bytes().to_vec();
    out.extend(chunk::write(encoding, data));
    out
}

/// Serves `$NAME[a..b]` references with 1x1 images, for sources listed in `names`.
pub struct StubImageSource {
    pub names: Vec<&'static str>,
}

impl ImageSource for StubImageSource {
    fn images(&self, name: &str, range: RangeInclusive<u32>) -> Option<ImageTable> {
        if !self.names.contains(&name) {
            return None;
        }
        let mut table = ImageTable::default();
        for index in range {
            let entry = ImageEntry { width: 1, height: 1, ..ImageEntry::default() };
            table.push(entry, &[index as u8]);
        }
        Some(table)
    }
}
