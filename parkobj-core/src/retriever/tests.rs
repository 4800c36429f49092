use std::fs;

use super::{ArchiveRetriever, Asset, DirectoryRetriever, Error, Retriever};
use crate::fixture;

#[test]
fn test_directory_retriever() {
    let dir = fixture::temp_dir("directory_retriever");
    fs::create_dir_all(dir.join("images")).unwrap();
    fs::write(dir.join("images/a.png"), b"png").unwrap();

    let retriever = DirectoryRetriever::new(&dir);
    assert_eq!(retriever.get_data("images/a.png").unwrap(), b"png");
    assert!(matches!(retriever.get_data("images/b.png"), Err(Error::NotFound(_))));
    assert_eq!(retriever.get_asset("images/a.png"), Asset::File(dir.join("images/a.png")));
    assert_eq!(retriever.get_asset("images/b.png"), Asset::Missing);
}

#[test]
fn test_archive_retriever() {
    let dir = fixture::temp_dir("archive_retriever");
    let path = dir.join("object.parkobj");
    fixture::write_zip(&path, &[("object.json", b"{}".as_slice()), ("music/track.ogg", b"ogg".as_slice())]);

    let retriever = ArchiveRetriever::open(&path).unwrap();
    assert_eq!(retriever.get_data("object.json").unwrap(), b"{}");
    assert_eq!(retriever.get_data("music\\track.ogg").unwrap(), b"ogg");
    assert!(matches!(retriever.get_data("missing.png"), Err(Error::NotFound(_))));

    let asset = retriever.get_asset("music/track.ogg");
    assert!(asset.is_available());
    assert_eq!(asset.read().unwrap(), b"ogg");
    assert!(!retriever.get_asset("music/none.ogg").is_available());
}

#[test]
fn test_archive_retriever_rejects_non_zip() {
    let dir = fixture::temp_dir("archive_retriever_non_zip");
    let path = dir.join("broken.parkobj");
    fs::write(&path, b"not a zip").unwrap();
    assert!(matches!(ArchiveRetriever::open(&path), Err(Error::Zip(_))));
}
