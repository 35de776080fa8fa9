//! Helpers shared by integration tests: unzip archives and scan the QR codes inside.

use image::{imageops, GrayImage, Luma};
use std::io::{Cursor, Read};

/// (name, bytes) for every archive entry, in archive order.
pub fn unzip(archive: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive)).expect("valid zip");
    (0..zip.len())
        .map(|i| {
            let mut file = zip.by_index(i).expect("entry");
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).expect("read entry");
            (file.name().to_string(), bytes)
        })
        .collect()
}

pub fn names(archive: &[u8]) -> Vec<String> {
    unzip(archive).into_iter().map(|(name, _)| name).collect()
}

/// Decode the single QR code in a PNG the way a scanner would (with a white margin around it).
pub fn scan(png: &[u8]) -> String {
    let gray = image::load_from_memory(png).expect("png").to_luma8();
    let margin = 40;
    let mut padded = GrayImage::from_pixel(
        gray.width() + 2 * margin,
        gray.height() + 2 * margin,
        Luma([255]),
    );
    imageops::replace(&mut padded, &gray, i64::from(margin), i64::from(margin));

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        padded.width() as usize,
        padded.height() as usize,
        |x, y| padded.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected exactly one symbol");
    let (_, content) = grids[0].decode().expect("decodable symbol");
    content
}
