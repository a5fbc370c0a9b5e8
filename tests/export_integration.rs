// SPDX-License-Identifier: MPL-2.0
//! End-to-end export tests using the real software rasterizer and
//! filesystem sinks in temporary directories.

use sticker_smash::application::port::raster::{
    Composition, COMPOSITION_HEIGHT, COMPOSITION_WIDTH,
};
use sticker_smash::export::{DownloadExport, ExportStrategy, LibraryExport, DOWNLOAD_FILE_NAME};
use sticker_smash::infrastructure::{DownloadsFolder, PicturesLibrary, SoftwareRasterizer};
use sticker_smash::stickers;
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_library_export_writes_a_timestamped_png() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let rasterizer = SoftwareRasterizer::new();
    let strategy = LibraryExport::new(Arc::new(PicturesLibrary::new(dir.path().to_path_buf())));

    let (sticker, _) = stickers::catalog().next().expect("catalog is not empty");
    let composition = Composition {
        background: None,
        sticker: Some(sticker),
    };

    let outcome = strategy
        .export(&rasterizer, &composition)
        .expect("library export failed");

    assert!(outcome.file_name.starts_with("sticker-smash-"));
    assert!(outcome.file_name.ends_with(".png"));

    let saved = outcome.saved_to.expect("library export reports a path");
    let bytes = std::fs::read(&saved).expect("saved file is readable");

    let decoded = image_rs::load_from_memory(&bytes).expect("saved file decodes as an image");
    assert_eq!(decoded.width(), COMPOSITION_WIDTH);
    assert_eq!(decoded.height(), COMPOSITION_HEIGHT);
}

#[test]
fn test_download_export_writes_fixed_name_jpeg() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let rasterizer = SoftwareRasterizer::new();
    let strategy = DownloadExport::new(Arc::new(DownloadsFolder::new(dir.path().to_path_buf())));

    let composition = Composition::default();

    let outcome = strategy
        .export(&rasterizer, &composition)
        .expect("download export failed");
    assert_eq!(outcome.file_name, DOWNLOAD_FILE_NAME);

    let saved = dir.path().join(DOWNLOAD_FILE_NAME);
    let bytes = std::fs::read(&saved).expect("download file is readable");

    let decoded = image_rs::load_from_memory(&bytes).expect("download decodes as an image");
    assert_eq!(decoded.width(), 320);
    assert_eq!(decoded.height(), 440);
}
