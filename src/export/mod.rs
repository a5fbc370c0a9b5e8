// SPDX-License-Identifier: MPL-2.0
//! The export pipeline: flatten the current composition and hand the result
//! to a persistence mechanism.
//!
//! Exactly one [`ExportStrategy`] is wired in at startup, chosen from the
//! configured export target; the screen's update logic never branches on
//! the platform. Both strategies are single-attempt: no retry, no partial
//! delivery.

use crate::application::port::raster::{
    Composition, RasterImage, RasterParams, Rasterizer, COMPOSITION_HEIGHT, COMPOSITION_WIDTH,
};
use crate::application::port::sink::{DownloadSink, MediaLibrary};
use crate::config::ExportTarget;
use crate::error::Result;
use crate::infrastructure::{DownloadsFolder, PicturesLibrary};
use base64::Engine as _;
use std::io::Cursor;
use std::sync::Arc;

/// Fixed file name used by the download path. Collisions are the browser
/// analog's problem, not ours.
pub const DOWNLOAD_FILE_NAME: &str = "sticker-smash.jpeg";

/// JPEG quality for the download path.
pub const DOWNLOAD_JPEG_QUALITY: f32 = 0.95;

/// Capture quality for the library path (lossless PNG encoding).
pub const LIBRARY_CAPTURE_QUALITY: f32 = 1.0;

/// What a successful export produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// File name the artifact was delivered under.
    pub file_name: String,
    /// On-disk location, when the strategy can observe one.
    pub saved_to: Option<std::path::PathBuf>,
}

/// One of the two mutually exclusive export paths.
pub trait ExportStrategy: Send + Sync {
    fn export(
        &self,
        rasterizer: &dyn Rasterizer,
        composition: &Composition,
    ) -> Result<ExportOutcome>;
}

/// Builds the strategy for the configured target, wired to the real
/// platform directories.
pub fn strategy_for(target: ExportTarget) -> Arc<dyn ExportStrategy> {
    match target {
        ExportTarget::Library => Arc::new(LibraryExport::new(Arc::new(PicturesLibrary::new(
            PicturesLibrary::default_dir(),
        )))),
        ExportTarget::Download => Arc::new(DownloadExport::new(Arc::new(DownloadsFolder::new(
            DownloadsFolder::default_dir(),
        )))),
    }
}

/// Native-style path: capture at full quality, height-constrained only,
/// then save into the media library under a timestamped name.
pub struct LibraryExport {
    library: Arc<dyn MediaLibrary>,
}

impl LibraryExport {
    pub fn new(library: Arc<dyn MediaLibrary>) -> Self {
        Self { library }
    }
}

impl ExportStrategy for LibraryExport {
    fn export(
        &self,
        rasterizer: &dyn Rasterizer,
        composition: &Composition,
    ) -> Result<ExportOutcome> {
        let params = RasterParams {
            width: None,
            height: COMPOSITION_HEIGHT,
            quality: LIBRARY_CAPTURE_QUALITY,
        };
        let raster = rasterizer.rasterize(composition, &params)?;
        let bytes = encode_png(&raster)?;
        let file_name = library_file_name(chrono::Local::now());
        let path = self.library.save_to_library(&file_name, &bytes)?;
        Ok(ExportOutcome {
            file_name,
            saved_to: Some(path),
        })
    }
}

fn library_file_name(now: chrono::DateTime<chrono::Local>) -> String {
    format!("sticker-smash-{}.png", now.format("%Y%m%d-%H%M%S"))
}

/// Web-style path: rasterize at exactly 320x440, encode a JPEG data URI,
/// and trigger a single download under the fixed file name.
pub struct DownloadExport {
    sink: Arc<dyn DownloadSink>,
}

impl DownloadExport {
    pub fn new(sink: Arc<dyn DownloadSink>) -> Self {
        Self { sink }
    }
}

impl ExportStrategy for DownloadExport {
    fn export(
        &self,
        rasterizer: &dyn Rasterizer,
        composition: &Composition,
    ) -> Result<ExportOutcome> {
        let params = RasterParams {
            width: Some(COMPOSITION_WIDTH),
            height: COMPOSITION_HEIGHT,
            quality: DOWNLOAD_JPEG_QUALITY,
        };
        let raster = rasterizer.rasterize(composition, &params)?;
        let jpeg = encode_jpeg(&raster, params.quality)?;
        let data_uri = format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&jpeg)
        );
        self.sink.download(DOWNLOAD_FILE_NAME, &data_uri)?;
        Ok(ExportOutcome {
            file_name: DOWNLOAD_FILE_NAME.to_string(),
            saved_to: None,
        })
    }
}

fn encode_png(raster: &RasterImage) -> Result<Vec<u8>> {
    let image = to_rgba_image(raster)?;
    let mut buffer = Cursor::new(Vec::new());
    image_rs::DynamicImage::ImageRgba8(image).write_to(&mut buffer, image_rs::ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

fn encode_jpeg(raster: &RasterImage, quality: f32) -> Result<Vec<u8>> {
    let rgb = image_rs::DynamicImage::ImageRgba8(to_rgba_image(raster)?).to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    let mut encoder = image_rs::codecs::jpeg::JpegEncoder::new_with_quality(
        &mut buffer,
        (quality * 100.0).round() as u8,
    );
    encoder.encode(
        rgb.as_raw(),
        raster.width,
        raster.height,
        image_rs::ExtendedColorType::Rgb8,
    )?;
    Ok(buffer.into_inner())
}

fn to_rgba_image(raster: &RasterImage) -> Result<image_rs::RgbaImage> {
    image_rs::RgbaImage::from_raw(raster.width, raster.height, raster.pixels.clone())
        .ok_or_else(|| crate::error::Error::Raster("raster buffer size mismatch".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;

    /// Rasterizer that records every request and returns a flat gray image.
    #[derive(Default)]
    struct RecordingRasterizer {
        calls: Mutex<Vec<RasterParams>>,
    }

    impl Rasterizer for RecordingRasterizer {
        fn rasterize(
            &self,
            _composition: &Composition,
            params: &RasterParams,
        ) -> Result<RasterImage> {
            self.calls.lock().unwrap().push(*params);
            let width = params.width.unwrap_or(COMPOSITION_WIDTH);
            Ok(RasterImage {
                width,
                height: params.height,
                pixels: vec![0x80; (width * params.height * 4) as usize],
            })
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(&self, _: &Composition, _: &RasterParams) -> Result<RasterImage> {
            Err(Error::Raster("capture failed".into()))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        downloads: Mutex<Vec<(String, String)>>,
    }

    impl DownloadSink for RecordingSink {
        fn download(&self, file_name: &str, data_uri: &str) -> Result<()> {
            self.downloads
                .lock()
                .unwrap()
                .push((file_name.to_string(), data_uri.to_string()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingLibrary {
        saved: Mutex<Vec<String>>,
    }

    impl MediaLibrary for RecordingLibrary {
        fn save_to_library(&self, file_name: &str, _bytes: &[u8]) -> Result<std::path::PathBuf> {
            self.saved.lock().unwrap().push(file_name.to_string());
            Ok(std::path::PathBuf::from("/library").join(file_name))
        }
    }

    struct FailingLibrary;

    impl MediaLibrary for FailingLibrary {
        fn save_to_library(&self, _: &str, _: &[u8]) -> Result<std::path::PathBuf> {
            Err(Error::Export("library unavailable".into()))
        }
    }

    #[test]
    fn download_requests_exactly_320x440_at_quality_095() {
        let rasterizer = RecordingRasterizer::default();
        let sink = Arc::new(RecordingSink::default());
        let strategy = DownloadExport::new(sink.clone());

        strategy
            .export(&rasterizer, &Composition::default())
            .expect("export should succeed");

        let calls = rasterizer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].width, Some(320));
        assert_eq!(calls[0].height, 440);
        assert!((calls[0].quality - 0.95).abs() < f32::EPSILON);
    }

    #[test]
    fn download_triggers_exactly_one_download_with_fixed_name() {
        let rasterizer = RecordingRasterizer::default();
        let sink = Arc::new(RecordingSink::default());
        let strategy = DownloadExport::new(sink.clone());

        let outcome = strategy
            .export(&rasterizer, &Composition::default())
            .unwrap();

        let downloads = sink.downloads.lock().unwrap();
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].0, "sticker-smash.jpeg");
        assert!(downloads[0].1.starts_with("data:image/jpeg;base64,"));
        assert_eq!(outcome.file_name, DOWNLOAD_FILE_NAME);
        assert!(outcome.saved_to.is_none());
    }

    #[test]
    fn download_payload_decodes_to_a_320x440_jpeg() {
        let rasterizer = RecordingRasterizer::default();
        let sink = Arc::new(RecordingSink::default());
        DownloadExport::new(sink.clone())
            .export(&rasterizer, &Composition::default())
            .unwrap();

        let downloads = sink.downloads.lock().unwrap();
        let payload = downloads[0].1.strip_prefix("data:image/jpeg;base64,").unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        let decoded = image_rs::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (320, 440));
    }

    #[test]
    fn library_export_constrains_height_only_at_full_quality() {
        let rasterizer = RecordingRasterizer::default();
        let library = Arc::new(RecordingLibrary::default());
        let strategy = LibraryExport::new(library.clone());

        let outcome = strategy
            .export(&rasterizer, &Composition::default())
            .unwrap();

        let calls = rasterizer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].width, None);
        assert_eq!(calls[0].height, COMPOSITION_HEIGHT);
        assert!((calls[0].quality - 1.0).abs() < f32::EPSILON);

        let saved = library.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].starts_with("sticker-smash-"));
        assert!(saved[0].ends_with(".png"));
        assert_eq!(outcome.saved_to.as_deref(), Some(std::path::Path::new("/library").join(&saved[0]).as_path()));
    }

    #[test]
    fn library_export_writes_png_bytes() {
        struct ByteCheckingLibrary;
        impl MediaLibrary for ByteCheckingLibrary {
            fn save_to_library(&self, file_name: &str, bytes: &[u8]) -> Result<std::path::PathBuf> {
                assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
                Ok(std::path::PathBuf::from(file_name))
            }
        }

        LibraryExport::new(Arc::new(ByteCheckingLibrary))
            .export(&RecordingRasterizer::default(), &Composition::default())
            .unwrap();
    }

    #[test]
    fn rasterizer_failure_propagates_from_both_strategies() {
        let library = LibraryExport::new(Arc::new(RecordingLibrary::default()));
        assert!(library
            .export(&FailingRasterizer, &Composition::default())
            .is_err());

        let download = DownloadExport::new(Arc::new(RecordingSink::default()));
        assert!(download
            .export(&FailingRasterizer, &Composition::default())
            .is_err());
    }

    #[test]
    fn library_failure_propagates() {
        let strategy = LibraryExport::new(Arc::new(FailingLibrary));
        let err = strategy
            .export(&RecordingRasterizer::default(), &Composition::default())
            .unwrap_err();
        assert!(matches!(err, Error::Export(_)));
    }

    #[test]
    fn library_file_name_is_timestamped_png() {
        let name = library_file_name(chrono::Local::now());
        assert!(name.starts_with("sticker-smash-"));
        assert!(name.ends_with(".png"));
        // sticker-smash-YYYYMMDD-HHMMSS.png
        assert_eq!(name.len(), "sticker-smash-".len() + 15 + ".png".len());
    }
}
