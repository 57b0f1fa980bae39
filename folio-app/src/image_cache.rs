//! Asynchronous fetching and decoding of carousel media and the portrait.
//!
//! Fetch and decode run off the UI thread; results re-enter the update loop
//! as messages and land in the shared cache. A failed key renders as a
//! placeholder, never as a visible error.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use iced::widget::image::Handle;

/// Longest edge images are downscaled to before reaching the renderer.
pub const MAX_DISPLAY_WIDTH: u32 = 720;

/// Load lifecycle for one cached image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(Handle),
    Failed,
}

/// Decoded RGBA pixels produced off the UI thread.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Decoded {
    pub fn into_handle(self) -> Handle {
        Handle::from_rgba(self.width, self.height, self.rgba)
    }
}

/// A generic image cache shared between the update loop and the views.
#[derive(Debug, Clone)]
pub struct ImageCache {
    cache: Arc<Mutex<HashMap<String, ImageState>>>,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCache {
    pub fn new() -> Self {
        ImageCache {
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get(&self, key: &str) -> Option<ImageState> {
        self.cache.lock().unwrap().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.cache.lock().unwrap().contains_key(key)
    }

    pub fn set_loading(&self, key: String) {
        self.cache.lock().unwrap().insert(key, ImageState::Loading);
    }

    pub fn set_loaded(&self, key: String, handle: Handle) {
        self.cache
            .lock()
            .unwrap()
            .insert(key, ImageState::Loaded(handle));
    }

    pub fn set_failed(&self, key: String) {
        self.cache.lock().unwrap().insert(key, ImageState::Failed);
    }
}

/// Image source specification
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Direct URL (remote thumbnail or hosted asset)
    Url(String),
    /// Local file next to the content
    File(PathBuf),
}

impl ImageSource {
    /// Classify a content URI. Empty references (a video without a
    /// derivable thumbnail) yield no source at all.
    pub fn for_uri(uri: &str) -> Option<ImageSource> {
        if uri.is_empty() {
            return None;
        }
        if uri.starts_with("http://") || uri.starts_with("https://") {
            Some(ImageSource::Url(uri.to_string()))
        } else {
            Some(ImageSource::File(PathBuf::from(uri)))
        }
    }

    /// Get a unique cache key for this image source
    pub fn cache_key(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::File(path) => path.to_string_lossy().into_owned(),
        }
    }
}

/// Fetch raw bytes from any source
pub async fn fetch_bytes(source: ImageSource) -> Result<Vec<u8>, anyhow::Error> {
    match source {
        ImageSource::Url(url) => {
            log::info!("Fetching image from URL: {}", url);
            let response = reqwest::get(&url).await?;

            if !response.status().is_success() {
                log::warn!(
                    "Failed to fetch image: {} - {}",
                    url,
                    response.status()
                );
                return Err(anyhow::anyhow!(
                    "Failed to fetch image: {}",
                    response.status()
                ));
            }

            let bytes = response.bytes().await?;
            Ok(bytes.to_vec())
        }
        ImageSource::File(path) => Ok(tokio::fs::read(&path).await?),
    }
}

/// Fetch and decode an image, returning it with its cache key.
pub async fn load(source: ImageSource) -> (String, Result<Decoded, String>) {
    let key = source.cache_key();
    let result = fetch_and_decode(source)
        .await
        .map_err(|err| err.to_string());
    (key, result)
}

async fn fetch_and_decode(source: ImageSource) -> anyhow::Result<Decoded> {
    let bytes = fetch_bytes(source).await?;
    // Decoding and resizing are CPU-bound; keep them off the runtime
    // workers that service the UI.
    let decoded =
        tokio::task::spawn_blocking(move || decode(&bytes)).await??;
    Ok(decoded)
}

fn decode(bytes: &[u8]) -> anyhow::Result<Decoded> {
    let decoded = image::load_from_memory(bytes)?;
    let decoded = if decoded.width() > MAX_DISPLAY_WIDTH {
        decoded.thumbnail(MAX_DISPLAY_WIDTH, u32::MAX)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    Ok(Decoded {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_classification() {
        assert!(matches!(
            ImageSource::for_uri("https://img.youtube.com/vi/x/hqdefault.jpg"),
            Some(ImageSource::Url(_))
        ));
        assert!(matches!(
            ImageSource::for_uri("assets/projects/cover.png"),
            Some(ImageSource::File(_))
        ));
        assert!(ImageSource::for_uri("").is_none());
    }

    #[test]
    fn cache_state_transitions() {
        let cache = ImageCache::new();
        assert!(cache.get("k").is_none());

        cache.set_loading("k".to_string());
        assert!(matches!(cache.get("k"), Some(ImageState::Loading)));
        assert!(cache.contains("k"));

        cache.set_failed("k".to_string());
        assert!(matches!(cache.get("k"), Some(ImageState::Failed)));
    }

    #[test]
    fn decode_downscales_oversized_images() {
        let wide = image::RgbaImage::new(MAX_DISPLAY_WIDTH * 2, 100);
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(wide)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.width, MAX_DISPLAY_WIDTH);
        assert_eq!(decoded.rgba.len() as u32, decoded.width * decoded.height * 4);
    }
}
