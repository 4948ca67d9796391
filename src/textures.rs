use std::collections::HashMap;
use std::path::Path;

use crate::config::TextureConfig;

/// Logical texture names used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Stone,
    Wood,
    Leaves,
    Grass,
    Ball,
}

impl TextureKey {
    pub const ALL: [TextureKey; 5] = [
        TextureKey::Stone,
        TextureKey::Wood,
        TextureKey::Leaves,
        TextureKey::Grass,
        TextureKey::Ball,
    ];

    pub fn file_name(self, config: &TextureConfig) -> &str {
        match self {
            TextureKey::Stone => &config.stone,
            TextureKey::Wood => &config.wood,
            TextureKey::Leaves => &config.leaves,
            TextureKey::Grass => &config.grass,
            TextureKey::Ball => &config.ball,
        }
    }
}

/// Decoded RGBA8 pixels, first row is the bottom of the picture
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    /// True when this is the stand-in for a missing file
    pub placeholder: bool,
}

impl TextureImage {
    pub const PLACEHOLDER_RGBA: [u8; 4] = [255, 0, 255, 255];

    /// Single magenta pixel
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: Self::PLACEHOLDER_RGBA.to_vec(),
            placeholder: true,
        }
    }

    /// Single opaque white pixel, bound for untextured draws
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
            placeholder: false,
        }
    }

    /// Decode an image file, flipped so texture coordinate v = 0 is the bottom edge
    pub fn load(path: &Path) -> Result<Self, image::ImageError> {
        let rgba = image::open(path)?.flipv().into_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            rgba: rgba.into_raw(),
            placeholder: false,
        })
    }
}

/// All scene textures keyed by logical name. Missing or unreadable files are
/// replaced by [`TextureImage::placeholder`].
#[derive(Debug, Clone)]
pub struct TextureSet {
    images: HashMap<TextureKey, TextureImage>,
}

impl TextureSet {
    pub fn load(config: &TextureConfig) -> Self {
        let images = TextureKey::ALL
            .into_iter()
            .map(|key| {
                let path = config.directory.join(key.file_name(config));
                let image = match TextureImage::load(&path) {
                    Ok(image) => {
                        log::info!(
                            "Loaded {:?} texture {} ({}x{})",
                            key,
                            path.display(),
                            image.width,
                            image.height
                        );
                        image
                    }
                    Err(e) => {
                        log::warn!(
                            "Texture {} unavailable ({}); using placeholder",
                            path.display(),
                            e
                        );
                        TextureImage::placeholder()
                    }
                };
                (key, image)
            })
            .collect();

        Self { images }
    }

    /// Every key maps to an image, real or placeholder
    pub fn get(&self, key: TextureKey) -> &TextureImage {
        &self.images[&key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TextureKey, &TextureImage)> + '_ {
        TextureKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn placeholder_count(&self) -> usize {
        self.images.values().filter(|image| image.placeholder).count()
    }
}
