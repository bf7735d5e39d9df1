use std::fmt;

use crate::foundation::core::CanvasDimensions;
use crate::foundation::error::{FxError, FxResult};

/// A named canvas size from the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionProfile {
    key: &'static str,
    width: u32,
    height: u32,
    display_name: &'static str,
}

impl ResolutionProfile {
    const fn new(key: &'static str, width: u32, height: u32, display_name: &'static str) -> Self {
        Self {
            key,
            width,
            height,
            display_name,
        }
    }

    /// Unique catalog key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Stored height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// `true` when the stored size is taller than wide.
    pub fn is_naturally_portrait(&self) -> bool {
        self.height > self.width
    }

    /// Canvas size for the requested orientation.
    ///
    /// Horizontal requests always come out landscape (`width >= height`), vertical ones
    /// portrait, whichever way the profile is stored.
    pub fn dimensions(&self, is_horizontal: bool) -> CanvasDimensions {
        let stored = CanvasDimensions::new(self.width, self.height);
        if self.is_naturally_portrait() == is_horizontal {
            stored.swapped()
        } else {
            stored
        }
    }
}

impl fmt::Display for ResolutionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}×{})", self.display_name, self.width, self.height)
    }
}

const CATALOG: &[ResolutionProfile] = &[
    ResolutionProfile::new("qvga", 320, 240, "QVGA"),
    ResolutionProfile::new("vga", 640, 480, "VGA 480p"),
    ResolutionProfile::new("svga", 800, 600, "SVGA"),
    ResolutionProfile::new("xga", 1024, 768, "XGA"),
    ResolutionProfile::new("hd", 1280, 720, "HD 720p"),
    ResolutionProfile::new("wxga", 1280, 800, "WXGA"),
    ResolutionProfile::new("sxga", 1280, 1024, "SXGA"),
    ResolutionProfile::new("hd-plus", 1600, 900, "HD+"),
    ResolutionProfile::new("fhd", 1920, 1080, "Full HD 1080p"),
    ResolutionProfile::new("wuxga", 1920, 1200, "WUXGA"),
    ResolutionProfile::new("qhd", 2560, 1440, "QHD 1440p"),
    ResolutionProfile::new("wqxga", 2560, 1600, "WQXGA"),
    ResolutionProfile::new("uhd", 3840, 2160, "4K UHD"),
    ResolutionProfile::new("dci-4k", 4096, 2160, "DCI 4K"),
    ResolutionProfile::new("5k", 5120, 2880, "5K"),
    ResolutionProfile::new("8k", 7680, 4320, "8K UHD"),
    ResolutionProfile::new("square", 1080, 1080, "Square 1080"),
    ResolutionProfile::new("square-2k", 2048, 2048, "Square 2048"),
    ResolutionProfile::new("portrait-4x5", 1080, 1350, "Portrait 4:5"),
    ResolutionProfile::new("story", 1080, 1920, "Vertical Story 9:16"),
    ResolutionProfile::new("story-4k", 2160, 3840, "Vertical 4K 9:16"),
];

/// Every profile, in catalog order.
pub fn profiles() -> &'static [ResolutionProfile] {
    CATALOG
}

/// Look up a profile by exact key.
pub fn profile(key: &str) -> Option<&'static ResolutionProfile> {
    CATALOG.iter().find(|p| p.key == key)
}

/// Canvas size of catalog entry `key` for the requested orientation.
///
/// Unknown keys are an error; no default size is substituted.
pub fn get_dimensions(key: &str, is_horizontal: bool) -> FxResult<CanvasDimensions> {
    profile(key)
        .map(|p| p.dimensions(is_horizontal))
        .ok_or_else(|| FxError::unknown_resolution(key))
}

#[cfg(test)]
#[path = "../../tests/unit/resolution/catalog.rs"]
mod tests;
