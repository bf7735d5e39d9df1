//! Convenience lookups over the profile catalog.

use crate::foundation::core::CanvasDimensions;
use crate::foundation::error::{FxError, FxResult};
use crate::resolution::catalog::{ResolutionProfile, get_dimensions, profile, profiles};

/// Legacy and colloquial names for catalog keys.
const ALIASES: &[(&str, &str)] = &[
    ("240p", "qvga"),
    ("480p", "vga"),
    ("720p", "hd"),
    ("hd720", "hd"),
    ("900p", "hd-plus"),
    ("1080p", "fhd"),
    ("fullhd", "fhd"),
    ("full-hd", "fhd"),
    ("hd1080", "fhd"),
    ("1440p", "qhd"),
    ("2k", "qhd"),
    ("2160p", "uhd"),
    ("4k", "uhd"),
    ("uhd-4k", "uhd"),
    ("4320p", "8k"),
    ("instagram-square", "square"),
    ("instagram-portrait", "portrait-4x5"),
    ("vertical", "story"),
    ("tiktok", "story"),
    ("reels", "story"),
];

/// Profile whose size is nearest to `width`x`height`, ignoring orientation.
///
/// Distance is the sum of absolute differences of the long and short sides; ties go to the
/// earlier catalog entry.
pub fn closest_profile(width: u32, height: u32) -> &'static ResolutionProfile {
    let target = long_short(width, height);
    profiles()
        .iter()
        .min_by_key(|p| {
            let (long, short) = long_short(p.width(), p.height());
            long.abs_diff(target.0) + short.abs_diff(target.1)
        })
        .unwrap_or(&profiles()[0])
}

fn long_short(w: u32, h: u32) -> (u32, u32) {
    (w.max(h), w.min(h))
}

/// Label of a profile as shown for the requested orientation, e.g. `Full HD 1080p (1080×1920)`.
pub fn display_label(key: &str, is_horizontal: bool) -> FxResult<String> {
    let p = profile(key).ok_or_else(|| FxError::unknown_resolution(key))?;
    let d = p.dimensions(is_horizontal);
    Ok(format!("{} ({}×{})", p.display_name(), d.width(), d.height()))
}

/// Resolve a key, display name, legacy alias, `WIDTHxHEIGHT` string or bare legacy width to a
/// catalog profile.
///
/// Matching is case-insensitive; `_` and spaces are treated as `-`. A bare number such as
/// `"1280"` resolves to the first catalog entry whose long side has that length.
pub fn parse_alias(s: &str) -> Option<&'static ResolutionProfile> {
    let norm: String = s
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect();
    if norm.is_empty() {
        return None;
    }

    if let Some(p) = profile(&norm) {
        return Some(p);
    }
    if let Some(p) = profiles()
        .iter()
        .find(|p| p.display_name().eq_ignore_ascii_case(s.trim()))
    {
        return Some(p);
    }
    if let Some((_, key)) = ALIASES.iter().find(|(alias, _)| *alias == norm) {
        return profile(key);
    }
    if let Some((w, h)) = norm.split_once(['x', '×']) {
        let (w, h) = (w.parse::<u32>().ok()?, h.parse::<u32>().ok()?);
        let target = long_short(w, h);
        return profiles()
            .iter()
            .find(|p| long_short(p.width(), p.height()) == target);
    }
    if let Ok(width) = norm.parse::<u32>() {
        return profiles()
            .iter()
            .find(|p| p.width().max(p.height()) == width);
    }
    None
}

/// [`parse_alias`] followed by [`get_dimensions`]; unknown names fail explicitly.
pub fn resolve_dimensions(name: &str, is_horizontal: bool) -> FxResult<CanvasDimensions> {
    let p = parse_alias(name).ok_or_else(|| FxError::unknown_resolution(name))?;
    get_dimensions(p.key(), is_horizontal)
}

#[cfg(test)]
#[path = "../../tests/unit/resolution/lookup.rs"]
mod tests;
