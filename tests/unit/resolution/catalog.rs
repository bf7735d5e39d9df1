use super::*;
use std::collections::HashSet;

#[test]
fn keys_are_unique() {
    let keys: HashSet<_> = profiles().iter().map(|p| p.key()).collect();
    assert_eq!(keys.len(), profiles().len());
}

#[test]
fn orientations_are_exact_swaps_for_every_profile() {
    for p in profiles() {
        let h = get_dimensions(p.key(), true).unwrap();
        let v = get_dimensions(p.key(), false).unwrap();
        assert_eq!(h, v.swapped(), "profile {}", p.key());
        assert!(h.width() >= h.height(), "profile {}", p.key());
        assert!(v.height() >= v.width(), "profile {}", p.key());
    }
}

#[test]
fn portrait_profile_is_stored_unswapped_when_vertical() {
    let story = profile("story").unwrap();
    assert!(story.is_naturally_portrait());
    let v = get_dimensions("story", false).unwrap();
    assert_eq!((v.width(), v.height()), (1080, 1920));
    let h = get_dimensions("story", true).unwrap();
    assert_eq!((h.width(), h.height()), (1920, 1080));
}

#[test]
fn landscape_profile_mirrors() {
    let h = get_dimensions("fhd", true).unwrap();
    assert_eq!((h.width(), h.height()), (1920, 1080));
    let v = get_dimensions("fhd", false).unwrap();
    assert_eq!((v.width(), v.height()), (1080, 1920));
}

#[test]
fn unknown_key_fails_explicitly() {
    let err = get_dimensions("1080p-ish", true).unwrap_err();
    assert!(matches!(err, FxError::UnknownResolution { ref key } if key == "1080p-ish"));
}

#[test]
fn display_includes_stored_size() {
    assert_eq!(profile("hd").unwrap().to_string(), "HD 720p (1280×720)");
}
