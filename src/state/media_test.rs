use super::*;

// =============================================================
// Media kind resolution
// =============================================================

#[test]
fn file_video_plays_inline() {
    let media = resolve(
        Some("/assets/media/deadlift.jpg"),
        Some("/assets/media/deadlift.mp4"),
        None,
        None,
    )
    .unwrap();
    assert_eq!(
        media.kind,
        MediaKind::InlineVideo("/assets/media/deadlift.mp4".to_string())
    );
}

#[test]
fn webm_and_mov_count_as_file_videos() {
    assert!(is_video_file("clip.webm"));
    assert!(is_video_file("clip.mov"));
    assert!(!is_video_file("https://www.youtube.com/embed/dQw4w9WgXcQ"));
}

#[test]
fn non_file_video_is_embedded() {
    let media = resolve(
        None,
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ"),
        None,
        None,
    )
    .unwrap();
    assert_eq!(
        media.kind,
        MediaKind::EmbeddedVideo("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
    );
}

#[test]
fn video_wins_over_image() {
    let media = resolve(
        Some("poster.jpg"),
        Some("https://youtu.be/dQw4w9WgXcQ"),
        None,
        None,
    )
    .unwrap();
    assert!(matches!(media.kind, MediaKind::EmbeddedVideo(_)));
}

#[test]
fn image_is_the_fallback() {
    let media = resolve(Some("squat.jpg"), None, None, None).unwrap();
    assert_eq!(media.kind, MediaKind::Image("squat.jpg".to_string()));
}

#[test]
fn nothing_enlargeable_resolves_to_none() {
    assert!(resolve(None, None, Some("orphan caption"), None).is_none());
}

// =============================================================
// Caption fallback
// =============================================================

#[test]
fn explicit_caption_wins() {
    let media = resolve(Some("a.jpg"), None, Some("Leg day"), Some("alt text")).unwrap();
    assert_eq!(media.caption, "Leg day");
}

#[test]
fn alt_text_fills_in_for_a_missing_caption() {
    let media = resolve(Some("a.jpg"), None, None, Some("alt text")).unwrap();
    assert_eq!(media.caption, "alt text");
}

#[test]
fn caption_defaults_to_empty() {
    let media = resolve(Some("a.jpg"), None, None, None).unwrap();
    assert_eq!(media.caption, "");
}

// =============================================================
// LightboxState
// =============================================================

#[test]
fn starts_closed() {
    assert!(LightboxState::default().current().is_none());
}

#[test]
fn open_holds_the_media() {
    let media = resolve(Some("a.jpg"), None, None, None).unwrap();
    let state = LightboxState::default().open(media.clone());
    assert_eq!(state.current(), Some(&media));
}

#[test]
fn opening_while_open_replaces_the_overlay() {
    let first = resolve(Some("a.jpg"), None, None, None).unwrap();
    let second = resolve(Some("b.jpg"), None, None, None).unwrap();
    let state = LightboxState::default().open(first).open(second.clone());
    assert_eq!(state.current(), Some(&second));
}

#[test]
fn close_empties_the_slot() {
    let media = resolve(Some("a.jpg"), None, None, None).unwrap();
    let state = LightboxState::default().open(media).close();
    assert!(state.current().is_none());
}
