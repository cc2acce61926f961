//! Property-name vocabulary and merge schema.
//!
//! Every property the matcher can emit is named here, together with the
//! merge strategy the engine applies to it: numeric reconciliation, string
//! reconciliation, or append-accumulation into a list.

/// Extracted title of the show or movie.
pub const TITLE: &str = "title";
/// Release group name (e.g. "SubsPlease").
pub const GROUP: &str = "group";
/// Season number.
pub const SEASON: &str = "season";
/// Episode number.
pub const EPISODE: &str = "episode";
/// Release year.
pub const YEAR: &str = "year";
/// Full release date, when the name carries one.
pub const DATE: &str = "date";
/// Video resolution label (e.g. "1080p").
pub const RESOLUTION: &str = "resolution";
/// Video codec label (e.g. "HEVC").
pub const VIDEO_CODEC: &str = "video_codec";
/// Audio codec label (e.g. "FLAC").
pub const AUDIO_CODEC: &str = "audio_codec";
/// Media source label (e.g. "Blu-ray").
pub const SOURCE: &str = "source";
/// CRC32 checksum (hex string).
pub const CRC32: &str = "crc32";
/// Container extension, without the leading dot.
pub const CONTAINER: &str = "container";
/// Release version (v2 = 2).
pub const VERSION: &str = "version";
/// Audio language.
pub const LANGUAGE: &str = "language";
/// Subtitle language.
pub const SUBTITLE_LANGUAGE: &str = "subtitle_language";

/// Properties reconciled with the numeric (equality-based) strategy when
/// guessed more than once.
pub const NUMERIC_PROPS: &[&str] = &[SEASON, EPISODE, YEAR, DATE, VERSION];

/// Properties reconciled with the string strategy when guessed more than once.
pub const TEXT_PROPS: &[&str] = &[
    TITLE,
    GROUP,
    RESOLUTION,
    VIDEO_CODEC,
    AUDIO_CODEC,
    SOURCE,
    CONTAINER,
    CRC32,
];

/// Properties whose repeated observations accumulate into a list
/// instead of being reconciled to a single value.
pub const APPEND_PROPS: &[&str] = &[LANGUAGE, SUBTITLE_LANGUAGE];

/// Returns `true` if the property accumulates into a list.
#[must_use]
pub fn is_append(prop: &str) -> bool {
    APPEND_PROPS.contains(&prop)
}
