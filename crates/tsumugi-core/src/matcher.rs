use chrono::NaiveDate;
use regex::Regex;

use crate::error::{Result, TsumugiError};
use crate::guess::{Guess, LanguageResolver, Value};
use crate::props;

// Initial confidences applied by the matcher. Technical tokens are
// unambiguous; numbering markers and group tags slightly less so; the title
// is whatever text is left over, hence the weakest.
const CONF_TECH: f32 = 1.0;
const CONF_NUMBERING: f32 = 0.9;
const CONF_EPISODE: f32 = 0.8;
const CONF_GROUP: f32 = 0.9;
const CONF_TITLE: f32 = 0.6;

// Language-word confidence depends on how specific the spelling is:
// 2-letter codes are short but deliberate, 3-letter codes more so, while
// full names collide with ordinary words far too often.
const CONF_LANG_ALPHA2: f32 = 0.8;
const CONF_LANG_ALPHA3: f32 = 0.9;
const CONF_LANG_NAME: f32 = 0.3;

/// Tokens that mark the following (or embedded) language word as a
/// subtitle language rather than an audio language.
const SUBTITLE_MARKERS: &[&str] = &["sub", "subs", "subbed", "st"];

const DELIMITERS: &[char] = &['[', ']', '(', ')', '{', '}', ' ', '.', '_', '-', '+'];

/// Pattern matcher producing the raw guess list for a release name.
///
/// Every recognized token occurrence becomes its own single-property
/// [`Guess`] (the `SxxEyy` form carries two), each with an initial
/// confidence. Repeated or contradictory occurrences are deliberately NOT
/// resolved here; reconciling them is the merge engine's job.
pub struct Matcher {
    re_resolution: Regex,
    re_vcodec: Regex,
    re_acodec: Regex,
    re_source: Regex,
    re_crc32: Regex,
    re_season_episode: Regex,
    re_episode_range: Regex,
    re_episode_version: Regex,
    re_episode: Regex,
    re_season: Regex,
    re_version: Regex,
    re_year: Regex,
    re_date: Regex,
    re_container: Regex,
    re_group: Regex,
    re_brackets: Regex,
    resolver: Option<Box<dyn LanguageResolver>>,
}

impl Matcher {
    /// Constructs a new `Matcher` with pre-compiled patterns and no
    /// language resolver.
    ///
    /// # Errors
    ///
    /// Returns `TsumugiError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_resolution: Regex::new(r"(?i)\b(2160|1080|720|480)[pi]\b")?,
            re_vcodec: Regex::new(
                r"(?i)\b(x\.?264|x\.?265|h\.?264|h\.?265|hevc|av1|vp9|mpeg4|xvid)\b",
            )?,
            re_acodec: Regex::new(
                r"(?i)\b(flac|aac|opus|ac3|dts(?:-?hd)?|truehd|mp3|vorbis|ogg)\b",
            )?,
            re_source: Regex::new(
                r"(?i)\b(blu-?ray\s*remux|bdremux|bd-?remux|blu-?ray|web-?dl|webrip|web-?rip|hdtv|dvd(?:rip)?|vhs)\b",
            )?,
            re_crc32: Regex::new(r"\[([0-9A-Fa-f]{8})\]")?,
            re_season_episode: Regex::new(r"(?i)\bS(\d{1,2})[\s\._-]?E(\d{1,4})\b")?,
            re_episode_range: Regex::new(
                r"(?i)(?:[\s\-_\.]|(?:^|[\s\-_\.\[\(])ep?\.?\s*)(\d{1,4})\s*[-~]\s*(\d{1,4})\b",
            )?,
            re_episode_version: Regex::new(
                r"(?i)(?:[\s\-_\.]|(?:^|[\s\-_\.\[\(])ep?\.?\s*)(\d{1,4})v(\d)\b",
            )?,
            re_episode: Regex::new(
                r"(?i)(?:[\s\-_\.]|(?:^|[\s\-_\.\[\(])(?:ep?\.?|episode)\s*)(\d{1,4})(?:\b|[^0-9v\-~])",
            )?,
            re_season: Regex::new(r"(?i)(?:\bS|season\s*)(\d{1,2})\b")?,
            re_version: Regex::new(r"(?i)\[v(\d)\]|\bv(\d)\b")?,
            re_year: Regex::new(r"\b((?:19|20)\d{2})\b")?,
            re_date: Regex::new(r"\b(\d{4})[\._-](\d{2})[\._-](\d{2})\b")?,
            re_container: Regex::new(r"\.(\w{2,4})$")?,
            re_group: Regex::new(r"^\[([^\]]+)\]")?,
            re_brackets: Regex::new(r"\[[^\]]*\]|\([^\)]*\)")?,
            resolver: None,
        })
    }

    /// Attaches a language resolver; without one, no language guesses are
    /// produced.
    #[must_use]
    pub fn with_language_resolver(mut self, resolver: Box<dyn LanguageResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Scans the given filename/release name and emits the raw guess list.
    ///
    /// # Errors
    ///
    /// Returns `TsumugiError::EmptyInput` if the input is empty or
    /// whitespace-only.
    pub fn guesses(&self, input: &str) -> Result<Vec<Guess>> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TsumugiError::EmptyInput);
        }

        let mut guesses = Vec::new();

        let group = self.match_group(trimmed, &mut guesses);
        let container = self.match_container(trimmed, &mut guesses);
        self.match_crc32(trimmed, &mut guesses);
        self.match_resolution(trimmed, &mut guesses);
        self.match_video_codec(trimmed, &mut guesses);
        self.match_audio_codec(trimmed, &mut guesses);
        self.match_source(trimmed, &mut guesses);
        self.match_date(trimmed, &mut guesses);
        self.match_year(trimmed, &mut guesses);
        let episode_found = self.match_numbering(trimmed, &mut guesses);
        self.match_version(trimmed, episode_found, &mut guesses);
        self.match_languages(trimmed, &mut guesses);

        if let Some(title) = self.extract_title(trimmed, group, container.as_deref()) {
            guesses.push(Guess::single(props::TITLE, title, CONF_TITLE));
        }

        Ok(guesses)
    }

    fn match_group(&self, input: &str, guesses: &mut Vec<Guess>) -> bool {
        match self.re_group.captures(input) {
            Some(caps) => {
                guesses.push(Guess::single(
                    props::GROUP,
                    caps[1].trim(),
                    CONF_GROUP,
                ));
                true
            }
            None => false,
        }
    }

    fn match_container(&self, input: &str, guesses: &mut Vec<Guess>) -> Option<String> {
        let ext = self
            .re_container
            .captures(input)
            .map(|c| c[1].to_lowercase())?;
        guesses.push(Guess::single(props::CONTAINER, ext.as_str(), CONF_TECH));
        Some(ext)
    }

    fn match_crc32(&self, input: &str, guesses: &mut Vec<Guess>) {
        if let Some(caps) = self.re_crc32.captures(input) {
            guesses.push(Guess::single(
                props::CRC32,
                caps[1].to_uppercase(),
                CONF_TECH,
            ));
        }
    }

    fn match_resolution(&self, input: &str, guesses: &mut Vec<Guess>) {
        for caps in self.re_resolution.captures_iter(input) {
            let label = format!("{}p", &caps[1]);
            guesses.push(Guess::single(props::RESOLUTION, label, CONF_TECH));
        }
    }

    fn match_video_codec(&self, input: &str, guesses: &mut Vec<Guess>) {
        for caps in self.re_vcodec.captures_iter(input) {
            let codec = caps[1].to_lowercase().replace('.', "");
            let label = match codec.as_str() {
                "x264" | "h264" => "H.264",
                "x265" | "h265" | "hevc" => "HEVC",
                "av1" => "AV1",
                "vp9" => "VP9",
                "mpeg4" | "xvid" => "MPEG-4",
                _ => continue,
            };
            guesses.push(Guess::single(props::VIDEO_CODEC, label, CONF_TECH));
        }
    }

    fn match_audio_codec(&self, input: &str, guesses: &mut Vec<Guess>) {
        for caps in self.re_acodec.captures_iter(input) {
            let codec = caps[1].to_lowercase();
            let label = match codec.as_str() {
                "flac" => "FLAC",
                "aac" => "AAC",
                "opus" => "Opus",
                "ac3" => "AC3",
                s if s.starts_with("dts") => "DTS",
                "truehd" => "TrueHD",
                "mp3" => "MP3",
                "vorbis" | "ogg" => "Vorbis",
                _ => continue,
            };
            guesses.push(Guess::single(props::AUDIO_CODEC, label, CONF_TECH));
        }
    }

    fn match_source(&self, input: &str, guesses: &mut Vec<Guess>) {
        for caps in self.re_source.captures_iter(input) {
            let source = caps[1].to_lowercase().replace([' ', '-'], "");
            let label = match source.as_str() {
                s if s.contains("remux") => "Blu-ray Remux",
                s if s.contains("blu") || s == "bd" => "Blu-ray",
                "webdl" => "WEB-DL",
                "webrip" => "WEBRip",
                "hdtv" => "HDTV",
                s if s.starts_with("dvd") => "DVD",
                "vhs" => "VHS",
                _ => continue,
            };
            guesses.push(Guess::single(props::SOURCE, label, CONF_TECH));
        }
    }

    fn match_date(&self, input: &str, guesses: &mut Vec<Guess>) {
        if let Some(caps) = self.re_date.captures(input) {
            let parsed = (
                caps[1].parse::<i32>().ok(),
                caps[2].parse::<u32>().ok(),
                caps[3].parse::<u32>().ok(),
            );
            if let (Some(y), Some(m), Some(d)) = parsed {
                if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
                    guesses.push(Guess::single(props::DATE, date, CONF_NUMBERING));
                }
            }
        }
    }

    fn match_year(&self, input: &str, guesses: &mut Vec<Guess>) {
        for caps in self.re_year.captures_iter(input) {
            if let Ok(year) = caps[1].parse::<i64>() {
                if (1980..=2030).contains(&year) {
                    guesses.push(Guess::single(props::YEAR, year, CONF_NUMBERING));
                }
            }
        }
    }

    /// Matches season/episode numbering. Returns `true` if an episode was
    /// found (so version extraction does not double-count a `12v2` form).
    fn match_numbering(&self, input: &str, guesses: &mut Vec<Guess>) -> bool {
        // combined SxxEyy forms carry both properties in one guess
        for caps in self.re_season_episode.captures_iter(input) {
            let season = caps[1].parse::<i64>().ok();
            let episode = caps[2].parse::<i64>().ok();
            if let (Some(season), Some(episode)) = (season, episode) {
                guesses.push(Guess::from_pairs(
                    [(props::SEASON, season), (props::EPISODE, episode)],
                    CONF_NUMBERING,
                ));
            }
        }
        if self.re_season_episode.is_match(input) {
            return true;
        }

        for caps in self.re_season.captures_iter(input) {
            if let Ok(season) = caps[1].parse::<i64>() {
                guesses.push(Guess::single(props::SEASON, season, CONF_NUMBERING));
            }
        }

        // batch range: keep the first episode of the batch
        if let Some(caps) = self.re_episode_range.captures(input) {
            let start = caps[1].parse::<i64>().ok();
            let end = caps[2].parse::<i64>().ok();
            if let (Some(start), Some(end)) = (start, end) {
                if start < end {
                    guesses.push(Guess::single(props::EPISODE, start, CONF_EPISODE));
                    return true;
                }
            }
        }

        if let Some(caps) = self.re_episode_version.captures(input) {
            let episode = caps[1].parse::<i64>().ok();
            let version = caps[2].parse::<i64>().ok();
            if let (Some(episode), Some(version)) = (episode, version) {
                let mut guess = Guess::single(props::EPISODE, episode, CONF_EPISODE);
                guess.set(props::VERSION, version, Some(CONF_NUMBERING));
                guesses.push(guess);
                return true;
            }
        }

        if let Some(caps) = self.re_episode.captures(input) {
            if let Ok(episode) = caps[1].parse::<i64>() {
                guesses.push(Guess::single(props::EPISODE, episode, CONF_EPISODE));
                return true;
            }
        }

        false
    }

    fn match_version(&self, input: &str, episode_found: bool, guesses: &mut Vec<Guess>) {
        // a "12v2" form already carried the version with its episode
        if episode_found && self.re_episode_version.is_match(input) {
            return;
        }

        if let Some(caps) = self.re_version.captures(input) {
            let digit = caps.get(1).or_else(|| caps.get(2));
            if let Some(version) = digit.and_then(|m| m.as_str().parse::<i64>().ok()) {
                guesses.push(Guess::single(props::VERSION, version, CONF_NUMBERING));
            }
        }
    }

    fn match_languages(&self, input: &str, guesses: &mut Vec<Guess>) {
        let Some(resolver) = self.resolver.as_deref() else {
            return;
        };

        let mut prev: Option<String> = None;
        for token in input.split(DELIMITERS).filter(|t| !t.is_empty()) {
            let lower = token.to_lowercase();
            let subtitled = prev
                .as_deref()
                .is_some_and(|p| SUBTITLE_MARKERS.contains(&p));

            // VOSTFR-style tokens embed the language code after the marker
            let (candidate, prop) = if let Some(code) = lower.strip_prefix("vost") {
                if code.is_empty() {
                    prev = Some(lower);
                    continue;
                }
                (code.to_string(), props::SUBTITLE_LANGUAGE)
            } else if subtitled {
                (lower.clone(), props::SUBTITLE_LANGUAGE)
            } else {
                (lower.clone(), props::LANGUAGE)
            };

            if !candidate.chars().all(|c| c.is_ascii_alphabetic()) {
                prev = Some(lower);
                continue;
            }

            if let Some(tag) = resolver.resolve(&candidate) {
                let confidence = match candidate.len() {
                    2 => CONF_LANG_ALPHA2,
                    3 => CONF_LANG_ALPHA3,
                    _ => CONF_LANG_NAME,
                };
                guesses.push(Guess::single(prop, Value::Language(tag), confidence));
            }

            prev = Some(lower);
        }
    }

    /// Extracts the title: the text region between the group tag (if any)
    /// and the first recognized metadata token.
    fn extract_title(&self, input: &str, has_group: bool, container: Option<&str>) -> Option<String> {
        let mut work = input.to_string();

        if has_group {
            if let Some(end) = work.find(']') {
                work = work[end + 1..].to_string();
            }
        }

        if let Some(ext) = container {
            if let Some(pos) = work.rfind(&format!(".{ext}")) {
                work = work[..pos].to_string();
            }
        }

        let patterns_to_strip: [&Regex; 11] = [
            &self.re_resolution,
            &self.re_vcodec,
            &self.re_acodec,
            &self.re_source,
            &self.re_crc32,
            &self.re_date,
            &self.re_season_episode,
            &self.re_episode_range,
            &self.re_episode_version,
            &self.re_season,
            &self.re_version,
        ];
        for pattern in patterns_to_strip {
            work = pattern.replace_all(&work, "\x00").to_string();
        }
        work = self.re_episode.replace_all(&work, "\x00").to_string();

        // years usually sit in brackets next to the title; strip those forms
        for caps in self.re_year.captures_iter(input) {
            let year = &caps[1];
            work = work.replace(&format!("({year})"), "\x00");
            work = work.replace(&format!("[{year}]"), "\x00");
        }

        // whatever bracketed content remains is metadata noise
        work = self.re_brackets.replace_all(&work, " ").to_string();

        let title_region = work.split('\x00').next().unwrap_or("");

        let cleaned = title_region
            .replace(['.', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .trim_matches(|c: char| c == '-' || c == ' ')
            .to_string();

        if cleaned.is_empty() { None } else { Some(cleaned) }
    }
}
