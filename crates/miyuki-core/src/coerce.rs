//! Request coercion: raw submission + schema -> [`JobConfig`].
//!
//! Coercion is total. Missing, empty, or malformed input degrades to `false`
//! or absent; value contents are never validated here, that is left to the
//! downloader.

use tracing::debug;

use crate::job::{JobConfig, OptionValue, RawSubmission};
use crate::schema::{OptionKind, OptionSchema};

/// Build a [`JobConfig`] from a raw submission, one schema entry at a time.
pub fn coerce(schema: &OptionSchema, raw: &RawSubmission) -> JobConfig {
    let mut config = JobConfig::default();

    for spec in schema {
        let value = coerce_value(spec.kind, raw.get(spec.name));
        if !config.assign(spec.name, value) {
            // Unreachable for a validated schema
            debug!(
                target: "miyuki.coerce",
                option = spec.name,
                kind = %spec.kind,
                "Option has no matching job field, skipped"
            );
        }
    }

    config
}

/// Coerce a single raw value according to its declared kind.
///
/// `raw` is `None` when the key was not submitted at all.
pub fn coerce_value(kind: OptionKind, raw: Option<&str>) -> OptionValue {
    let present = raw.filter(|value| !value.is_empty());

    match kind {
        OptionKind::Flag => OptionValue::Flag(present.is_some()),
        OptionKind::Text => OptionValue::Text(present.map(str::to_owned)),
        OptionKind::TextList => {
            OptionValue::TextList(present.map(split_tokens).filter(|tokens| !tokens.is_empty()))
        }
    }
}

fn split_tokens(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> OptionSchema {
        OptionSchema::miyuki().unwrap()
    }

    #[test]
    fn test_flag_presence_is_true() {
        let schema = schema();
        for spec in schema.iter().filter(|s| s.kind == OptionKind::Flag) {
            let raw = RawSubmission::from_pairs([(spec.name, "on")]);
            let config = coerce(&schema, &raw);
            assert_eq!(
                config.values().into_iter().find(|(n, _)| *n == spec.name),
                Some((spec.name, OptionValue::Flag(true)))
            );
        }
    }

    #[test]
    fn test_flag_absence_and_empty_marker_are_false() {
        assert_eq!(coerce_value(OptionKind::Flag, None), OptionValue::Flag(false));
        assert_eq!(
            coerce_value(OptionKind::Flag, Some("")),
            OptionValue::Flag(false)
        );
        assert_eq!(
            coerce_value(OptionKind::Flag, Some("off")),
            OptionValue::Flag(true)
        );
    }

    #[test]
    fn test_text_empty_and_missing_are_absent() {
        assert_eq!(coerce_value(OptionKind::Text, None), OptionValue::Text(None));
        assert_eq!(
            coerce_value(OptionKind::Text, Some("")),
            OptionValue::Text(None)
        );
        assert_eq!(
            coerce_value(OptionKind::Text, Some("abc")),
            OptionValue::Text(Some("abc".to_string()))
        );
    }

    #[test]
    fn test_text_is_passed_verbatim() {
        assert_eq!(
            coerce_value(OptionKind::Text, Some("  spaced  out ")),
            OptionValue::Text(Some("  spaced  out ".to_string()))
        );
    }

    #[test]
    fn test_list_splits_on_whitespace_runs() {
        assert_eq!(
            coerce_value(OptionKind::TextList, Some("a b  c")),
            OptionValue::TextList(Some(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
        assert_eq!(
            coerce_value(OptionKind::TextList, Some("\tuser\n pass ")),
            OptionValue::TextList(Some(vec!["user".to_string(), "pass".to_string()]))
        );
    }

    #[test]
    fn test_list_missing_empty_or_blank_is_absent() {
        assert_eq!(
            coerce_value(OptionKind::TextList, None),
            OptionValue::TextList(None)
        );
        assert_eq!(
            coerce_value(OptionKind::TextList, Some("")),
            OptionValue::TextList(None)
        );
        assert_eq!(
            coerce_value(OptionKind::TextList, Some("   ")),
            OptionValue::TextList(None)
        );
    }

    #[test]
    fn test_only_ffmpeg_submitted() {
        let raw = RawSubmission::from_pairs([("ffmpeg", "on")]);
        let config = coerce(&schema(), &raw);

        assert_eq!(
            config,
            JobConfig {
                ffmpeg: true,
                ..JobConfig::default()
            }
        );
    }

    #[test]
    fn test_urls_are_split() {
        let raw = RawSubmission::from_pairs([("urls", "http://a http://b")]);
        let config = coerce(&schema(), &raw);

        assert_eq!(
            config.urls,
            Some(vec!["http://a".to_string(), "http://b".to_string()])
        );
        assert_eq!(config.set_options(), ["urls"]);
    }

    #[test]
    fn test_empty_submission_yields_defaults() {
        let config = coerce(&schema(), &RawSubmission::new());
        assert_eq!(config, JobConfig::default());
    }

    #[test]
    fn test_unknown_and_garbage_keys_ignored() {
        let raw = RawSubmission::from_pairs([
            ("bogus", "1"),
            ("", ""),
            ("limit", "not-a-number"),
            ("retry", "-5"),
        ]);
        let config = coerce(&schema(), &raw);

        assert_eq!(config.limit.as_deref(), Some("not-a-number"));
        assert_eq!(config.retry.as_deref(), Some("-5"));
        assert_eq!(config.set_options(), ["limit", "retry"]);
    }

    #[test]
    fn test_full_submission() {
        let raw = RawSubmission::from_pairs([
            ("urls", "https://example.com/v/1"),
            ("auth", "alice s3cret"),
            ("plist", "https://example.com/list"),
            ("proxy", "http://127.0.0.1:7890"),
            ("cover", "on"),
            ("noban", "on"),
            ("quality", "1080"),
            ("timeout", "30"),
        ]);
        let config = coerce(&schema(), &raw);

        assert_eq!(config.auth, Some(vec!["alice".to_string(), "s3cret".to_string()]));
        assert_eq!(config.plist.as_deref(), Some("https://example.com/list"));
        assert!(config.cover && config.noban);
        assert!(!config.ffmpeg && !config.ffcover && !config.title);
        assert_eq!(config.quality.as_deref(), Some("1080"));
        assert_eq!(config.delay, None);
    }

    #[test]
    fn test_coercion_is_idempotent() {
        let schema = schema();
        let raw = RawSubmission::from_pairs([("urls", "x  y"), ("title", "on"), ("file", "")]);

        let first = coerce(&schema, &raw);
        let second = coerce(&schema, &raw);
        assert_eq!(first, second);
    }
}
