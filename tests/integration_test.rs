use next_properties::{Decoder, Encoder, Properties, parse};
use proptest::prelude::*;
use std::fs;
use tempfile::tempdir;

#[derive(Debug, Default, Clone, PartialEq, Properties)]
struct AppPreferences {
    #[properties(key = "theme")]
    theme: String,
    #[properties(key = "max_items")]
    max_items: i64,
    #[properties(key = "offset")]
    offset: i32,
    window_title: String,
}

#[derive(Debug, Default, PartialEq, Properties)]
struct Generic<T: next_properties::PropertyValue> {
    #[properties(key = "inner")]
    inner: T,
}

#[test]
fn test_save_and_load_preferences() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppPreferences {
        theme: "dark".into(),
        max_items: 50,
        offset: -3,
        window_title: "not persisted".into(),
    };

    let config_dir_path = tempdir()?;
    let path = config_dir_path.path().join("app_preferences.properties");

    Encoder::new(fs::File::create(&path)?).encode(&config)?;

    let mut loaded = AppPreferences::default();
    Decoder::new(fs::File::open(&path)?).decode(&mut loaded)?;

    assert_eq!(config.theme, loaded.theme);
    assert_eq!(config.max_items, loaded.max_items);
    assert_eq!(config.offset, loaded.offset);
    assert_eq!(loaded.window_title, "");

    Ok(())
}

#[test]
fn test_generic_records_use_the_trait_directly() -> Result<(), Box<dyn std::error::Error>> {
    let record: Generic<u64> = next_properties::from_str("inner=18446744073709551615")?;
    assert_eq!(record.inner, u64::MAX);

    let text = next_properties::to_string(&Generic {
        inner: "text".to_string(),
    })?;
    assert_eq!(text, "inner=text");

    Ok(())
}

fn text_value() -> impl Strategy<Value = String> {
    // Values may hold anything but a line break.
    "[^\n]*"
}

fn declaration() -> impl Strategy<Value = (String, String)> {
    ("[a-z][a-z0-9._-]{0,8}", "[^\n]{0,12}")
}

fn filler() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "#[^\n]{0,16}"]
}

proptest! {
    #[test]
    fn round_trip_preserves_tagged_fields(
        theme in text_value(),
        max_items in any::<i64>(),
        offset in any::<i32>(),
    ) {
        let original = AppPreferences {
            theme,
            max_items,
            offset,
            window_title: String::new(),
        };

        let text = next_properties::to_string(&original).unwrap();
        let decoded: AppPreferences = next_properties::from_str(&text).unwrap();

        prop_assert_eq!(decoded, original);
    }

    #[test]
    fn comments_and_blank_lines_do_not_change_the_mapping(
        declarations in prop::collection::vec(declaration(), 0..8),
        fillers in prop::collection::vec(filler(), 0..16),
    ) {
        let plain = declarations
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n");

        let mut lines = Vec::new();
        let mut fillers = fillers.into_iter();
        for (key, value) in &declarations {
            if let Some(extra) = fillers.next() {
                lines.push(extra);
            }
            lines.push(format!("{key}={value}"));
        }
        lines.extend(fillers);
        let noisy = lines.join("\n");

        prop_assert_eq!(parse(&noisy).unwrap(), parse(&plain).unwrap());
    }

    #[test]
    fn later_declaration_wins(
        (key, first) in declaration(),
        second in "[^\n]{0,12}",
    ) {
        let values = parse(&format!("{key}={first}\n{key}={second}")).unwrap();

        prop_assert_eq!(values.len(), 1);
        prop_assert_eq!(&values[&key], &second);
    }
}
