// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::app::config::{self, Config};
use iced_vitrine::app::persisted_state::AppState;
use iced_vitrine::carousel::{Carousel, DragOutcome};
use iced_vitrine::diagnostics::DiagnosticLog;
use iced_vitrine::i18n::{resolve_startup_language, LanguageTable, Localizer, TRANSLATIONS_FILE};
use iced_vitrine::page::{self, manifest};
use tempfile::tempdir;

const MANIFEST: &str = r#"
[page]
default_title = "Showcase"

[[section]]
id = "hero"

[[section.element]]
id = "hero-heading"
text = "Welcome"
key = "hero_heading"

[section.carousel]
id = "hero-deck"

[[section.carousel.slide]]
image = "slides/one.png"
caption = "First"
caption_key = "slide_one"
alt_key = "slide_one_alt"

[[section.carousel.slide]]
image = "slides/two.png"
caption = "Second"
"#;

const TRANSLATIONS: &str = r#"{
    "en": {
        "_title": "Showcase",
        "hero_heading": "Welcome",
        "slide_one": "First",
        "slide_one_alt": "A first slide"
    },
    "fr": {
        "_title": "Vitrine",
        "hero_heading": "Bienvenue",
        "slide_one": "Première"
    }
}"#;

#[test]
fn test_language_change_rewrites_the_whole_page() {
    // 1. Stage translations in an override directory, as --i18n-dir would
    let dir = tempdir().expect("failed to create temporary directory");
    std::fs::write(dir.path().join(TRANSLATIONS_FILE), TRANSLATIONS)
        .expect("failed to write translations");

    let (table, warning) = LanguageTable::load_with_override(Some(dir.path()));
    assert!(warning.is_none(), "staged table should load: {warning:?}");

    let mut page = manifest::parse(MANIFEST).expect("manifest parses");
    let mut localizer = Localizer::new(table, "en");
    let mut log = DiagnosticLog::new();

    // 2. Switch to French and rewrite
    localizer.set_language("fr");
    page::apply(&mut page, &localizer, &mut log);

    assert_eq!(page.metadata.title, "Vitrine");
    assert_eq!(
        page.element("hero-heading").map(|e| e.text.as_str()),
        Some("Bienvenue")
    );
    assert_eq!(
        page.element("hero-deck-slide-1").map(|e| e.text.as_str()),
        Some("Première")
    );
    // "slide_one_alt" exists only in English; the fallback tier covers it.
    assert_eq!(
        page.element("hero-deck-slide-1")
            .and_then(|e| e.attribute("alt")),
        Some("A first slide")
    );
    assert!(log.is_empty(), "no diagnostics expected: all keys resolve");
}

#[test]
fn test_persisted_language_survives_a_restart() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    // 1. First session: the visitor picks French
    let mut state = AppState::default();
    state.language = Some("fr".to_string());
    assert!(state.save_to(Some(base.clone())).is_none());

    // 2. Second session: startup resolution prefers the stored language
    let (restored, warning) = AppState::load_from(Some(base));
    assert!(warning.is_none());

    let mut table = LanguageTable::default();
    table.insert("en", "_title", "Showcase");
    table.insert("fr", "_title", "Vitrine");

    let startup = resolve_startup_language(None, restored.language.as_deref(), false, "en", &table);
    assert_eq!(startup, "fr");
}

#[test]
fn test_cli_language_beats_the_stored_preference() {
    let mut table = LanguageTable::default();
    table.insert("en", "_title", "Showcase");
    table.insert("fr", "_title", "Vitrine");

    let startup = resolve_startup_language(Some("en"), Some("fr"), false, "en", &table);
    assert_eq!(startup, "en");
}

#[test]
fn test_config_round_trip_through_a_directory() {
    let dir = tempdir().expect("failed to create temporary directory");
    let base = dir.path().to_path_buf();

    let mut config = Config::default();
    config.general.default_language = "fr".to_string();
    config.carousel.autoplay = false;
    config.carousel.drag_commit_threshold = 64.0;

    config::save_with_override(&config, Some(base.clone())).expect("failed to save config");
    let (loaded, warning) = config::load_with_override(Some(base));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}

#[test]
fn test_configured_drag_threshold_drives_the_commit() {
    let (config, _) = config::load_with_override(None);
    let threshold = config.carousel.drag_commit_threshold;

    let mut carousel = Carousel::new(3).expect("three slides");

    // A drag exactly at the threshold snaps back
    carousel.begin_drag(300.0);
    carousel.update_drag(300.0 - threshold);
    assert_eq!(carousel.end_drag(threshold), Some(DragOutcome::Reverted));
    assert_eq!(carousel.active_index(), 0);

    // One pixel past it commits
    carousel.begin_drag(300.0);
    carousel.update_drag(300.0 - threshold - 1.0);
    assert_eq!(carousel.end_drag(threshold), Some(DragOutcome::Committed));
    assert_eq!(carousel.active_index(), 1);
}

#[test]
fn test_embedded_resources_form_a_consistent_kiosk() {
    // The embedded manifest, its slide images, and the embedded translations
    // have to agree with each other for the no-arguments launch to work.
    let (page, warning) = manifest::load(None).expect("embedded manifest loads");
    assert!(warning.is_none(), "embedded manifest should parse: {warning:?}");

    let (table, warning) = LanguageTable::load_with_override(None);
    assert!(warning.is_none(), "embedded table should parse: {warning:?}");

    let localizer = Localizer::new(table, "en");
    let mut checked = 0;
    for element in page.elements() {
        if let Some(key) = &element.translation_key {
            assert!(
                localizer.resolve(key).value.is_some(),
                "key {key} from the embedded manifest is missing from the embedded table"
            );
            checked += 1;
        }
    }
    assert!(
        checked > 0,
        "the embedded manifest should carry keyed elements"
    );
}
