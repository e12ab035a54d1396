use std::fs;
use std::path::Path;

use serde_json::json;
use tooltip_content::{ChampionCatalog, ContentFactory, TextLoader};
use tooltip_core::ResolutionStats;

fn write_json(path: &Path, value: serde_json::Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, serde_json::to_string(&value).expect("serialize fixture")).expect("write fixture");
}

/// Data directory with two champions; only Annie has a spell bundle.
fn data_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    write_json(
        &root.join("champion_meta.json"),
        json!({
            "Annie": {
                "id": "Annie",
                "spells": [{ "id": "AnnieQ", "cooldown": [4], "cost": [60, 65, 70] }],
                "stats": { "hp": 560 }
            },
            "Zed": { "id": "Zed", "spells": [{ "id": "ZedQ" }] }
        }),
    );
    write_json(
        &root.join("cdragon_cache/annie.bin.json"),
        json!({
            "Characters/Annie/Spells/AnnieQAbility/AnnieQ": {
                "mSpell": {
                    "DataValues": [{ "mName": "TotalDamage", "mValues": [80, 115, 150] }]
                }
            },
            "Characters/Annie/Spells/AnniePassiveAbility/AnniePassive": {
                "mSpell": { "DataValues": [{ "mName": "StunDuration", "mValues": [1.25, 1.5, 1.75] }] }
            }
        }),
    );
    write_json(
        &root.join("champion_text_en.json"),
        json!({
            "Annie": {
                "partype": "Mana",
                "spells": [{ "tooltip": "Deals {{ totaldamage }} damage for {{ cost }} {{ abilityresourcename }}." }],
                "passive": { "description": "Stuns for {{ stunduration }}s." }
            },
            "Zed": { "partype": "Energy", "spells": [{ "tooltip": "{{ e1 }}" }] }
        }),
    );
    write_json(
        &root.join("champion_text_ru.json"),
        json!({
            "Annie": {
                "spells": [{ "tooltip": "Наносит {{ totaldamage }} урона за {{ cost }} ед. ({{ abilityresourcename }})." }]
            }
        }),
    );

    dir
}

#[test]
fn builds_catalog_and_skips_missing_bundles() {
    let dir = data_dir();
    let factory = ContentFactory::open(dir.path()).expect("factory should open");
    let meta = factory.load_meta().expect("meta should load");
    let base = factory.load_text("en").expect("base text should load");

    let catalog = ChampionCatalog::build(&factory, &meta, &base);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("Annie").is_some());
    assert!(catalog.get("Zed").is_none());
}

#[test]
fn resolves_each_locale_and_writes_back() {
    let dir = data_dir();
    let factory = ContentFactory::open(dir.path()).expect("factory should open");
    let meta = factory.load_meta().expect("meta should load");
    let base = factory.load_text("en").expect("base text should load");
    let catalog = ChampionCatalog::build(&factory, &meta, &base);

    // ================================================================
    // English
    // ================================================================
    let mut en = base.clone();
    let mut stats = ResolutionStats::new();
    catalog.resolve_text("en", &mut en, &mut stats);

    assert_eq!(
        en["Annie"]["spells"][0]["tooltip"],
        "Deals 80/115/150 damage for 60/65/70 Mana."
    );
    assert_eq!(en["Annie"]["passive"]["description"], "Stuns for 1.25/1.5/1.75s.");
    // Zed has no resolver: untouched and not counted
    assert_eq!(en["Zed"]["spells"][0]["tooltip"], "{{ e1 }}");
    assert_eq!(stats.replaced, 3);
    assert_eq!(stats.skipped, 0);

    // ================================================================
    // Russian
    // ================================================================
    let mut ru = factory.load_text("ru").expect("ru text should load");
    catalog.resolve_text("ru", &mut ru, &mut stats);
    assert_eq!(
        ru["Annie"]["spells"][0]["tooltip"],
        "Наносит 80/115/150 урона за 60/65/70 ед. (Мана)."
    );
    assert_eq!(stats.replaced, 5);

    // ================================================================
    // Write back in place
    // ================================================================
    let path = factory.save_text("ru", &ru).expect("save should succeed");
    assert_eq!(path, dir.path().join("champion_text_ru.json"));

    let reloaded = TextLoader::load(&path).expect("reload should succeed");
    assert_eq!(reloaded, ru);
}
