use std::fs;
use std::path::Path;

use serde_json::{Value as JsonValue, json};
use tooltip_client::{ClientConfig, run};
use tooltip_core::ResolutionStats;

fn write_json(path: &Path, value: JsonValue) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, serde_json::to_string(&value).expect("serialize fixture")).expect("write fixture");
}

fn read_json(path: &Path) -> JsonValue {
    serde_json::from_str(&fs::read_to_string(path).expect("read output")).expect("parse output")
}

fn data_dir(config_toml: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let root = dir.path();

    fs::write(root.join("tooltip.toml"), config_toml).expect("write config");
    write_json(
        &root.join("champion_meta.json"),
        json!({
            "Garen": {
                "id": "Garen",
                "spells": [{ "id": "GarenQ", "cooldown": [8] }]
            }
        }),
    );
    write_json(
        &root.join("bins/garen.bin.json"),
        json!({
            "Characters/Garen/Spells/GarenQAbility/GarenQ": {
                "mSpell": { "DataValues": [{ "mName": "BonusDamage", "mValues": [30, 60, 90] }] }
            }
        }),
    );
    write_json(
        &root.join("champion_text_en.json"),
        json!({
            "Garen": {
                "partype": "None",
                "spells": [{ "tooltip": "{{ bonusdamage }} every {{ cooldown }}s {{ nope }} [{{ abilityresourcename }}]" }]
            }
        }),
    );

    dir
}

fn expected_tooltip() -> &'static str {
    "30/60/90 every 8s {{ nope }} []"
}

#[test]
fn resolves_in_place_and_writes_report() {
    let dir = data_dir("locales = [\"en\"]\nbins_dir = \"bins\"\n");
    let report = dir.path().join("reports/unresolved.json");

    let config = ClientConfig {
        report_path: Some(report.clone()),
        ..ClientConfig::new(dir.path())
    };
    let stats = run(&config).expect("run should succeed");

    assert_eq!(stats.replaced, 2);
    assert_eq!(stats.skipped, 1);

    let text = read_json(&dir.path().join("champion_text_en.json"));
    assert_eq!(text["Garen"]["spells"][0]["tooltip"], expected_tooltip());

    let written: ResolutionStats =
        serde_json::from_str(&fs::read_to_string(&report).expect("read report")).expect("parse report");
    assert_eq!(written, stats);
    assert_eq!(written.errors[0].placeholder, "nope");
    assert_eq!(written.errors[0].ability, "GarenQ");
}

#[test]
fn dry_run_leaves_files_untouched() {
    let dir = data_dir("locales = [\"en\"]\nbins_dir = \"bins\"\n");
    let path = dir.path().join("champion_text_en.json");
    let before = fs::read_to_string(&path).expect("read input");

    let config = ClientConfig {
        dry_run: true,
        ..ClientConfig::new(dir.path())
    };
    let stats = run(&config).expect("run should succeed");

    assert_eq!(stats.replaced, 2);
    assert_eq!(fs::read_to_string(&path).expect("read input"), before);
}

#[test]
fn output_dir_keeps_inputs() {
    let dir = data_dir("locales = [\"en\"]\nbins_dir = \"bins\"\noutput_dir = \"resolved\"\n");
    let input = dir.path().join("champion_text_en.json");
    let before = fs::read_to_string(&input).expect("read input");

    run(&ClientConfig::new(dir.path())).expect("run should succeed");

    assert_eq!(fs::read_to_string(&input).expect("read input"), before);
    let output = read_json(&dir.path().join("resolved/champion_text_en.json"));
    assert_eq!(output["Garen"]["spells"][0]["tooltip"], expected_tooltip());
}

#[test]
fn missing_locale_file_fails_the_run() {
    let dir = data_dir("bins_dir = \"bins\"\n");
    let en = dir.path().join("champion_text_en.json");
    let before = fs::read_to_string(&en).expect("read input");

    let err = run(&ClientConfig::new(dir.path())).expect_err("ru text is missing");
    assert!(err.to_string().contains("champion_text_ru.json"));

    // en comes before the missing ru locale and must stay unwritten
    assert_eq!(fs::read_to_string(&en).expect("read input"), before);
}

#[test]
fn locale_override_replaces_configured_locales() {
    let dir = data_dir("bins_dir = \"bins\"\n");
    let config = ClientConfig {
        locales: Some(vec!["en".to_string()]),
        dry_run: true,
        ..ClientConfig::new(dir.path())
    };
    assert!(run(&config).is_ok());
}
