//! 설정 파일 로드/생성 테스트.
use std::fs;

use vessel_integrity_toolbox::config::{self, Config};
use vessel_integrity_toolbox::logging;
use vessel_integrity_toolbox::units::{LengthUnit, PressureUnit, StressUnit, TemperatureUnit};

#[test]
fn missing_config_is_created_with_defaults() {
    logging::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(config::load_from(&path).unwrap(), cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "language = \"en\"\n[default_units]\nstress = \"ksi\"\npressure = \"bar\"\nlength = \"mm\"\ntemperature = \"c\"\n",
    )
    .unwrap();
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.default_units.stress, StressUnit::Ksi);
    assert_eq!(cfg.default_units.pressure, PressureUnit::Bar);
    assert_eq!(cfg.default_units.length, LengthUnit::Millimeter);
    assert_eq!(cfg.default_units.temperature, TemperatureUnit::Celsius);
    assert_eq!(cfg.material_table, None);
}

#[test]
fn configured_material_table_replaces_builtin() {
    logging::init_test();
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("stress.toml");
    fs::write(
        &table,
        "[[points]]\nspec = \"SA-999\"\ngrade = \"X\"\ntemperature_f = 100.0\nallowable_stress_psi = 12000.0\n",
    )
    .unwrap();
    let cfg = Config {
        material_table: Some(table),
        ..Config::default()
    };
    let loaded = cfg.material_stress_table().unwrap();
    assert_eq!(loaded.materials(), vec!["SA-999-X".to_string()]);
    assert!(loaded.lookup_allowable_stress("SA-516-70", 100.0).is_err());
}

#[test]
fn broken_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").unwrap();
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
}
