//! Integration tests for configuration files on disk.

use beyondtime_core::{Config, ParticleField, RingGeometry, Theme};

#[test]
fn test_missing_file_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let cfg = Config::load_from(&path).unwrap();
    assert!(path.exists());
    assert_eq!(cfg.theme(), Theme::Dark);

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[ui]"));
    assert!(written.contains("[ring]"));
}

#[test]
fn test_saved_changes_are_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut cfg = Config::load_from(&path).unwrap();
    cfg.set("ui.dark_mode", "false").unwrap();
    cfg.set("ui.user_name", "Ada").unwrap();
    cfg.set("particles.seed", "7").unwrap();
    cfg.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.theme(), Theme::Light);
    assert_eq!(reloaded.ui.user_name, "Ada");
    assert_eq!(
        ParticleField::generate(reloaded.particles.seed, reloaded.particles.count),
        ParticleField::generate(7, 30)
    );
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui\ndark_mode = ").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ring]\nradius = 180.0\nthickness = 40.0\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    let geo = cfg.geometry().unwrap();
    assert_eq!(geo.radius, 180.0);
    assert_eq!(geo.inner_radius(), 140.0);
    assert_eq!(geo.center_x, RingGeometry::default().center_x);
    assert_eq!(cfg.particles.count, 30);
}
