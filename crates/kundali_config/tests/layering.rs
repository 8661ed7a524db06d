use std::path::Path;

use figment::Jail;
use kundali_base::{AyanamshaSystem, BhavaSystem};
use kundali_chart::DegeneratePolicy;
use kundali_config::{ConfigError, DegenerateMode, KundaliConfig};

#[test]
fn defaults_without_files() {
    Jail::expect_with(|_jail| {
        let config = KundaliConfig::load().expect("config loads");
        assert_eq!(config, KundaliConfig::default());
        Ok(())
    });
}

#[test]
fn project_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".kundali")?;
        jail.create_file(
            ".kundali/config.toml",
            r#"
            [chart]
            ayanamsa = "Raman"
            house_system = "Placidus"
            degenerate_policy = "fail"

            [layout]
            size = 600.0
            "#,
        )?;
        let config = KundaliConfig::load().expect("config loads");
        assert_eq!(config.chart.ayanamsa, AyanamshaSystem::Raman);
        assert_eq!(config.chart.house_system, BhavaSystem::Placidus);
        assert_eq!(config.chart.degenerate_policy, DegenerateMode::Fail);
        assert_eq!(config.chart.settings().degenerate_policy, DegeneratePolicy::Fail);
        assert_eq!(config.layout.size, 600.0);
        assert_eq!(config.layout.font_size, 12.0);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".kundali")?;
        jail.create_file(".kundali/config.toml", "[dasha]\nmax_level = 2\n")?;
        jail.create_file("mine.toml", "[dasha]\nmax_level = 4\n")?;
        let config = KundaliConfig::load_from(Some(Path::new("mine.toml"))).expect("config loads");
        assert_eq!(config.dasha.max_level, 4);
        Ok(())
    });
}

#[test]
fn env_beats_files() {
    Jail::expect_with(|jail| {
        jail.create_file("mine.toml", "[chart]\nhouse_system = \"Equal\"\n")?;
        jail.set_env("KUNDALI_CHART__HOUSE_SYSTEM", "Sripati");
        jail.set_env("KUNDALI_STRENGTH__WEAK", "45");
        let config = KundaliConfig::load_from(Some(Path::new("mine.toml"))).expect("config loads");
        assert_eq!(config.chart.house_system, BhavaSystem::Sripati);
        assert_eq!(config.strength.weak, 45.0);
        Ok(())
    });
}

#[test]
fn invalid_values_are_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("KUNDALI_DASHA__MAX_LEVEL", "9");
        let err = KundaliConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "dasha.max_level"));
        Ok(())
    });
}

#[test]
fn band_order_is_checked() {
    Jail::expect_with(|jail| {
        jail.create_file("bands.toml", "[strength]\nstrong = 130.0\n")?;
        assert!(KundaliConfig::load_from(Some(Path::new("bands.toml"))).is_err());
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        assert!(KundaliConfig::load_from(Some(Path::new("nope.toml"))).is_err());
        Ok(())
    });
}

#[test]
fn orb_overrides_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("orbs.toml", "[aspects]\nouter = 3.0\n\n[aspects.orbs]\nMars = 6.0\n")?;
        let config = KundaliConfig::load_from(Some(Path::new("orbs.toml"))).expect("config loads");
        let settings = config.analysis_settings().expect("settings");
        assert_eq!(settings.orbs.outer, 3.0);
        assert_eq!(settings.orbs.classical[2], 6.0);
        Ok(())
    });
}
