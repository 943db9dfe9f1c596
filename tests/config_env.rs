// tests/config_env.rs
//
// Environment overrides for NumericsConfig.
// Tests in this file mutate process env vars, so they serialise on ENV_LOCK.

use wil_numerics::config::{NumericsConfig, DEFAULT_PAR_THRESHOLD};

use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn clear_env() {
    std::env::remove_var("WIL_PAR_THRESHOLD");
    std::env::remove_var("WIL_FORCE_SERIAL");
}

#[test]
fn defaults_without_env() {
    let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    clear_env();

    let cfg = NumericsConfig::from_env();
    assert_eq!(cfg, NumericsConfig::default());
    assert_eq!(cfg.par_threshold, DEFAULT_PAR_THRESHOLD);
    assert!(!cfg.force_serial);
}

#[test]
fn env_overrides_threshold_and_serial_flag() {
    let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    clear_env();

    std::env::set_var("WIL_PAR_THRESHOLD", " 128 ");
    std::env::set_var("WIL_FORCE_SERIAL", "On");
    let cfg = NumericsConfig::from_env();
    assert_eq!(cfg.par_threshold, 128);
    assert!(cfg.force_serial);
    assert!(!cfg.use_parallel(1 << 20));

    clear_env();
}

#[test]
fn unparsable_threshold_falls_back_to_default() {
    let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
    clear_env();

    std::env::set_var("WIL_PAR_THRESHOLD", "lots");
    std::env::set_var("WIL_FORCE_SERIAL", "0");
    let cfg = NumericsConfig::from_env();
    assert_eq!(cfg.par_threshold, DEFAULT_PAR_THRESHOLD);
    assert!(!cfg.force_serial);

    clear_env();
}
