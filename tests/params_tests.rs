#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use party::game::error::PartyError;
use party::game::params::Params;
use std::fs;

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(format!("party_{}_{}", std::process::id(), name))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_default_constants() {
    let params = Params::default();

    assert_eq!(params.tick_rate, 60.0);
    assert_eq!(params.follow_distance, 12);
    assert_eq!(params.friction, 2.0);
    assert_eq!(params.leader_width, 23.0);
    assert_eq!(params.leader_height, 39.0);
    assert_eq!((params.start_x, params.start_y), (0.0, 50.0));

    let walk = params.gait(false);
    assert_eq!((walk.speed, walk.max_speed, walk.anim_speed), (2.0, 2.5, 2));
    let run = params.gait(true);
    assert_eq!((run.speed, run.max_speed, run.anim_speed), (3.0, 3.5, 3));

    let dims: Vec<(f32, f32)> = params.roster.iter().map(|m| (m.width, m.height)).collect();
    assert_eq!(dims, vec![(24.0, 75.0), (22.0, 43.0)]);

    assert!(params.validate().is_ok());
}

#[test]
fn test_history_len_grows_with_index() {
    let params = Params::default();

    assert_eq!(params.history_len(0), 12);
    assert_eq!(params.history_len(1), 24);
    assert_eq!(params.history_len(4), 60);
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut params = Params::default();
    params.follow_distance = 0;
    assert!(matches!(params.validate(), Err(PartyError::InvalidParams(_))));

    let mut params = Params::default();
    params.tick_rate = 0.0;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.friction = -1.0;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.roster[1].height = 0.0;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.anim_period = 0;
    assert!(params.validate().is_err());
}

#[test]
fn test_save_and_load() {
    let mut params = Params::default();
    params.follow_distance = 8;
    params.roster.truncate(1);

    let path = temp_path("params.json");
    params.save_to_file(&path).expect("Failed to save params");

    let loaded = Params::load_from_file(&path).expect("Failed to load params");
    assert_eq!(loaded, params);

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_rejects_invalid_file() {
    let path = temp_path("broken.json");
    fs::write(&path, "{ not json").expect("Failed to write file");

    assert!(matches!(
        Params::load_from_file(&path),
        Err(PartyError::Json(_))
    ));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_validates() {
    let mut params = Params::default();
    params.follow_distance = 0;

    let path = temp_path("invalid.json");
    params.save_to_file(&path).expect("Failed to save params");

    assert!(matches!(
        Params::load_from_file(&path),
        Err(PartyError::InvalidParams(_))
    ));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_load_missing_file() {
    let result = Params::load_from_file(&temp_path("does_not_exist.json"));
    assert!(matches!(result, Err(PartyError::Io(_))));
}

#[test]
fn test_validate_rejects_non_finite_speeds() {
    let mut params = Params::default();
    params.walk.max_speed = f32::NAN;
    assert!(matches!(params.validate(), Err(PartyError::InvalidParams(_))));

    let mut params = Params::default();
    params.run.max_speed = f32::INFINITY;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.walk.speed = f32::NAN;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.friction = f32::NAN;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.friction = f32::INFINITY;
    assert!(params.validate().is_err());
}

#[test]
fn test_validate_rejects_non_finite_dimensions() {
    let mut params = Params::default();
    params.tick_rate = f32::NAN;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.game_width = f32::INFINITY;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.roster[0].width = f32::NAN;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.start_y = f32::NEG_INFINITY;
    assert!(params.validate().is_err());
}

#[test]
fn test_load_rejects_nan_cap_written_as_null() {
    // serde_json writes NaN as null, which does not parse back into f32
    let mut params = Params::default();
    params.walk.max_speed = f32::NAN;

    let path = temp_path("nan_cap.json");
    params.save_to_file(&path).expect("Failed to save params");

    assert!(Params::load_from_file(&path).is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_validate_bounds_anim_speed() {
    let mut params = Params::default();
    params.run.anim_speed = params.anim_period;
    assert!(matches!(params.validate(), Err(PartyError::InvalidParams(_))));

    let mut params = Params::default();
    params.walk.anim_speed = u32::MAX;
    assert!(params.validate().is_err());

    let mut params = Params::default();
    params.walk.anim_speed = params.anim_period - 1;
    assert!(params.validate().is_ok());
}
