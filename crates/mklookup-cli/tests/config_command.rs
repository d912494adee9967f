mod common;

use common::mklookup;
use mklookup_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn config_init_writes_defaults() {
    let world = TestWorld::new();

    mklookup(&world)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("base_url = \"http://127.0.0.1:8000\""));
    assert!(written.contains("confirm_generate = true"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let world = TestWorld::new();
    world.write_config("[ui]\nmouse = false\n").unwrap();

    mklookup(&world)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    mklookup(&world)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let written = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(written.contains("mouse = true"));
}

#[test]
fn config_show_reflects_overrides() {
    let world = TestWorld::new().with_base_url("https://crm.example.com");
    world.write_config("[server]\ntimeout_secs = 7\n").unwrap();

    mklookup(&world)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_url = \"https://crm.example.com\""))
        .stdout(predicate::str::contains("timeout_secs = 7"));
}

#[test]
fn config_show_json() {
    let world = TestWorld::new();

    let output = mklookup(&world)
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["server"]["timeout_secs"], 30);
    assert_eq!(value["ui"]["mouse"], true);
}

#[test]
fn invalid_config_is_an_error() {
    let world = TestWorld::new();
    world.write_config("[server]\ntimeout_secs = 0\n").unwrap();

    mklookup(&world)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}

#[test]
fn no_command_without_terminal_is_an_error() {
    let world = TestWorld::new();

    mklookup(&world)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mklookup --help"));
}
