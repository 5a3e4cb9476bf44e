//! Config precedence as seen from the binary

use simplecalc::errors::EXIT_CONFIG_ERROR;

use super::calc_cmd;

#[test]
fn test_local_config_file_is_picked_up() {
    let (mut cmd, dir) = calc_cmd();
    std::fs::write(
        dir.path().join("simplecalc.toml"),
        "[output]\nprecision = 2\n",
    )
    .unwrap();
    cmd.args(["-q", "div", "1", "3"])
        .assert()
        .success()
        .stdout("0.33\n");
}

#[test]
fn test_home_config_file_is_picked_up() {
    let (mut cmd, dir) = calc_cmd();
    let config_dir = dir.path().join(".config/simplecalc");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[output]\nformat = \"json\"\n").unwrap();
    let output = cmd.args(["add", "1", "2"]).output().unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["result"], 3.0);
}

#[test]
fn test_env_overrides_config_file() {
    let (mut cmd, dir) = calc_cmd();
    std::fs::write(
        dir.path().join("simplecalc.toml"),
        "[output]\nprecision = 2\n",
    )
    .unwrap();
    cmd.env("SIMPLECALC_PRECISION", "4")
        .args(["-q", "div", "1", "3"])
        .assert()
        .success()
        .stdout("0.3333\n");
}

#[test]
fn test_flag_overrides_env() {
    let (mut cmd, _dir) = calc_cmd();
    cmd.env("SIMPLECALC_PRECISION", "4")
        .args(["--precision", "1", "-q", "div", "1", "3"])
        .assert()
        .success()
        .stdout("0.3\n");
}

#[test]
fn test_explicit_missing_config_fails() {
    let (mut cmd, _dir) = calc_cmd();
    cmd.args(["-c", "nope.toml", "add", "1", "2"])
        .assert()
        .code(1);
}

#[test]
fn test_malformed_config_is_config_error() {
    let (mut cmd, dir) = calc_cmd();
    std::fs::write(dir.path().join("bad.toml"), "[output\n").unwrap();
    cmd.args(["-c", "bad.toml", "add", "1", "2"])
        .assert()
        .code(EXIT_CONFIG_ERROR as i32);
}

#[test]
fn test_precision_flag_overrides_out_of_range_env() {
    let (mut cmd, _dir) = calc_cmd();
    cmd.env("SIMPLECALC_PRECISION", "40")
        .args(["--precision", "2", "-q", "div", "1", "3"])
        .assert()
        .success()
        .stdout("0.33\n");
}

#[test]
fn test_precision_flag_overrides_out_of_range_file() {
    let (mut cmd, dir) = calc_cmd();
    std::fs::write(
        dir.path().join("simplecalc.toml"),
        "[output]\nprecision = 40\n",
    )
    .unwrap();
    cmd.args(["--precision", "2", "-q", "div", "1", "3"])
        .assert()
        .success()
        .stdout("0.33\n");
}

#[test]
fn test_out_of_range_file_precision_without_flag_fails() {
    let (mut cmd, dir) = calc_cmd();
    std::fs::write(
        dir.path().join("simplecalc.toml"),
        "[output]\nprecision = 40\n",
    )
    .unwrap();
    cmd.args(["-q", "div", "1", "3"])
        .assert()
        .code(EXIT_CONFIG_ERROR as i32)
        .stderr(predicates::str::contains("precision 40 exceeds maximum"));
}
