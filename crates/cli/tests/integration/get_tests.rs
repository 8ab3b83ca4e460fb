use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn get_without_reservation_succeeds() {
  let env = TestEnv::empty();

  env
    .podmac_cmd()
    .args(["get", "default", "web"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No MAC reserved for default/web"));
}

#[test]
fn get_prints_normalized_mac() {
  let env = TestEnv::empty();
  env.touch("mac_0A-58-0A-F4-00-07_default_web");

  env
    .podmac_cmd()
    .args(["get", "default", "web"])
    .assert()
    .success()
    .stdout(predicate::str::contains("0a:58:0a:f4:00:07"));
}

#[test]
fn get_json_output_is_valid() {
  let env = TestEnv::empty();
  env.touch("mac_0a:58:0a:f4:00:07_default_web");

  let output = env
    .podmac_cmd()
    .args(["-o", "json", "get", "default", "web"])
    .output()
    .unwrap();

  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["found"], true);
  assert_eq!(json["mac"], "0a:58:0a:f4:00:07");
}

#[test]
fn get_with_corrupt_record_fails() {
  let env = TestEnv::empty();
  env.touch("mac_garbage_default_web");

  env
    .podmac_cmd()
    .args(["get", "default", "web"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid MAC address"));
}
