use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn save_creates_record() {
  let env = TestEnv::empty();

  env
    .podmac_cmd()
    .args(["save", "0a:58:0a:f4:00:07", "default", "web"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Reserved 0a:58:0a:f4:00:07 for default/web"));

  assert_eq!(env.record_files(), vec!["mac_0a:58:0a:f4:00:07_default_web"]);
}

#[test]
fn save_reattaches_previous_owner() {
  let env = TestEnv::empty();
  env.touch("mac_0a:58:0a:f4:00:07_old_pod");

  env
    .podmac_cmd()
    .args(["save", "0a:58:0a:f4:00:07", "default", "web"])
    .assert()
    .success();

  assert_eq!(env.record_files(), vec!["mac_0a:58:0a:f4:00:07_default_web"]);
}

#[test]
fn save_existing_changes_nothing() {
  let env = TestEnv::empty();

  env
    .podmac_cmd()
    .args(["save", "--existing", "0a:58:0a:f4:00:07", "default", "web"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Nothing to record"));

  assert!(env.record_files().is_empty());
}

#[test]
fn save_rejects_underscore_names() {
  let env = TestEnv::empty();

  env
    .podmac_cmd()
    .args(["save", "0a:58:0a:f4:00:07", "default", "my_pod"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("contains the record delimiter"));

  assert!(env.record_files().is_empty());
}
