//! Reservation behavior through the public store API.

use podmac_lib::StoreError;
use podmac_lib::consts::LOCK_FILENAME;

use super::common::TestStore;

const MAC: &str = "0a:58:0a:f4:00:07";

#[test]
fn first_save_creates_single_record() {
  let env = TestStore::new();

  env.store.save_container_mac(MAC, "default", "web", false).unwrap();

  assert_eq!(env.file_names(), vec![format!("mac_{MAC}_default_web")]);
  let mac = env.store.get_container_mac("default", "web").unwrap().unwrap();
  assert_eq!(mac.to_string(), MAC);
}

#[test]
fn missing_reservation_is_not_an_error() {
  let env = TestStore::new();
  assert_eq!(env.store.get_container_mac("default", "web").unwrap(), None);
}

#[test]
fn repeated_lookup_is_stable() {
  let env = TestStore::new();
  env.store.save_container_mac(MAC, "default", "web", false).unwrap();

  let first = env.store.get_container_mac("default", "web").unwrap();
  let second = env.store.get_container_mac("default", "web").unwrap();
  assert_eq!(first, second);

  let absent_first = env.store.get_container_mac("default", "db").unwrap();
  let absent_second = env.store.get_container_mac("default", "db").unwrap();
  assert_eq!(absent_first, None);
  assert_eq!(absent_second, None);
}

#[test]
fn save_reattaches_existing_mac_record() {
  let env = TestStore::new();
  env.touch(&format!("mac_{MAC}_old_oldname"));

  env.store.save_container_mac(MAC, "default", "web", false).unwrap();

  assert_eq!(env.file_names(), vec![format!("mac_{MAC}_default_web")]);
  assert_eq!(env.store.get_container_mac("old", "oldname").unwrap(), None);
  assert!(env.store.get_container_mac("default", "web").unwrap().is_some());
}

#[test]
fn save_with_known_mac_leaves_directory_unchanged() {
  let env = TestStore::new();
  env.touch(&format!("mac_{MAC}_old_oldname"));
  env.touch("10.244.0.7");
  let before = env.file_names();

  env.store.save_container_mac(MAC, "default", "web", true).unwrap();
  env.store.save_container_mac("0a:58:0a:f4:00:99", "default", "db", true).unwrap();

  assert_eq!(env.file_names(), before);
}

#[test]
fn read_and_no_op_paths_leave_every_byte_alone() {
  let env = TestStore::new();
  env.touch(&format!("mac_{MAC}_default_web"));
  let before = env.snapshot();
  assert!(before.iter().any(|(name, _)| name == LOCK_FILENAME));

  env.store.save_container_mac(MAC, "default", "db", true).unwrap();
  env.store.save_container_mac(MAC, "default", "", false).unwrap();
  env.store.get_container_mac("default", "web").unwrap();
  env.store.get_container_mac("default", "").unwrap();
  env.store.list_records().unwrap();

  assert_eq!(env.snapshot(), before);
}

#[test]
fn empty_name_is_guarded() {
  let env = TestStore::new();
  env.touch(&format!("mac_{MAC}_default_web"));
  let before = env.file_names();

  assert_eq!(env.store.get_container_mac("default", "").unwrap(), None);
  env.store.save_container_mac(MAC, "default", "", false).unwrap();

  assert_eq!(env.file_names(), before);
}

#[test]
fn foreign_files_are_ignored() {
  let env = TestStore::new();
  env.touch("10.244.0.7");
  env.touch("last_reserved_ip.0");
  env.touch("mac_aa_kube_system_dns");

  assert_eq!(env.store.get_container_mac("default", "web").unwrap(), None);
  assert!(env.store.list_records().unwrap().is_empty());

  env.store.save_container_mac(MAC, "default", "web", false).unwrap();
  let records = env.store.list_records().unwrap();
  assert_eq!(records.len(), 1);
  assert_eq!(records[0].name, "web");
}

#[test]
fn ambiguous_records_read_as_absent() {
  let env = TestStore::new();
  env.touch(&format!("mac_{MAC}_default_web"));
  env.touch("mac_0a:58:0a:f4:00:08_default_web");

  assert_eq!(env.store.get_container_mac("default", "web").unwrap(), None);
}

#[test]
fn underscore_in_pod_identity_is_rejected() {
  let env = TestStore::new();

  let err = env
    .store
    .save_container_mac(MAC, "default", "web_1", false)
    .unwrap_err();

  assert!(matches!(err, StoreError::Delimiter { field: "name", .. }));
  assert!(env.file_names().is_empty());
}

#[test]
fn records_survive_reopen() {
  let env = TestStore::new();
  env.store.save_container_mac(MAC, "default", "web", false).unwrap();

  let reopened = env.reopen();
  let mac = reopened.get_container_mac("default", "web").unwrap().unwrap();
  assert_eq!(mac.to_string(), MAC);
}
