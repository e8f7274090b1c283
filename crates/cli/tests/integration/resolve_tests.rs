//! Tests for `pbind resolve`.

use predicates::prelude::*;

use super::common::TestEnv;

fn resolve(env: &TestEnv, path: &str) -> assert_cmd::Command {
  let mut cmd = env.pbind_cmd();
  cmd.arg("resolve").arg(env.context()).arg(path);
  cmd
}

#[test]
fn reports_receiver_path() {
  let env = TestEnv::from_fixture("context.lua");
  resolve(&env, "model.submodel.method")
    .assert()
    .success()
    .stdout(predicate::str::contains("Resolved model.submodel.method"))
    .stdout(predicate::str::contains("Receiver: model.submodel"));
}

#[test]
fn root_receiver_is_this() {
  let env = TestEnv::from_fixture("context.lua");
  resolve(&env, "actions.method")
    .assert()
    .success()
    .stdout(predicate::str::contains("Receiver: this"))
    .stdout(predicate::str::contains("Skipped namespace: actions"));
}

#[test]
fn json_report() {
  let env = TestEnv::from_fixture("context.lua");
  resolve(&env, "this.model.actions.method")
    .arg("--output")
    .arg("json")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""function": "model.actions.method""#))
    .stdout(predicate::str::contains(r#""receiver": "model""#))
    .stdout(predicate::str::contains(r#""namespace_skipped": true"#));
}

#[test]
fn invalid_path_fails() {
  let env = TestEnv::from_fixture("context.lua");
  resolve(&env, "model..method")
    .assert()
    .failure()
    .stderr(predicate::str::contains("empty segment"));
}

#[test]
fn non_function_fails() {
  let env = TestEnv::from_fixture("context.lua");
  resolve(&env, "greeting")
    .assert()
    .failure()
    .stderr(predicate::str::contains("not callable"));
}
