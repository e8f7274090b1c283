//! Tests for `pbind invoke`.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn binds_to_owner() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind model.submodel.method)", &[])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""receiver":"submodel""#));
}

#[test]
fn single_segment_binds_to_root() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind method)", &[])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""receiver":"root""#));
}

#[test]
fn explicit_target_wins() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind model.submodel.method target=model)", &[])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""receiver":"model""#));
}

#[test]
fn actions_namespace_is_skipped() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind model.actions.method 1)", &[])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""receiver":"model""#))
    .stdout(predicate::str::contains(r#""args":[1]"#));
}

#[test]
fn no_ignore_namespace_binds_to_actions() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke_with(&["--no-ignore-namespace"], "(bind model.actions.method)", &[])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""receiver":"actions""#));
}

#[test]
fn namespace_from_environment() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind model.submodel.method)", &[])
    .env("PATHBIND_IGNORED_NAMESPACE", "submodel")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""receiver":"model""#));
}

#[test]
fn extra_and_call_args_are_concatenated() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke(r#"(bind model.submodel.method "adios" 1)"#, &["greeting", "-2", "\"b\""])
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""args":["adios",1,"hola",-2,"b"]"#));
}

#[test]
fn json_output_is_an_array_of_results() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke_with(&["--output", "json"], "(bind model.method)", &[])
    .assert()
    .success()
    .stdout(predicate::str::starts_with("["))
    .stdout(predicate::str::contains(r#""receiver": "model""#));
}

#[test]
fn no_return_value_is_reported() {
  let env = TestEnv::with_content("return { noop = function() end }");
  env
    .invoke("(bind noop)", &[])
    .assert()
    .success()
    .stdout(predicate::str::contains("No return value"));
}

#[test]
fn unresolved_path_fails() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind missing.method)", &[])
    .assert()
    .failure()
    .stderr(predicate::str::contains("'missing' is not defined"));
}

#[test]
fn invalid_expression_fails() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind model.method", &[])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unexpected end of expression"));
}

#[test]
fn function_errors_are_reported() {
  let env = TestEnv::from_fixture("context.lua");
  env
    .invoke("(bind model.fail)", &[])
    .assert()
    .failure()
    .stderr(predicate::str::contains("handler failed on model"));
}

#[test]
fn context_must_return_a_table() {
  let env = TestEnv::with_content("return 'not a table'");
  env
    .invoke("(bind method)", &[])
    .assert()
    .failure()
    .stderr(predicate::str::contains("must return a table"));
}
