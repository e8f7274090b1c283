//! Tests for the `(bind ...)` helper expression, one per markup form.

use mlua::prelude::*;

use super::common::{assert_context, call_action, create_test_runtime, get, last_arguments};

mod context_changes {
  use super::*;

  fn check(expr: &str, expected_context: &str) -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    call_action(&lua, &root, expr)?;
    assert_context(&lua, &get(&root, expected_context)?)?;
    assert!(last_arguments(&lua)?.is_empty(), "expected no arguments for {expr}");
    Ok(())
  }

  #[test]
  fn method_with_implicit_this() -> LuaResult<()> {
    check("(bind method)", "this")
  }

  #[test]
  fn method_with_target_this() -> LuaResult<()> {
    check("(bind method target=this)", "this")
  }

  #[test]
  fn method_with_target_submodel() -> LuaResult<()> {
    check("(bind method target=model.submodel)", "model.submodel")
  }

  #[test]
  fn model_method_with_implicit_model() -> LuaResult<()> {
    check("(bind model.method)", "model")
  }

  #[test]
  fn model_method_with_target_model() -> LuaResult<()> {
    check("(bind model.method target=model)", "model")
  }

  #[test]
  fn model_method_with_target_submodel() -> LuaResult<()> {
    check("(bind model.method target=model.submodel)", "model.submodel")
  }

  #[test]
  fn submodel_method_with_implicit_submodel() -> LuaResult<()> {
    check("(bind model.submodel.method)", "model.submodel")
  }

  #[test]
  fn submodel_method_with_target_submodel() -> LuaResult<()> {
    check("(bind model.submodel.method target=model.submodel)", "model.submodel")
  }
}

mod actions_namespace {
  use super::*;

  #[test]
  fn model_actions_method_binds_to_model() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    call_action(&lua, &root, "(bind model.actions.method 1)")?;
    assert_context(&lua, &get(&root, "model")?)?;
    assert_eq!(last_arguments(&lua)?, vec![LuaValue::Integer(1)]);
    Ok(())
  }

  #[test]
  fn actions_method_binds_to_this() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    call_action(&lua, &root, "(bind actions.method 1)")?;
    assert_context(&lua, &root)?;
    assert_eq!(last_arguments(&lua)?, vec![LuaValue::Integer(1)]);
    Ok(())
  }
}

mod extra_arguments {
  use super::*;

  fn as_string(value: &LuaValue) -> Option<String> {
    value.as_string().map(|s| s.to_string_lossy())
  }

  #[test]
  fn passes_the_extra_argument() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    call_action(&lua, &root, r#"(bind model.submodel.method "adios")"#)?;
    assert_context(&lua, &get(&root, "model.submodel")?)?;
    let args = last_arguments(&lua)?;
    assert_eq!(args.len(), 1);
    assert_eq!(as_string(&args[0]).as_deref(), Some("adios"));
    Ok(())
  }

  #[test]
  fn keeps_explicit_target() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    call_action(&lua, &root, r#"(bind model.submodel.method "adios" target=model)"#)?;
    assert_context(&lua, &get(&root, "model")?)?;
    let args = last_arguments(&lua)?;
    assert_eq!(args.len(), 1);
    assert_eq!(as_string(&args[0]).as_deref(), Some("adios"));
    Ok(())
  }

  #[test]
  fn passes_multiple_extra_arguments() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    call_action(&lua, &root, r#"(bind model.submodel.method "adios" 1 model)"#)?;
    assert_context(&lua, &get(&root, "model.submodel")?)?;
    let args = last_arguments(&lua)?;
    assert_eq!(args.len(), 3);
    assert_eq!(as_string(&args[0]).as_deref(), Some("adios"));
    assert_eq!(args[1], LuaValue::Integer(1));
    assert_eq!(args[2].as_table(), Some(&get(&root, "model")?));
    Ok(())
  }
}

mod errors {
  use super::*;
  use pathbind_lib::Binder;
  use pathbind_lib::helper::{self, HelperError};
  use pathbind_lib::{BindError, UnresolvedPathError};

  #[test]
  fn missing_owner_fails_at_bind_time() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    let err = helper::evaluate("(bind missing.method)", &lua, &root, &Binder::default()).unwrap_err();
    assert!(matches!(
      err,
      HelperError::Bind(BindError::UnresolvedPath(UnresolvedPathError::Missing { .. }))
    ));
    Ok(())
  }

  #[test]
  fn non_function_fails_at_bind_time() -> LuaResult<()> {
    let (lua, root) = create_test_runtime()?;
    let err = helper::evaluate("(bind model.submodel)", &lua, &root, &Binder::default()).unwrap_err();
    assert!(err.to_string().contains("not callable"), "got: {err}");
    Ok(())
  }
}
