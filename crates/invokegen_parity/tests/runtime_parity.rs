//! Runtime behaviour of emitted Rust bindings
//!
//! The bindings under test are produced by the generator in this crate's build script and driven through
//! the recording transport from `invokegen_runtime::testing`.

use std::sync::Arc;

use invokegen_parity::arg_function::{
    ARG_FUNCTION_DEPENDENCIES, ArgFunctionApplyArgs, ArgFunctionArgs, arg_function, arg_function_apply,
};
use invokegen_parity::lookup_pet::{
    LOOKUP_PET_DEPENDENCIES, LOOKUP_PET_TOKEN, LookupPetApplyArgs, LookupPetArgs, lookup_pet, lookup_pet_apply,
};
use invokegen_parity::pulumi_random::RandomPet;
use invokegen_parity::types::{Color, PetInfo};
use invokegen_runtime::testing::RecordingInvoker;
use invokegen_runtime::{Deferred, Input, InvokeError, InvokeOptions, TransportError};
use serde_json::json;

fn recording(version: &str) -> Arc<RecordingInvoker> {
    Arc::new(RecordingInvoker::new(version))
}

fn lookup_args() -> LookupPetArgs {
    LookupPetArgs {
        pet_id: "p".to_string(),
        owner: None,
        region: None,
    }
}

// =============================================================================
// Eager entry point
// =============================================================================

#[tokio::test]
async fn test_absent_optional_is_not_sent() {
    let invoker = recording("1.0.0");
    let result = arg_function(invoker.clone(), ArgFunctionArgs::default(), None).await.unwrap();

    assert_eq!(result.age, None);
    let calls = invoker.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].token, "example::argFunction");
    assert!(calls[0].args.is_empty());
    assert_eq!(calls[0].shape.name, "ArgFunctionResult");
    assert_eq!(calls[0].shape.properties, &["age"]);
    assert_eq!(ARG_FUNCTION_DEPENDENCIES, &["pulumi_random"]);
}

#[tokio::test]
async fn test_arguments_use_wire_names() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"age": 3})));
    let args = ArgFunctionArgs {
        name: Some(RandomPet {
            id: "pet-1".to_string(),
        }),
    };
    let result = arg_function(invoker.clone(), args, None).await.unwrap();

    assert_eq!(result.age, Some(3));
    assert_eq!(invoker.calls()[0].args.get("name"), Some(&json!({"id": "pet-1"})));
}

#[tokio::test]
async fn test_required_optional_and_plain_arguments() {
    let invoker = recording("1.0.0");
    invoker.push(Ok(json!({"petName": "rex", "info": null})));
    let args = LookupPetArgs {
        pet_id: "p-7".to_string(),
        owner: None,
        region: Some("eu".to_string()),
    };
    lookup_pet(invoker.clone(), args, None).await.unwrap();

    let call = &invoker.calls()[0];
    assert_eq!(call.token, LOOKUP_PET_TOKEN);
    assert_eq!(call.args.get("petId"), Some(&json!("p-7")));
    assert_eq!(call.args.get("region"), Some(&json!("eu")));
    assert!(!call.args.contains_key("owner"));
    assert_eq!(call.shape.properties, &["petName", "tags", "color", "info"]);
    assert!(LOOKUP_PET_DEPENDENCIES.is_empty());
}

#[tokio::test]
async fn test_local_types_decode() {
    let response = json!({
        "petName": "rex",
        "tags": {"kind": "dog"},
        "color": "blue",
        "info": {"owner": "alice"},
    });
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(response));
    let result = lookup_pet(invoker, lookup_args(), None).await.unwrap();

    assert_eq!(result.color, Some(Color::Blue));
    assert_eq!(
        result.info,
        Some(PetInfo {
            owner: Some("alice".to_string()),
        })
    );
    assert_eq!(result.tags.as_ref().unwrap().get("kind").map(String::as_str), Some("dog"));
}

#[tokio::test]
async fn test_property_type_mismatch() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"age": "old"})));
    let err = arg_function(invoker, ArgFunctionArgs::default(), None).await.unwrap_err();
    let InvokeError::TypeMismatch(mismatch) = &err else {
        panic!("expected a type mismatch, got {err:?}");
    };
    assert_eq!(mismatch.field, "age");
    assert_eq!(mismatch.expected, "int");
    assert_eq!(mismatch.found, "string");
}

#[tokio::test]
async fn test_unknown_enum_value_is_a_mismatch() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"petName": "rex", "color": "green"})));
    let err = lookup_pet(invoker, lookup_args(), None).await.unwrap_err();
    assert!(matches!(err, InvokeError::TypeMismatch(ref m) if m.field == "color"));
}

#[tokio::test]
async fn test_missing_required_property() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"tags": {}})));
    let err = lookup_pet(invoker, lookup_args(), None).await.unwrap_err();
    assert!(matches!(err, InvokeError::TypeMismatch(ref m) if m.field == "petName" && m.found == "nothing"));
}

#[tokio::test]
async fn test_null_optional_property_is_none() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"petName": "rex", "tags": null})));
    let result = lookup_pet(invoker, lookup_args(), None).await.unwrap();
    assert_eq!(result.pet_name, "rex");
    assert_eq!(result.tags, None);
    assert_eq!(result.info, None);
}

#[tokio::test]
async fn test_transport_failure_is_propagated_unmodified() {
    let failure = TransportError::new("provider unavailable").with_code("UNAVAILABLE");
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_failure(failure.clone()));
    let err = arg_function(invoker, ArgFunctionArgs::default(), None).await.unwrap_err();
    assert_eq!(err, InvokeError::Transport(failure));
}

#[tokio::test]
async fn test_nothing_is_sent_until_polled() {
    let invoker = recording("1.0.0");
    let awaitable = arg_function(invoker.clone(), ArgFunctionArgs::default(), None);
    assert_eq!(invoker.call_count(), 0);

    drop(arg_function(invoker.clone(), ArgFunctionArgs::default(), None));
    awaitable.await.unwrap();
    assert_eq!(invoker.call_count(), 1);
}

#[tokio::test]
async fn test_awaiting_twice_yields_same_result_and_one_dispatch() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"age": 5})));
    let awaitable = arg_function(invoker.clone(), ArgFunctionArgs::default(), None);

    let first = awaitable.resolve().await.unwrap();
    let second = awaitable.resolve().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(invoker.call_count(), 1);
}

#[tokio::test]
async fn test_concurrent_observers_share_one_dispatch() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"age": 8})));
    let awaitable = arg_function(invoker.clone(), ArgFunctionArgs::default(), None);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let observer = awaitable.clone();
            tokio::spawn(async move { observer.await.map(|r| r.age) })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), Some(8));
    }
    assert_eq!(invoker.call_count(), 1);
}

#[tokio::test]
async fn test_default_version_only_when_absent() {
    let invoker = recording("1.2.3");

    let stamped = arg_function(invoker.clone(), ArgFunctionArgs::default(), None);
    assert_eq!(stamped.options().version.as_deref(), Some("1.2.3"));

    let given = InvokeOptions::new().with_version("0.9.0").with_provider("urn:provider");
    let kept = arg_function(invoker.clone(), ArgFunctionArgs::default(), Some(given.clone()));
    assert_eq!(kept.options(), &given);

    stamped.await.unwrap();
    kept.await.unwrap();
    let versions: Vec<_> = invoker.calls().into_iter().map(|c| c.options.version).collect();
    assert!(versions.contains(&Some("1.2.3".to_string())));
    assert!(versions.contains(&Some("0.9.0".to_string())));
}

// =============================================================================
// Apply entry point
// =============================================================================

#[tokio::test]
async fn test_apply_waits_for_inputs() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"petName": "rex"})));
    let args = LookupPetApplyArgs {
        pet_id: Input::from(Deferred::ready("p-1".to_string())),
        owner: Some(Input::value("alice".to_string())),
        region: Some("eu".to_string()),
    };
    let result = lookup_pet_apply(invoker.clone(), args, None).await.unwrap();

    assert_eq!(result.pet_name, "rex");
    let call = &invoker.calls()[0];
    assert_eq!(call.token, "example::lookupPet");
    assert_eq!(call.args.get("petId"), Some(&json!("p-1")));
    assert_eq!(call.args.get("owner"), Some(&json!("alice")));
    assert_eq!(call.args.get("region"), Some(&json!("eu")));
}

#[tokio::test]
async fn test_apply_with_failed_input_never_dispatches() {
    let invoker = recording("1.0.0");
    let upstream = InvokeError::Transport(TransportError::new("upstream failed"));
    let args = LookupPetApplyArgs {
        pet_id: Input::from(Deferred::failed(upstream.clone())),
        owner: None,
        region: None,
    };
    let err = lookup_pet_apply(invoker.clone(), args, None).await.unwrap_err();

    assert_eq!(err, upstream);
    assert_eq!(invoker.call_count(), 0);
}

#[tokio::test]
async fn test_apply_accepts_awaitable_results_as_inputs() {
    let invoker = recording("1.0.0");
    invoker.push(Ok(json!({"age": 2})));
    invoker.push(Ok(json!({"petName": "rex"})));

    let upstream = arg_function(invoker.clone(), ArgFunctionArgs::default(), None);
    let pet_id = upstream.into_deferred().map(|r| format!("pet-{}", r.age.unwrap_or_default()));
    let args = LookupPetApplyArgs {
        pet_id: pet_id.into(),
        owner: None,
        region: None,
    };
    lookup_pet_apply(invoker.clone(), args, None).await.unwrap();

    let calls = invoker.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].args.get("petId"), Some(&json!("pet-2")));
}

#[tokio::test]
async fn test_apply_form_of_arg_function() {
    let invoker = Arc::new(RecordingInvoker::new("1.0.0").with_response(json!({"age": 1})));
    let pet = RandomPet { id: "x".to_string() };
    let args = ArgFunctionApplyArgs {
        name: Some(Input::from(Deferred::ready(pet))),
    };
    let result = arg_function_apply(invoker.clone(), args, None).await.unwrap();
    assert_eq!(result.age, Some(1));
    assert_eq!(invoker.calls()[0].args.get("name"), Some(&json!({"id": "x"})));
}
