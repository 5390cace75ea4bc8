use invokegen_core::Target;
use invokegen_schema::{
    FunctionSpec, PackageSpec, ParamSpec, PrimitiveKind, PropertySpec, SchemaClosure, TypeDef, TypeRef,
};

use super::*;
use crate::frontend::binder::bind;

fn string() -> TypeRef {
    TypeRef::primitive(PrimitiveKind::String)
}

fn emit_with(config: &GeneratorConfig, function: FunctionSpec) -> String {
    let root = PackageSpec::new("example")
        .with_type(TypeDef::object("PetInfo", vec![PropertySpec::new("owner", string())]))
        .with_type(TypeDef::enumeration("Color", vec![]))
        .with_function(function);
    let closure = SchemaClosure::new(
        root,
        [PackageSpec::new("pulumi_random").with_type(TypeDef::resource("RandomPet"))],
    );
    let outcome = bind(&closure, Target::Python).unwrap();
    assert!(outcome.is_clean(), "{:?}", outcome.failures);
    PythonEmitter::new(config).emit_function(&outcome.functions[0]).unwrap()
}

fn emit(function: FunctionSpec) -> String {
    emit_with(&GeneratorConfig::new(Target::Python), function)
}

#[test]
fn test_init_and_getters() {
    let function = FunctionSpec::new("getUser")
        .with_property(PropertySpec::new("userName", string()).required())
        .with_property(PropertySpec::new("score", TypeRef::primitive(PrimitiveKind::Number)));
    let out = emit(function);
    assert!(out.contains("    def __init__(__self__, user_name=None, score=None):\n"));
    assert!(out.contains("        if user_name and not isinstance(user_name, str):\n"));
    assert!(out.contains("            raise TypeError(\"Expected argument 'user_name' to be a str\")\n"));
    assert!(out.contains("    @pulumi.getter(name=\"userName\")\n    def user_name(self) -> str:\n"));
    assert!(out.contains("    @pulumi.getter\n    def score(self) -> Optional[float]:\n"));
    assert!(out.contains("        return GetUserResult(\n            user_name=self.user_name,\n            score=self.score)\n"));
    assert!(out.contains("    return AwaitableGetUserResult(\n        user_name=__ret__.user_name,\n        score=__ret__.score)\n"));
}

#[test]
fn test_local_types_import_modules() {
    let function = FunctionSpec::new("getPet")
        .with_property(PropertySpec::new("info", TypeRef::object("example", "PetInfo")))
        .with_property(PropertySpec::new("color", TypeRef::enumeration("example", "Color")));
    let out = emit(function);
    assert!(out.contains("from . import _utilities\nfrom . import _enums\nfrom . import outputs\n\n__all__"));
    assert!(out.contains("def info(self) -> Optional['outputs.PetInfo']:"));
    assert!(out.contains("if info and not isinstance(info, dict):"));
    assert!(out.contains("def color(self) -> Optional['_enums.Color']:"));
}

#[test]
fn test_required_after_optional_is_keyword_only() {
    let function = FunctionSpec::new("lookup")
        .with_param(ParamSpec::new("filter", string()))
        .with_param(ParamSpec::new("id", string()).required());
    let out = emit(function);
    assert!(out.contains(
        "def lookup(filter: Optional[str] = None,\n           *,\n           id: str,\n           opts: Optional[pulumi.InvokeOptions] = None) -> AwaitableLookupResult:\n"
    ));
    assert!(out.contains("def lookup_apply(filter: Optional[pulumi.Input[str]] = None,\n"));
    assert!(out.contains("                 id: pulumi.Input[str],\n"));
}

#[test]
fn test_plain_params_are_not_inputs() {
    let function = FunctionSpec::new("lookup").with_param(ParamSpec::new("region", string()).plain());
    let out = emit(function);
    assert!(out.contains("def lookup_apply(region: Optional[str] = None,\n"));
}

#[test]
fn test_zero_property_function() {
    let out = emit(FunctionSpec::new("ping"));
    assert!(out.contains("    def __init__(__self__):\n        pass\n"));
    assert!(out.contains("        return PingResult()\n"));
    assert!(out.contains("def ping(opts: Optional[pulumi.InvokeOptions] = None) -> AwaitablePingResult:\n"));
    assert!(out.contains("    __args__ = dict()\n    if opts is None:\n"));
    assert!(out.contains("    return AwaitablePingResult()\n"));
}

#[test]
fn test_descriptions_become_docstrings() {
    let function = FunctionSpec::new("lookup")
        .with_description("Look a thing up.")
        .with_param(ParamSpec::new("id", string()).with_description("The id."))
        .with_property(PropertySpec::new("arn", string()).with_description("The ARN."));
    let out = emit(function);
    assert!(out.contains("    \"\"\"\n    Look a thing up.\n\n    :param id: The id.\n    \"\"\"\n"));
    assert!(out.contains("    def arn(self) -> Optional[str]:\n        \"\"\"\n        The ARN.\n        \"\"\"\n"));
}

#[test]
fn test_reserved_parameter_is_renamed_but_keeps_wire_name() {
    let function = FunctionSpec::new("f").with_param(ParamSpec::new("opts", string()));
    let out = emit(function);
    assert!(out.contains("def f(opts_: Optional[str] = None,\n"));
    assert!(out.contains("    __args__['opts'] = opts_\n"));
}

#[test]
fn test_apply_can_be_disabled() {
    let config = GeneratorConfig::new(Target::Python).with_emit_apply(false);
    let out = emit_with(&config, FunctionSpec::new("ping"));
    assert!(!out.contains("lift_output_func"));
    assert!(out.ends_with("    return AwaitablePingResult()\n"));
}

#[test]
fn test_long_constructor_wraps() {
    let mut function = FunctionSpec::new("wide");
    for i in 0..12 {
        function = function.with_property(PropertySpec::new(format!("property_number_{i}"), string()));
    }
    let config = GeneratorConfig::new(Target::Python);
    let out = emit_with(&config, function);
    assert!(out.contains("    def __init__(__self__,\n                 property_number_0=None,\n"));
}
