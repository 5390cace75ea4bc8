//! Bindings for `schema.json`, generated by the build script and compiled against `invokegen_runtime`.
//!
//! Each function lands in its own module, exactly as the generator wrote it. The modules below that are
//! not included from `OUT_DIR` stand in for what a real SDK crate would provide next to the bindings: the
//! external `pulumi_random` package and the crate's own `types` module.

pub mod pulumi_random {
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    pub struct RandomPet {
        pub id: String,
    }

    invokegen_runtime::impl_from_raw_via_serde!(RandomPet);
}

pub mod types {
    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    pub struct PetInfo {
        pub owner: Option<String>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Color {
        Red,
        Blue,
    }

    invokegen_runtime::impl_from_raw_via_serde!(PetInfo, Color);
}

pub mod arg_function {
    use crate::pulumi_random;

    include!(concat!(env!("OUT_DIR"), "/arg_function.rs"));
}

pub mod lookup_pet {
    include!(concat!(env!("OUT_DIR"), "/lookup_pet.rs"));
}
