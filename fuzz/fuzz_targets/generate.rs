#![no_main]

use invokegen::schema::parse_closure;
use invokegen::{Codegen, GeneratorConfig};
use invokegen_core::Target;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Any closure that loads must generate without panicking
        if let Ok(closure) = parse_closure(s) {
            for target in Target::ALL {
                let _ = Codegen::new(GeneratorConfig::new(target)).generate(&closure);
            }
        }
    }
});
