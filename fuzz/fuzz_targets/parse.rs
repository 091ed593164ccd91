#![no_main]

use autoclosed::Generator;
use autoclosed::frontend::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tokens) = lexer::lex(s) {
            let _ = parser::parse(s, &tokens);
        }
        // The full pipeline must never panic, whatever the input.
        let _ = Generator::default().generate_source("fuzz.cs", s);
    }
});
