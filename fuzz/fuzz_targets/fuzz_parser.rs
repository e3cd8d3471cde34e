#![no_main]

use libfuzzer_sys::fuzz_target;
use rotor_core::parser::scanner::Lexer;
use rotor_core::parser::Parser;

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(tokens) = Lexer::new(source, "fuzz.js").lex() else {
        return;
    };

    // Parse failures are a valid outcome; panics and partial programs are
    // not. A successful parse must render without panicking and must hand
    // back an empty global scope.
    if let Ok((program, globals)) = Parser::new(tokens).parse() {
        let _ = program.to_string();
        assert!(globals.borrow().is_empty());
    }
});
