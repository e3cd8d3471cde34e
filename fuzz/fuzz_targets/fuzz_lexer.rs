#![no_main]

use libfuzzer_sys::fuzz_target;
use rotor_core::parser::scanner::{Lexer, TokenKind};

fuzz_target!(|data: &[u8]| {
    // The lexer operates on UTF-8 source; skip inputs that are not.
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    let mut lexer = Lexer::new(source, "fuzz.js");
    let Ok(tokens) = lexer.lex() else {
        // Lexical errors are a valid outcome; panics are not.
        return;
    };

    // A successful lex ends in exactly one end-of-file token, and no
    // filtered trivia leaks into the significant stream.
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    for token in &tokens[..tokens.len() - 1] {
        assert!(
            !matches!(
                token.kind,
                TokenKind::Whitespace
                    | TokenKind::Newline
                    | TokenKind::Invalid
                    | TokenKind::Eof
            ),
            "unexpected {:?} in significant stream",
            token.kind
        );
    }

    // Spans are ordered and one-based.
    for token in &tokens {
        assert!(token.span.start.line >= 1);
        assert!(token.span.start.column >= 1);
        assert!(token.span.start.offset <= token.span.end.offset);
    }
});
