use super::*;
use pretty_assertions::assert_eq;

#[test]
fn radix_messages() {
    assert_eq!(
        LexErrorKind::MissingRadixDigits { radix: Radix::Hexadecimal }.to_string(),
        "Invalid hexadecimal integer. Expecting at least one [0-9a-zA-Z] after 0x"
    );
    assert_eq!(
        LexErrorKind::MissingRadixDigits { radix: Radix::Octal }.to_string(),
        "Invalid octal integer. Expecting at least one [0-7] after 0o"
    );
    assert_eq!(
        LexErrorKind::MissingRadixDigits { radix: Radix::Binary }.to_string(),
        "Invalid binary integer. Expecting at least one 0 or 1 after 0b"
    );
}

#[test]
fn radix_prefixes() {
    assert_eq!(Radix::from_prefix('X'), Some(Radix::Hexadecimal));
    assert_eq!(Radix::from_prefix('o'), Some(Radix::Octal));
    assert_eq!(Radix::from_prefix('B'), Some(Radix::Binary));
    assert_eq!(Radix::from_prefix('d'), None);
}

#[test]
fn escape_message() {
    assert_eq!(
        LexErrorKind::InvalidEscape { found: Some('z') }.to_string(),
        "Unexpected escape character [z] in string. Only 0 ' \\ \" a b f n r t v u0000-uFFFF U00000000-UFFFFFFFF x0-xFFFF are allowed"
    );
    let at_newline = LexErrorKind::InvalidEscape { found: Some('\n') }.to_string();
    assert!(at_newline.starts_with("Unexpected escape character [\\n]"));
    let at_eof = LexErrorKind::InvalidEscape { found: None }.to_string();
    assert!(at_eof.starts_with("Unexpected escape character [<eof>]"));
}

#[test]
fn literal_messages() {
    assert_eq!(
        LexErrorKind::UnterminatedAtEof { delimiter: '"' }.to_string(),
        "Unexpected end of file while parsing a string/character not terminated by a \""
    );
    assert_eq!(
        LexErrorKind::UnterminatedAtEol { delimiter: '"' }.to_string(),
        "Unexpected end of line while parsing a string not terminated by a \""
    );
    assert_eq!(
        LexErrorKind::UnterminatedChar { delimiter: '\'' }.to_string(),
        "Unexpected end of file while parsing a character not terminated by a '"
    );
}

#[test]
fn number_and_comment_messages() {
    assert_eq!(
        LexErrorKind::MissingFractionDigits.to_string(),
        "Expecting at least one digit after the float dot ."
    );
    assert_eq!(
        LexErrorKind::MissingExponentDigits.to_string(),
        "Expecting at least one digit after the exponent"
    );
    assert_eq!(
        LexErrorKind::UnterminatedBlockComment.to_string(),
        "Invalid multi-line comment. No matching */ for start /*"
    );
}

#[test]
fn decode_errors_are_transparent() {
    let error = DecodeError::TruncatedUtf8 { offset: 4 };
    assert_eq!(LexErrorKind::from(error).to_string(), error.to_string());
}
