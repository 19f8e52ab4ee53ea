use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).unwrap().into_iter().map(|t| t.kind).collect()
}

fn ident(s: &str) -> TokenKind {
    TokenKind::Ident(s.to_owned())
}

#[test]
fn spaced_words_form_one_identifier() {
    assert_eq!(
        kinds("Start State:   START\n"),
        vec![ident("Start State"), TokenKind::Colon, ident("START"), TokenKind::Eof]
    );
}

#[test]
fn double_spaces_split_identifiers() {
    assert_eq!(kinds("A  B"), vec![ident("A"), ident("B"), TokenKind::Eof]);
}

#[test]
fn punctuation_and_arrows() {
    assert_eq!(
        kinds("(obj id: 12) [A, B] ->"),
        vec![
            TokenKind::LParen,
            ident("obj id"),
            TokenKind::Colon,
            ident("12"),
            TokenKind::RParen,
            TokenKind::LBracket,
            ident("A"),
            TokenKind::Comma,
            ident("B"),
            TokenKind::RBracket,
            TokenKind::Arrow,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn labels_keep_their_raw_text() {
    assert_eq!(
        kinds("\u{1} \u{1} -> A \u{1}-\u{1}"),
        vec![
            TokenKind::Label(" ".to_owned()),
            TokenKind::Arrow,
            ident("A"),
            TokenKind::Label("-".to_owned()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn dashes_are_identifiers_outside_arrows() {
    assert_eq!(kinds("- -42"), vec![ident("-"), ident("-42"), TokenKind::Eof]);
}

#[test]
fn tokens_carry_their_line() {
    let tokens = lex("A\n\nB |C").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 3, 3, 3]);
}

#[test]
fn unterminated_label_reports_its_line() {
    let err = lex("A\n\u{1}abc").unwrap_err();
    assert!(matches!(err, DracoError::Parse { line: 2, .. }));
}

#[test]
fn stray_characters_are_rejected() {
    assert!(lex("A ; B").is_err());
}
