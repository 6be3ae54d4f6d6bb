//! Integration tests for the HTML tokenizer.

use marten_html::{
    Attribute, DuplicateAttributePolicy, HTMLTokenizer, ParseErrorKind, Tag, Token, TokenKind,
    TokenizerConfig, TokenizerState,
};

/// Tokenizer with stderr warnings off so test output stays readable.
fn quiet_tokenizer(input: &str) -> HTMLTokenizer {
    HTMLTokenizer::with_config(input, TokenizerConfig::default().with_warnings(false))
}

/// Helper to tokenize a string and return the tokens
fn tokenize(input: &str) -> Vec<Token> {
    quiet_tokenizer(input).into_tokens()
}

/// Helper to tokenize a string and return the parse error kinds
fn error_kinds(input: &str) -> Vec<ParseErrorKind> {
    let mut tokenizer = quiet_tokenizer(input);
    while !tokenizer.next_token().is_eof() {}
    tokenizer.errors().iter().map(|error| error.kind).collect()
}

fn character(c: char) -> Token {
    Token::new_character(c)
}

fn start_tag(token: &Token) -> &Tag {
    match token {
        Token::StartTag(tag) => tag,
        other => panic!("Expected StartTag token, got {other}"),
    }
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    let expected: Vec<Token> = "Hello".chars().map(character).collect();
    assert_eq!(tokens[..5], expected[..]);
    assert!(matches!(tokens[5], Token::EndOfFile));
}

#[test]
fn test_text_without_tags_is_one_token_per_character() {
    let input = "a > b = \"c\" / d\r\n\té€";
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), input.chars().count() + 1);
    for (token, c) in tokens.iter().zip(input.chars()) {
        assert_eq!(*token, character(c));
    }
    assert!(tokens.last().is_some_and(Token::is_eof));
}

#[test]
fn test_empty_input() {
    let tokens = tokenize("");
    assert_eq!(tokens, vec![Token::EndOfFile]);
}

#[test]
fn test_doctype() {
    let tokens = tokenize("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 2); // DOCTYPE + EOF
    match &tokens[0] {
        Token::Doctype(doctype) => {
            assert_eq!(doctype.name.as_deref(), Some("html"));
            assert_eq!(doctype.public_identifier, None);
            assert_eq!(doctype.system_identifier, None);
            assert!(!doctype.force_quirks);
        }
        other => panic!("Expected DOCTYPE token, got {other}"),
    }
}

#[test]
fn test_doctype_name_preserves_case() {
    let tokens = tokenize("<!DOCTYPE HTML>");
    let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
    assert_eq!(doctype.name.as_deref(), Some("HTML"));
}

#[test]
fn test_doctype_keyword_is_case_sensitive() {
    let tokens = tokenize("<!doctype html>");
    assert!(tokens.iter().all(|t| t.kind() != TokenKind::Doctype));
    assert_eq!(tokens[0], character('<'));
    assert_eq!(tokens[1], character('!'));
    assert_eq!(tokens[2], character('d'));
    assert_eq!(
        error_kinds("<!doctype html>"),
        vec![ParseErrorKind::IncorrectlyOpenedComment]
    );
}

#[test]
fn test_doctype_extra_whitespace_before_name() {
    let tokens = tokenize("<!DOCTYPE   html>");
    let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
    assert_eq!(doctype.name.as_deref(), Some("html"));
}

#[test]
fn test_doctype_without_name_forces_quirks() {
    let tokens = tokenize("<!DOCTYPE>");
    assert_eq!(tokens.len(), 2);
    let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
    assert_eq!(doctype.name, None);
    assert!(doctype.force_quirks);
    assert_eq!(error_kinds("<!DOCTYPE>"), vec![ParseErrorKind::MissingDoctypeName]);
}

#[test]
fn test_doctype_missing_whitespace_before_name() {
    let tokens = tokenize("<!DOCTYPEhtml>");
    let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
    assert_eq!(doctype.name.as_deref(), Some("html"));
    assert!(!doctype.force_quirks);
    assert_eq!(
        error_kinds("<!DOCTYPEhtml>"),
        vec![ParseErrorKind::MissingWhitespaceBeforeDoctypeName]
    );
}

#[test]
fn test_doctype_trailing_whitespace_after_name() {
    let tokens = tokenize("<!DOCTYPE html  >x");
    let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
    assert_eq!(doctype.name.as_deref(), Some("html"));
    assert!(!doctype.force_quirks);
    assert_eq!(tokens[1], character('x'));
    assert!(error_kinds("<!DOCTYPE html  >").is_empty());
}

#[test]
fn test_doctype_with_public_identifier_is_bogus() {
    let input = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN">ok"#;
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 4); // DOCTYPE, o, k, EOF
    let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
    assert_eq!(doctype.name.as_deref(), Some("html"));
    assert_eq!(doctype.public_identifier, None);
    assert!(doctype.force_quirks);
    assert_eq!(tokens[1], character('o'));
    assert_eq!(tokens[2], character('k'));
    assert_eq!(
        error_kinds(input),
        vec![ParseErrorKind::InvalidCharacterSequenceAfterDoctypeName]
    );
}

#[test]
fn test_doctype_eof_variants() {
    for input in ["<!DOCTYPE", "<!DOCTYPE ", "<!DOCTYPE html", "<!DOCTYPE html "] {
        let tokens = tokenize(input);
        assert_eq!(tokens.len(), 2, "input {input:?}");
        let doctype = tokens[0].as_doctype().expect("Expected DOCTYPE token");
        assert!(doctype.force_quirks, "input {input:?}");
        assert!(tokens[1].is_eof());
        assert_eq!(error_kinds(input), vec![ParseErrorKind::EofInDoctype]);
    }
}

#[test]
fn test_start_tag() {
    let tokens = tokenize("<a>");
    assert_eq!(tokens.len(), 2);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "a");
    assert!(!tag.self_closing);
    assert!(!tag.self_closing_acknowledged);
    assert!(tag.attributes.is_empty());
}

#[test]
fn test_tag_name_preserves_case() {
    let tokens = tokenize("<DiV>");
    assert_eq!(start_tag(&tokens[0]).name, "DiV");
}

#[test]
fn test_end_tag() {
    let tokens = tokenize("</a>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::EndTag(tag) => {
            assert_eq!(tag.name, "a");
            assert!(tag.attributes.is_empty());
        }
        other => panic!("Expected EndTag token, got {other}"),
    }
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(tokens.len(), 2);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "br");
    assert!(tag.self_closing);
}

#[test]
fn test_self_closing_after_attribute() {
    let tokens = tokenize(r#"<img src="a.png"/>"#);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "img");
    assert_eq!(tag.attribute("src"), Some("a.png"));
    assert!(tag.self_closing);
}

#[test]
fn test_stray_solidus_in_tag() {
    let tokens = tokenize("<a / b>");
    let tag = start_tag(&tokens[0]);
    assert!(!tag.self_closing);
    assert_eq!(tag.attributes, vec![Attribute::new("b".into(), String::new())]);
    assert_eq!(error_kinds("<a / b>"), vec![ParseErrorKind::UnexpectedSolidusInTag]);
}

#[test]
fn test_attribute_double_quoted() {
    let tokens = tokenize(r#"<a b="c">"#);
    assert_eq!(tokens.len(), 2);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "a");
    assert_eq!(tag.attributes, vec![Attribute::new("b".into(), "c".into())]);
}

#[test]
fn test_attribute_single_quoted() {
    let tokens = tokenize("<div class='bar'>");
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "div");
    assert_eq!(tag.attributes.len(), 1);
    assert_eq!(tag.attributes[0].name, "class");
    assert_eq!(tag.attributes[0].value, "bar");
}

#[test]
fn test_attribute_unquoted() {
    let tokens = tokenize("<div class=baz>");
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.attribute("class"), Some("baz"));
}

#[test]
fn test_attribute_value_keeps_markup_characters() {
    let tokens = tokenize(r#"<a title="x > y & z 'q'">"#);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.attribute("title"), Some("x > y & z 'q'"));
}

#[test]
fn test_whitespace_around_equals() {
    let tokens = tokenize("<a b = \"c\" >");
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.attributes, vec![Attribute::new("b".into(), "c".into())]);
}

#[test]
fn test_boolean_attribute() {
    let tokens = tokenize("<input disabled>");
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "input");
    assert_eq!(tag.attributes.len(), 1);
    assert_eq!(tag.attributes[0].name, "disabled");
    assert_eq!(tag.attributes[0].value, "");
}

#[test]
fn test_trailing_whitespace_does_not_create_attribute() {
    let tokens = tokenize("<a >");
    assert!(start_tag(&tokens[0]).attributes.is_empty());
}

#[test]
fn test_multiple_attributes() {
    let tokens = tokenize(r#"<input type="text" id='name' disabled value=42>"#);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.name, "input");
    let names: Vec<&str> = tag.attributes.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["type", "id", "disabled", "value"]);
    assert_eq!(tag.attribute("type"), Some("text"));
    assert_eq!(tag.attribute("id"), Some("name"));
    assert_eq!(tag.attribute("disabled"), Some(""));
    assert_eq!(tag.attribute("value"), Some("42"));
}

#[test]
fn test_missing_whitespace_between_attributes() {
    let input = r#"<a b="1"c="2">"#;
    let tokens = tokenize(input);
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.attribute("b"), Some("1"));
    assert_eq!(tag.attribute("c"), Some("2"));
    assert_eq!(
        error_kinds(input),
        vec![ParseErrorKind::MissingWhitespaceBetweenAttributes]
    );
}

#[test]
fn test_missing_attribute_value() {
    let tokens = tokenize("<a b=>");
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.attribute("b"), Some(""));
    assert_eq!(error_kinds("<a b=>"), vec![ParseErrorKind::MissingAttributeValue]);
}

#[test]
fn test_unexpected_characters_in_attribute_name_and_value() {
    let tokens = tokenize("<a =x b\"c=d`e>");
    let tag = start_tag(&tokens[0]);
    assert_eq!(tag.attributes[0].name, "=x");
    assert_eq!(tag.attributes[1].name, "b\"c");
    assert_eq!(tag.attributes[1].value, "d`e");
    assert_eq!(
        error_kinds("<a =x b\"c=d`e>"),
        vec![
            ParseErrorKind::UnexpectedEqualsSignBeforeAttributeName,
            ParseErrorKind::UnexpectedCharacterInAttributeName,
            ParseErrorKind::UnexpectedCharacterInUnquotedAttributeValue,
        ]
    );
}

#[test]
fn test_duplicate_attributes_kept_by_default() {
    let input = r#"<a x="1" x="2">"#;
    let tokens = tokenize(input);
    let tag = start_tag(&tokens[0]);
    assert_eq!(
        tag.attributes,
        vec![
            Attribute::new("x".into(), "1".into()),
            Attribute::new("x".into(), "2".into()),
        ]
    );
    assert_eq!(error_kinds(input), vec![ParseErrorKind::DuplicateAttribute]);
}

#[test]
fn test_duplicate_attributes_dropped_when_configured() {
    let config = TokenizerConfig::default()
        .with_warnings(false)
        .with_duplicate_attributes(DuplicateAttributePolicy::DropLater);
    let mut tokenizer = HTMLTokenizer::with_config(r#"<a x="1" y=2 x="3" z x>"#, config);
    let token = tokenizer.next_token();
    let tag = start_tag(&token);
    assert_eq!(
        tag.attributes,
        vec![
            Attribute::new("x".into(), "1".into()),
            Attribute::new("y".into(), "2".into()),
            Attribute::new("z".into(), String::new()),
        ]
    );
    let kinds: Vec<_> = tokenizer.errors().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ParseErrorKind::DuplicateAttribute,
            ParseErrorKind::DuplicateAttribute
        ]
    );
}

#[test]
fn test_tag_with_text_content() {
    let tokens = tokenize("<p>Hi</p>");
    assert_eq!(tokens.len(), 5); // <p>, H, i, </p>, EOF
    assert!(matches!(&tokens[0], Token::StartTag(tag) if tag.name == "p"));
    assert_eq!(tokens[1], character('H'));
    assert_eq!(tokens[2], character('i'));
    assert!(matches!(&tokens[3], Token::EndTag(tag) if tag.name == "p"));
    assert!(matches!(tokens[4], Token::EndOfFile));
}

#[test]
fn test_end_tag_with_attributes_and_solidus() {
    let tokens = tokenize(r#"</a b="c"/>"#);
    match &tokens[0] {
        Token::EndTag(tag) => {
            assert_eq!(tag.name, "a");
            assert_eq!(tag.attribute("b"), Some("c"));
            assert!(tag.self_closing);
        }
        other => panic!("Expected EndTag token, got {other}"),
    }
    assert_eq!(
        error_kinds(r#"</a b="c"/>"#),
        vec![
            ParseErrorKind::EndTagWithAttributes,
            ParseErrorKind::EndTagWithTrailingSolidus,
        ]
    );
}

#[test]
fn test_less_than_followed_by_non_letter_is_text() {
    let tokens = tokenize("a < b");
    let text: Vec<Token> = "a < b".chars().map(character).collect();
    assert_eq!(tokens[..5], text[..]);
    assert!(tokens[5].is_eof());
    assert_eq!(
        error_kinds("a < b"),
        vec![ParseErrorKind::InvalidFirstCharacterOfTagName]
    );
}

#[test]
fn test_end_tag_open_recovery() {
    assert_eq!(
        tokenize("</1"),
        vec![character('<'), character('/'), character('1'), Token::EndOfFile]
    );
    assert_eq!(tokenize("</>x"), vec![character('x'), Token::EndOfFile]);
    assert_eq!(error_kinds("</>"), vec![ParseErrorKind::MissingEndTagName]);
}

#[test]
fn test_eof_before_tag_name() {
    assert_eq!(tokenize("<"), vec![character('<'), Token::EndOfFile]);
    assert_eq!(
        tokenize("</"),
        vec![character('<'), character('/'), Token::EndOfFile]
    );
    assert_eq!(error_kinds("<"), vec![ParseErrorKind::EofBeforeTagName]);
}

#[test]
fn test_eof_in_tag_drops_the_tag() {
    for input in ["<div", "<div ", "<div a", "<div a=", "<div a=\"b", "<div a='b", "<div a=b", "<div a=\"b\"", "<div/"] {
        let tokens = tokenize(input);
        assert_eq!(tokens, vec![Token::EndOfFile], "input {input:?}");
        assert_eq!(error_kinds(input), vec![ParseErrorKind::EofInTag], "input {input:?}");
    }
}

#[test]
fn test_comment_markup_is_text() {
    let tokens = tokenize("<!-- x -->");
    let text: String = tokens
        .iter()
        .filter_map(|t| match t {
            Token::Character { data } => Some(data.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(text, "<!-- x -->");
}

#[test]
fn test_simple_html_document() {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body class="main">Hello</body>
</html>"#;
    let tokens = tokenize(html);

    // Should have DOCTYPE as first token
    assert!(matches!(&tokens[0], Token::Doctype(d) if d.name.as_deref() == Some("html")));

    // Should end with EOF
    assert!(matches!(tokens.last(), Some(Token::EndOfFile)));

    let start_tags = tokens.iter().filter(|t| t.kind() == TokenKind::StartTag).count();
    let end_tags = tokens.iter().filter(|t| t.kind() == TokenKind::EndTag).count();
    assert_eq!(start_tags, 4); // html, head, title, body
    assert_eq!(end_tags, 4); // /title, /head, /body, /html

    let body = tokens
        .iter()
        .filter_map(Token::as_tag)
        .find(|tag| tag.name == "body")
        .expect("Expected body tag");
    assert_eq!(body.attribute("class"), Some("main"));
}

#[test]
fn test_carriage_return_is_not_whitespace_in_tags() {
    let tokens = tokenize("<a\rb>");
    assert_eq!(start_tag(&tokens[0]).name, "a\rb");
    assert_eq!(tokenize("\r"), vec![character('\r'), Token::EndOfFile]);
}

#[test]
fn test_next_token_keeps_returning_eof() {
    let mut tokenizer = quiet_tokenizer("<a>");
    assert_eq!(tokenizer.next_token().kind(), TokenKind::StartTag);
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token(), Token::EndOfFile);
    }
}

#[test]
fn test_iterator_stops_after_eof() {
    let mut tokenizer = quiet_tokenizer("x");
    assert_eq!(tokenizer.next(), Some(character('x')));
    assert_eq!(tokenizer.next(), Some(Token::EndOfFile));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_one_external_call_consumes_a_whole_tag() {
    let mut tokenizer = quiet_tokenizer(r#"<section id="main">x"#);
    let token = tokenizer.next_token();
    assert_eq!(start_tag(&token).name, "section");
    assert_eq!(tokenizer.position(), r#"<section id="main">"#.len());
    assert_eq!(tokenizer.state(), TokenizerState::Data);
}

#[test]
fn test_emitted_tokens_are_never_placeholders() {
    let inputs = [
        "",
        "<",
        "<!",
        "<!DOCTYPE",
        "</",
        "<a b='",
        "plain <b>bold</b> &amp; <!-- c --> <!DOCTYPE x y>",
        "<<<>>>",
        "<a/ / / />",
    ];
    for input in inputs {
        let tokens = tokenize(input);
        assert!(tokens.iter().all(Token::is_valid), "input {input:?}");
        assert_eq!(
            tokens.iter().filter(|t| t.is_eof()).count(),
            1,
            "input {input:?}"
        );
        assert!(tokens.last().is_some_and(Token::is_eof), "input {input:?}");
    }
}

#[test]
fn test_emitted_token_is_owned_by_caller() {
    let mut tokenizer = quiet_tokenizer("<a b=\"c\"><d>");
    let first = tokenizer.next_token();
    let snapshot = first.clone();
    let second = tokenizer.next_token();
    assert_eq!(start_tag(&second).name, "d");
    assert_eq!(first, snapshot);
}

#[test]
fn test_parse_error_positions() {
    let mut tokenizer = quiet_tokenizer("ab<");
    while !tokenizer.next_token().is_eof() {}
    let errors = tokenizer.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ParseErrorKind::EofBeforeTagName);
    assert_eq!(errors[0].position, 3);
    assert_eq!(errors[0].to_string(), "eof-before-tag-name at position 3");
}

#[test]
fn test_tokens_serialize_with_type_tag() {
    let tokens = tokenize(r#"<!DOCTYPE html><a b="c">d</a>"#);
    let json = serde_json::to_value(&tokens).expect("tokens serialize");
    assert_eq!(json[0]["type"], "DOCTYPE");
    assert_eq!(json[0]["name"], "html");
    assert!(json[0]["public_identifier"].is_null());
    assert_eq!(json[1]["type"], "StartTag");
    assert_eq!(json[1]["attributes"][0]["name"], "b");
    assert_eq!(json[2]["type"], "Character");
    assert_eq!(json[2]["data"], "d");
    assert_eq!(json[3]["type"], "EndTag");
    assert_eq!(json[4]["type"], "EndOfFile");
}

#[test]
fn test_display_rendering() {
    let rendered: Vec<String> = tokenize("<!DOCTYPE html><a b=\"c\"/> </a>")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        ["DOCTYPE html", "<a b=\"c\" />", "Character(SPACE)", "</a>", "EOF"]
    );
}
