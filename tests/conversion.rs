use numwords::shell::Printer;
use numwords::{convert, parse_integer, ErrorKind, LineError, ParseError};

#[test]
fn test_parse_then_convert() {
    let cases = [
        ("0", "Zero"),
        ("10", "Ten"),
        ("101", "One hundred and one"),
        ("-5367", "Negative five thousand three hundred and sixty seven"),
        ("1023434", "One million twenty three thousand four hundred and thirty four"),
        ("1000000000", "One billion"),
        ("  -0000000000000000000000110 ", "Negative one hundred and ten"),
    ];

    for (token, words) in cases {
        let value = parse_integer(token).unwrap();
        assert_eq!(convert(value), words, "token {:?}", token);
    }
}

#[test]
fn test_mixed_batch() {
    let tokens = vec![
        Some("0"),
        Some("10"),
        Some("15d"),
        Some("101"),
        Some("-5367"),
        Some("1023434"),
        Some("00004954365461578493"),
        Some("1000000000"),
    ];

    let lines = Printer::plain().lines(tokens);
    assert_eq!(
        lines,
        vec![
            "Zero",
            "Ten",
            "Error: Non-numeric character in input.",
            "One hundred and one",
            "Negative five thousand three hundred and sixty seven",
            "One million twenty three thousand four hundred and thirty four",
            "Error: Number can not be stored in a 32 bit integer.",
            "One billion",
        ]
    );
}

#[test]
fn test_error_kinds() {
    let missing = LineError::MissingInput;
    let invalid = LineError::from(parse_integer("0-0").unwrap_err());
    let overflow = LineError::from(parse_integer("-04378378768547675467540892423454375467336456").unwrap_err());

    assert_eq!(missing.kind(), ErrorKind::MissingInput);
    assert_eq!(invalid.kind(), ErrorKind::InvalidCharacter);
    assert_eq!(overflow.kind(), ErrorKind::RangeOverflow);
    assert_eq!(parse_integer("001at2343"), Err(ParseError::InvalidCharacter));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                (0..1000)
                    .map(|n| convert(n * 1000 + i))
                    .filter(|words| words.is_empty())
                    .count()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 0);
    }
}
