use super::*;

fn params(pairs: &[(&str, &str)]) -> Parameters {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parse_fmtp_config() {
    let tests = vec![
        ("Empty", "", params(&[])),
        ("OneParam", "minptime=10", params(&[("minptime", "10")])),
        (
            "OneParamWithWhiteSpaces",
            "\tminptime=10 ",
            params(&[("minptime", "10")]),
        ),
        (
            "TwoParams",
            "minptime=10;useinbandfec=1",
            params(&[("minptime", "10"), ("useinbandfec", "1")]),
        ),
        (
            "TwoParamsWithWhiteSpaces",
            "minptime=10;  \n\tuseinbandfec=1 ",
            params(&[("minptime", "10"), ("useinbandfec", "1")]),
        ),
        (
            "KeepsKeyCase",
            "x-google-Start-Bitrate=800",
            params(&[("x-google-Start-Bitrate", "800")]),
        ),
        (
            "ValueWithEquals",
            "sprop-parameter-sets=Z0IAH5WoFAFuQA==,aM48gA==",
            params(&[("sprop-parameter-sets", "Z0IAH5WoFAFuQA==,aM48gA==")]),
        ),
        ("FlagWithoutValue", "stereo", params(&[("stereo", "")])),
        (
            "TrailingSeparator",
            "apt=96;",
            params(&[("apt", "96")]),
        ),
    ];

    for (name, input, expected) in tests {
        let f = parse_fmtp_config(input);
        assert_eq!(
            expected, f,
            "{name} Expected Fmtp params: {expected:?}, got: {f:?}"
        );
    }
}

#[test]
fn test_closure_fmtp_config_parser() {
    let parser = |config: &str| params(&[("raw", config)]);
    assert_eq!(
        parser.parse_config("a=b"),
        params(&[("raw", "a=b")]),
    );
    assert_eq!(
        DefaultFmtpConfigParser.parse_config("apt=100"),
        params(&[("apt", "100")]),
    );
}
