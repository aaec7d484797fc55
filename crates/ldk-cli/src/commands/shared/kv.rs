/// Parse a `key=value` argument. The value may itself contain `=`.
pub fn parse_kv(input: &str) -> anyhow::Result<(String, String)> {
    let Some((key, value)) = input.split_once('=') else {
        anyhow::bail!("expected key=value, got {input:?}");
    };
    if key.is_empty() {
        anyhow::bail!("expected key=value, got {input:?}");
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::parse_kv;

    #[rstest]
    #[case("source=mobile", "source", "mobile")]
    #[case("note=a=b", "note", "a=b")]
    #[case("flag=", "flag", "")]
    fn accepts_key_value(#[case] input: &str, #[case] key: &str, #[case] value: &str) {
        let (parsed_key, parsed_value) = parse_kv(input).expect("should parse");
        assert_eq!(parsed_key, key);
        assert_eq!(parsed_value, value);
    }

    #[rstest]
    #[case("no-separator")]
    #[case("=value")]
    #[case("")]
    fn rejects_malformed(#[case] input: &str) {
        assert!(parse_kv(input).is_err());
    }
}
