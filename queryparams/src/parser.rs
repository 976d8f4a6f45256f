use alloc::vec::Vec;

use crate::{decode::decode, Pair, Pairs, Params};

/// Parses a query string into its decoded pairs.
///
/// Total over every input: a leading `?` is ignored, empty runs between
/// separators are skipped, and a run without `=` becomes a key with an
/// empty value.
pub fn parse<'a>(input: &'a str) -> Pairs<'a> {
    let input = input.strip_prefix('?').unwrap_or(input);

    let mut pairs = Vec::new();

    for run in input.split('&') {
        if run.is_empty() {
            continue;
        }

        let pair = match run.split_once('=') {
            Some((key, value)) => Pair::new(decode(key), decode(value)),
            None => Pair::new(decode(run), ""),
        };

        pairs.push(pair);
    }

    Pairs::new(pairs)
}

/// Parses `input` and folds each pair into `params` in scan order.
pub fn parse_into<P: Params>(input: &str, params: &mut P) {
    for pair in parse(input) {
        let (key, value) = pair.into_parts();
        params.set(key, value);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use alloc::{collections::BTreeMap, string::String, vec};

    #[test]
    fn test_parse() {
        assert_eq!(parse(""), vec![].into());
        assert_eq!(parse("?"), vec![].into());

        assert_eq!(parse("a=1"), vec![Pair::new("a", "1")].into());
        assert_eq!(parse("?a=1"), vec![Pair::new("a", "1")].into());
        assert_eq!(
            parse("a=1&b=2"),
            vec![Pair::new("a", "1"), Pair::new("b", "2")].into()
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(parse("flag"), vec![Pair::new("flag", "")].into());
        assert_eq!(
            parse("flag&b=2"),
            vec![Pair::new("flag", ""), Pair::new("b", "2")].into()
        );
        assert_eq!(parse("a="), vec![Pair::new("a", "")].into());
        assert_eq!(parse("=1"), vec![Pair::new("", "1")].into());
    }

    #[test]
    fn test_parse_empty_runs() {
        assert_eq!(parse("&&&key=value&&&"), vec![Pair::new("key", "value")].into());
        assert_eq!(parse("&"), vec![].into());
    }

    #[test]
    fn test_parse_decodes() {
        assert_eq!(
            parse("name=John%20Doe"),
            vec![Pair::new("name", "John Doe")].into()
        );
        assert_eq!(
            parse("name=John+Doe"),
            vec![Pair::new("name", "John Doe")].into()
        );
        assert_eq!(
            parse("q=a%3Db%26c"),
            vec![Pair::new("q", "a=b&c")].into()
        );
    }

    #[test]
    fn test_parse_keeps_extra_equals() {
        assert_eq!(
            parse("key=value=with=equals"),
            vec![Pair::new("key", "value=with=equals")].into()
        );
    }

    #[test]
    fn test_parse_duplicates_kept() {
        assert_eq!(
            parse("a=1&a=2"),
            vec![Pair::new("a", "1"), Pair::new("a", "2")].into()
        );
    }

    #[test]
    fn test_parse_into_last_wins() {
        let mut params = BTreeMap::default();
        parse_into("a=1&a=2&b=3", &mut params);
        assert_eq!(params.get("a"), Some(&String::from("2")));
        assert_eq!(params.get("b"), Some(&String::from("3")));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_into_unit() {
        parse_into("a=1&b=2", &mut ());
    }
}
