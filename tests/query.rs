use http_build_url::{build_query, merge_query, parse_query, QueryValue};

#[track_caller]
fn round_trips(input: &str, expected: &str) {
    assert_eq!(build_query(&parse_query(input)), expected);
}

#[test]
fn unbracketed_repeats_squash() {
    let map = parse_query("test=1&test=2");
    assert_eq!(map.len(), 1);
    assert_eq!(map["test"], QueryValue::Str("2".into()));

    // The squashed key keeps its original position.
    round_trips("a=1&b=2&a=3", "a=3&b=2");
}

#[test]
fn bracketed_repeats_accumulate() {
    let map = parse_query("test[]=1&test[]=2");
    assert_eq!(
        map["test"],
        QueryValue::List(vec!["1".into(), "2".into()]),
    );
    round_trips("test[]=1&test[]=2", "test%5B%5D=1&test%5B%5D=2");
}

#[test]
fn nested_maps() {
    let map = parse_query("a[2]=b&a[3]=c&d=e");
    let QueryValue::Map(a) = &map["a"] else {
        panic!("expected a map under `a`")
    };
    assert_eq!(a["2"], QueryValue::Str("b".into()));
    assert_eq!(a["3"], QueryValue::Str("c".into()));
    round_trips("a[2]=b&a[3]=c&d=e", "a%5B2%5D=b&a%5B3%5D=c&d=e");
}

#[test]
fn merge_is_overwrite_plus_add() {
    let mut base = parse_query("a[2]=b");
    merge_query(&mut base, parse_query("a[2]=1&b=c&a[3]=b"));
    assert_eq!(build_query(&base), "a%5B2%5D=1&a%5B3%5D=b&b=c");

    // Base subkeys absent from the replacement survive.
    let mut base = parse_query("a[x]=1&a[y]=2");
    merge_query(&mut base, parse_query("a[y]=3"));
    assert_eq!(build_query(&base), "a%5Bx%5D=1&a%5By%5D=3");
}

#[test]
fn keys_decode_before_bracket_interpretation() {
    assert_eq!(parse_query("a%5B2%5D=b"), parse_query("a[2]=b"));
}

#[test]
fn pairs_without_equals() {
    round_trips("flag", "flag=");
    round_trips("flag&x=1", "flag=&x=1");
}

#[test]
fn plus_is_a_literal_plus() {
    let map = parse_query("q=a+b");
    assert_eq!(map["q"], QueryValue::Str("a+b".into()));
    assert_eq!(build_query(&map), "q=a%2Bb");
}

#[test]
fn no_double_encoding_on_round_trip() {
    round_trips("q=%3Cwinter%3E", "q=%3Cwinter%3E");
    round_trips("q=50%25", "q=50%25");
    // Serializing twice is stable.
    let once = build_query(&parse_query("a[b]=c d&e=f+g"));
    assert_eq!(build_query(&parse_query(&once)), once);
}

#[test]
fn empty_input_is_empty() {
    assert!(parse_query("").is_empty());
    assert_eq!(build_query(&parse_query("&&")), "");
}
