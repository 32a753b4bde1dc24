use http_build_url::encode_component;

#[track_caller]
fn idempotent(s: &str) {
    let once = encode_component(s);
    assert_eq!(encode_component(&once), once);
}

#[test]
fn unreserved_passes_through() {
    let s = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";
    assert_eq!(encode_component(s), s);
}

#[test]
fn reserved_data_is_encoded() {
    assert_eq!(encode_component("winter@example.com"), "winter%40example.com");
    assert_eq!(encode_component("a b"), "a%20b");
    assert_eq!(encode_component("a+b"), "a%2Bb");
    assert_eq!(encode_component("a/b"), "a%2Fb");
    assert_eq!(encode_component("k=v&w"), "k%3Dv%26w");
}

#[test]
fn existing_octets_are_preserved() {
    assert_eq!(encode_component("%3E"), "%3E");
    assert_eq!(encode_component("%3e"), "%3e");
    assert_eq!(encode_component("a%20b c"), "a%20b%20c");
    // A stray percent is not a valid octet.
    assert_eq!(encode_component("50%"), "50%25");
    assert_eq!(encode_component("50%zz"), "50%25zz");
}

#[test]
fn encoding_is_idempotent() {
    for s in [
        "",
        "plain",
        "%3E",
        "a b c",
        "100% juice",
        "winter@example.com",
        "%C2%BF",
        "caf\u{e9}",
    ] {
        idempotent(s);
    }
}

#[test]
fn multibyte_utf8_is_encoded_per_byte() {
    assert_eq!(encode_component("caf\u{e9}"), "caf%C3%A9");
    assert_eq!(encode_component("\u{5f20}"), "%E5%BC%A0");
}
