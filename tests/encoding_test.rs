use wikitext_clean::clean_bytes;

#[test]
fn utf8_content_handled_correctly() {
    let bytes = "'''東京''' ({{lang-ja|Tōkyō}}) é ñ ü".as_bytes();
    assert_eq!(clean_bytes(bytes), "東京 (Tōkyō) é ñ ü");
}

#[test]
fn utf8_bom_is_dropped() {
    assert_eq!(clean_bytes(b"\xEF\xBB\xBF==Title=="), "Title");
}

#[test]
fn xml_declared_latin1_is_transcoded() {
    let bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>''Caf\xE9''";
    assert!(clean_bytes(bytes).ends_with("Café"));
}

#[test]
fn invalid_utf8_is_replaced_not_rejected() {
    let cleaned = clean_bytes(b"''ok'' \xFF\xFE done");
    assert!(cleaned.starts_with("ok "));
    assert!(cleaned.ends_with(" done"));
}
