use crate::error::BuildError;
use crate::local::LocalHost;
use crate::result::{build_result, ResultClass, ResultFields};

#[test]
fn raw_only_without_encoded_buffer() {
    let mut host = LocalHost::new();
    let result = build_result(&mut host, &[1, 2, 3], None).unwrap();

    assert_eq!(result.as_bytes(), &[1, 2, 3]);
    assert_eq!(result.encoded(), None);
}

#[test]
fn encoded_text_stops_at_first_nul() {
    let mut host = LocalHost::new();
    let buf = b"$argon2i$v=19$rest\0\0garbage\0";
    let result = build_result(&mut host, &[9; 4], Some(buf)).unwrap();

    assert_eq!(result.encoded(), Some("$argon2i$v=19$rest"));
}

#[test]
fn empty_text_still_selects_encoded_shape() {
    let mut host = LocalHost::new();
    let result = build_result(&mut host, &[9; 4], Some(&[0, 0, 0])).unwrap();
    assert_eq!(result.encoded(), Some(""));
}

#[test]
fn unterminated_or_non_text_buffer_fails_to_wrap() {
    let mut host = LocalHost::new();
    assert_eq!(build_result(&mut host, &[0; 4], Some(b"no terminator")), Err(BuildError::WrapEncoded));
    assert_eq!(build_result(&mut host, &[0; 4], Some(&[0xFF, 0xFE, 0])), Err(BuildError::WrapEncoded));
}

#[test]
fn fields_pick_their_class() {
    assert_eq!(ResultFields::<(), ()>::Raw(()).class(), ResultClass::Raw);
    assert_eq!(ResultFields::Encoded((), ()).class(), ResultClass::Encoded);
}
