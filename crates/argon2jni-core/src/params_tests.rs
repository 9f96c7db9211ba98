use std::num::NonZeroUsize;

use crate::identity::VERSION_13_ID;
use crate::params::*;

fn args(encoded_len: i32) -> HashArgs<'static, [u8]> {
    HashArgs {
        t_cost: 3,
        m_cost: 4096,
        parallelism: 2,
        password: b"pw",
        salt: b"saltsalt",
        hash_len: 16,
        encoded_len,
        variant_id: 1,
        version_id: 0x13,
    }
}

#[test]
fn valid_scalars_convert() {
    let p = HashParams::validate(&args(90), Some(2), Some(8)).unwrap();
    assert_eq!(p.costs, SecurityParameters::new(3, 4096, 2));
    assert_eq!(p.hash_len, 16);
    assert_eq!(p.encoded_len, NonZeroUsize::new(90));
}

#[test]
fn zero_encoded_len_means_no_encoded_form() {
    let p = HashParams::validate(&args(0), Some(2), Some(8)).unwrap();
    assert_eq!(p.encoded_len, None);
}

#[test]
fn unreadable_lengths_count_as_empty() {
    assert!(HashParams::validate(&args(0), None, Some(8)).is_err());
    assert!(HashParams::validate(&args(0), Some(2), None).is_err());
    assert!(HashParams::validate(&args(0), Some(0), Some(8)).is_err());
}

#[test]
fn largest_positive_values_are_accepted() {
    let mut a = args(i32::MAX);
    a.t_cost = i32::MAX;
    a.m_cost = i32::MAX;
    a.hash_len = i32::MAX;
    let p = HashParams::validate(&a, Some(1), Some(1)).unwrap();
    assert_eq!(p.costs.m_cost, i32::MAX as u32);
    assert_eq!(p.encoded_len.map(NonZeroUsize::get), Some(i32::MAX as usize));
}

#[test]
fn recommended_len_follows_managed_formula() {
    // 25 + "19" + "4096" + "3" + "1" + b64(16) + b64(16)
    let len = recommended_encoded_len(&SecurityParameters::OFFICIAL_DEFAULT, 16, VERSION_13_ID, 16);
    assert_eq!(len, 25 + 2 + 4 + 1 + 1 + 24 + 24);

    // 25 + "19" + "65536" + "2" + "1" + b64(8) + b64(32)
    let params = SecurityParameters::new(2, 65536, 1);
    assert_eq!(recommended_encoded_len(&params, 32, VERSION_13_ID, 8), 25 + 2 + 5 + 1 + 1 + 12 + 44);
}

#[test]
fn recommended_len_fits_the_actual_encoding() {
    // "$argon2id$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$" + 43 chars of hash
    let actual = "$argon2id$v=19$m=65536,t=2,p=1$c29tZXNhbHQ$CTFhFdXPJO1aFaMaO6Mm5c8y7cJHAph8ArZWb2GRPPc";
    let params = SecurityParameters::new(2, 65536, 1);
    assert!(recommended_encoded_len(&params, 32, VERSION_13_ID, 8) > actual.len());
}
