//! Snapshot tests of decimal rendering for values far beyond native width.

use bigrat::{BigInt, BigRat};

#[test]
fn decimal_of_pow2_512() {
    let v = BigInt::ONE << 512;
    insta::assert_snapshot!(
        v.to_string(),
        @"13407807929942597099574024998205846127479365820592393377723561443721764030073546976801874298166903427690031858186486050853753882811946569946433649006084096"
    );
}

#[test]
fn decimal_of_factorial_50() {
    let mut v = BigInt::ONE;
    for i in 2..=50 {
        v = v * i;
    }
    insta::assert_snapshot!(
        v.to_string(),
        @"30414093201713378043612608166064768844377641568960512000000000000"
    );
}

#[test]
fn decimal_of_negative_pow3_200() {
    let three = BigInt::from_i64(3);
    let mut v = BigInt::ONE;
    for _ in 0..200 {
        v = v * &three;
    }
    insta::assert_snapshot!(
        (-v).to_string(),
        @"-265613988875874769338781322035779626829233452653394495974574961739092490901302182994384699044001"
    );
}

#[test]
fn decimal_roundtrip_of_wide_product() {
    let a: BigInt = "10000000000000000000000000000000000000007".parse().unwrap();
    let b: BigInt = "10000000000000000000000000000000000000009".parse().unwrap();
    insta::assert_snapshot!(
        (a * b).to_string(),
        @"100000000000000000000000000000000000000160000000000000000000000000000000000000063"
    );
}

#[test]
fn rational_rendering() {
    let q = BigRat::new(BigInt::ONE << 100, BigInt::from_i64(-6)).unwrap();
    insta::assert_snapshot!(q.to_string(), @"-633825300114114700748351602688/3");
}
