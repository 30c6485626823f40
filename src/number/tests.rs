use crate::number::ExactNumber;

#[test]
fn test_integer_construction_is_exact() {
    let n = ExactNumber::from(24);
    assert!(n.is_integer());
    assert_eq!(n.to_string(), "24");
}

#[test]
fn test_fractions_are_reduced() {
    let n = ExactNumber::new(6, 8);
    assert_eq!(n, ExactNumber::new(3, 4));
    assert_eq!(n.to_string(), "3/4");
    assert_eq!(n.numer(), &num_bigint::BigInt::from(3));
    assert_eq!(n.denom(), &num_bigint::BigInt::from(4));
    assert!(!n.is_integer());
}

#[test]
fn test_negative_denominator_is_normalized() {
    let n = ExactNumber::new(1, -3);
    assert_eq!(n, ExactNumber::new(-1, 3));
    assert_eq!(n.to_string(), "-1/3");
    assert!(n.denom() > &num_bigint::BigInt::from(0));
}

#[test]
#[should_panic]
fn test_zero_denominator_fails_fast() {
    let _ = ExactNumber::new(1, 0);
}

#[test]
fn test_arithmetic_stays_exact() {
    let third = ExactNumber::new(1, 3);
    let sum = &(&third + &third) + &third;
    assert_eq!(sum, ExactNumber::from(1));

    let eight = ExactNumber::from(8);
    let three = ExactNumber::from(3);
    let inner = &three - &eight.checked_div(&three).unwrap_or_else(ExactNumber::zero);
    assert_eq!(inner, ExactNumber::new(1, 3));
    assert_eq!(eight.checked_div(&inner), Some(ExactNumber::from(24)));
}

#[test]
fn test_checked_div_by_zero() {
    let five = ExactNumber::from(5);
    assert_eq!(five.checked_div(&ExactNumber::zero()), None);
    assert_eq!(
        ExactNumber::from(1).checked_div(&five),
        Some(ExactNumber::new(1, 5))
    );
}

#[test]
fn test_ordering_is_exact() {
    assert!(ExactNumber::new(1, 3) < ExactNumber::new(334, 1000));
    assert!(ExactNumber::new(2, 6) >= ExactNumber::new(1, 3));
    assert!(ExactNumber::from(-7) < ExactNumber::zero());
}

#[test]
fn test_large_magnitudes_do_not_overflow() {
    let big = ExactNumber::from(i64::MAX);
    let product = &big * &big;
    assert_eq!(product.checked_div(&big), Some(big.clone()));
    assert_eq!(&product - &product, ExactNumber::zero());
}
