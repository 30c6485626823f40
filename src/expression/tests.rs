use crate::expression::{Expression, Operator, Rejection};
use crate::number::ExactNumber;

fn num(n: i64) -> Expression {
    Expression::Number(n)
}

fn bin(op: Operator, l: Expression, r: Expression) -> Expression {
    Expression::binary(op, l, r)
}

#[test]
fn test_add_and_mul_always_succeed() {
    let a = ExactNumber::from(-3);
    let b = ExactNumber::new(1, 2);
    assert_eq!(Operator::Add.apply(&a, &b), Ok(ExactNumber::new(-5, 2)));
    assert_eq!(Operator::Mul.apply(&a, &b), Ok(ExactNumber::new(-3, 2)));
}

#[test]
fn test_sub_rejects_negative_difference() {
    let three = ExactNumber::from(3);
    let five = ExactNumber::from(5);
    assert_eq!(
        Operator::Sub.apply(&three, &five),
        Err(Rejection::NegativeDifference)
    );
    assert_eq!(Operator::Sub.apply(&five, &three), Ok(ExactNumber::from(2)));
    assert_eq!(Operator::Sub.apply(&five, &five), Ok(ExactNumber::zero()));
}

#[test]
fn test_div_rejects_zero_divisor() {
    let seven = ExactNumber::from(7);
    assert_eq!(
        Operator::Div.apply(&seven, &ExactNumber::zero()),
        Err(Rejection::DivisionByZero)
    );
    assert_eq!(
        Operator::Div.apply(&ExactNumber::zero(), &seven),
        Ok(ExactNumber::zero())
    );
    assert_eq!(
        Operator::Div.apply(&seven, &ExactNumber::from(2)),
        Ok(ExactNumber::new(7, 2))
    );
}

#[test]
fn test_evaluate_uses_exact_fractions() {
    // 8 / (3 - 8 / 3)
    let expr = bin(
        Operator::Div,
        num(8),
        bin(Operator::Sub, num(3), bin(Operator::Div, num(8), num(3))),
    );
    assert_eq!(expr.evaluate(), Ok(ExactNumber::from(24)));
}

#[test]
fn test_evaluate_aborts_on_inner_rejection() {
    // (1 - 2) + 25 would be 24 without the domain restriction
    let expr = bin(Operator::Add, bin(Operator::Sub, num(1), num(2)), num(25));
    assert_eq!(expr.evaluate(), Err(Rejection::NegativeDifference));

    let expr = bin(Operator::Div, num(4), bin(Operator::Sub, num(2), num(2)));
    assert_eq!(expr.evaluate(), Err(Rejection::DivisionByZero));
}

#[test]
fn test_display_drops_redundant_parens() {
    let expr = bin(
        Operator::Mul,
        num(1),
        bin(Operator::Mul, num(2), bin(Operator::Mul, num(3), num(4))),
    );
    assert_eq!(expr.to_string(), "1 * 2 * 3 * 4");

    let expr = bin(
        Operator::Add,
        bin(Operator::Mul, num(2), num(3)),
        bin(Operator::Div, num(8), num(2)),
    );
    assert_eq!(expr.to_string(), "2 * 3 + 8 / 2");

    let expr = bin(Operator::Sub, bin(Operator::Sub, num(9), num(3)), num(2));
    assert_eq!(expr.to_string(), "9 - 3 - 2");
}

#[test]
fn test_display_brackets_weaker_left_operand() {
    let expr = bin(
        Operator::Mul,
        bin(Operator::Sub, num(5), bin(Operator::Div, num(1), num(5))),
        num(5),
    );
    assert_eq!(expr.to_string(), "(5 - 1 / 5) * 5");
}

#[test]
fn test_display_brackets_right_operand_of_sub_and_div() {
    let expr = bin(
        Operator::Div,
        num(8),
        bin(Operator::Sub, num(3), bin(Operator::Div, num(8), num(3))),
    );
    assert_eq!(expr.to_string(), "8 / (3 - 8 / 3)");

    let expr = bin(Operator::Sub, num(9), bin(Operator::Add, num(3), num(2)));
    assert_eq!(expr.to_string(), "9 - (3 + 2)");

    let expr = bin(Operator::Div, num(8), bin(Operator::Mul, num(2), num(2)));
    assert_eq!(expr.to_string(), "8 / (2 * 2)");

    let expr = bin(Operator::Add, num(9), bin(Operator::Sub, num(3), num(2)));
    assert_eq!(expr.to_string(), "9 + 3 - 2");
}

#[test]
fn test_display_pairs_only_bracket_internally() {
    let expr = bin(
        Operator::Mul,
        bin(Operator::Add, num(1), num(2)),
        bin(Operator::Add, num(3), num(5)),
    );
    assert_eq!(expr.to_string(), "(1 + 2) * (3 + 5)");

    let expr = bin(
        Operator::Add,
        bin(Operator::Mul, num(4), num(5)),
        bin(Operator::Div, num(8), num(2)),
    );
    assert_eq!(expr.to_string(), "4 * 5 + 8 / 2");
}

#[test]
fn test_display_negative_operands_without_decimal_point() {
    let expr = bin(Operator::Mul, num(-4), num(-6));
    assert_eq!(expr.to_string(), "-4 * -6");
}

#[test]
fn test_operands_in_leaf_order() {
    let expr = bin(
        Operator::Sub,
        num(1),
        bin(Operator::Div, bin(Operator::Add, num(2), num(3)), num(4)),
    );
    assert_eq!(expr.operands(), vec![1, 2, 3, 4]);
    assert_eq!(expr.operator(), Some(Operator::Sub));
    assert_eq!(num(7).operator(), None);
}
