//! Digit chain addition validation tests
//!
//! The defining property: reading a chain least-significant-first as a
//! base-10 integer, the sum chain reads as the sum of the inputs. Both
//! adder variants must agree digit-for-digit wherever the recursive form
//! accepts the input.

use kata_classics::domain::digit_chain::{
    DigitChain, DigitChainError, add_digit_chains, add_digit_chains_recursive,
};
use rand::Rng;

#[test]
fn test_known_examples() {
    // 342 + 465 = 807
    let a = DigitChain::from_digits(&[2, 4, 3]).unwrap();
    let b = DigitChain::from_digits(&[5, 6, 4]).unwrap();
    assert_eq!(add_digit_chains(&a, &b).digits(), vec![7, 0, 8]);

    // 99 + 1 = 100
    let a = DigitChain::from_digits(&[9, 9]).unwrap();
    let b = DigitChain::from_digits(&[1]).unwrap();
    assert_eq!(add_digit_chains(&a, &b).digits(), vec![0, 0, 1]);
}

#[test]
fn test_numeric_value_property_randomized() {
    let mut rng = rand::thread_rng();

    for _ in 0..500 {
        let x: u64 = rng.r#gen();
        let y: u64 = rng.r#gen();

        let a = DigitChain::from_value(x);
        let b = DigitChain::from_value(y);
        let sum = add_digit_chains(&a, &b);

        assert_eq!(
            sum.value(),
            Some(x as u128 + y as u128),
            "wrong sum for {} + {}",
            x,
            y
        );
    }
}

#[test]
fn test_recursive_agrees_with_iterative_randomized() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let len_a = rng.gen_range(0..200);
        let len_b = rng.gen_range(0..200);
        let da: Vec<u8> = (0..len_a).map(|_| rng.gen_range(0..10)).collect();
        let db: Vec<u8> = (0..len_b).map(|_| rng.gen_range(0..10)).collect();

        let a = DigitChain::from_digits(&da).unwrap();
        let b = DigitChain::from_digits(&db).unwrap();

        let iterative = add_digit_chains(&a, &b);
        let recursive = add_digit_chains_recursive(&a, &b)
            .expect("inputs are far below the recursion limit");

        assert_eq!(iterative, recursive, "mismatch for {:?} + {:?}", da, db);
    }
}

#[test]
fn test_inputs_survive_addition() {
    let a = DigitChain::from_digits(&[9, 9, 9]).unwrap();
    let b = DigitChain::from_digits(&[7]).unwrap();

    let _sum = add_digit_chains(&a, &b);
    assert_eq!(a.digits(), vec![9, 9, 9]);
    assert_eq!(b.digits(), vec![7]);

    let _sum = add_digit_chains_recursive(&a, &b).unwrap();
    assert_eq!(a.digits(), vec![9, 9, 9]);
    assert_eq!(b.digits(), vec![7]);
}

#[test]
fn test_invalid_digit_rejected_at_boundary() {
    let result = DigitChain::from_digits(&[3, 7, 12]);
    assert!(matches!(
        result,
        Err(DigitChainError::InvalidDigit {
            digit: 12,
            position: 2
        })
    ));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = DigitChain::from_digits(&[10]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid digit 10"), "got {:?}", msg);
    assert!(msg.contains("position 0"), "got {:?}", msg);
}

#[test]
fn test_zero_conventions() {
    // Canonical zero is a single zero node, and addition preserves it
    let zero = DigitChain::from_value(0);
    assert_eq!(zero.digits(), vec![0]);

    let sum = add_digit_chains(&zero, &zero);
    assert_eq!(sum.digits(), vec![0]);

    let sum = add_digit_chains_recursive(&DigitChain::new(), &DigitChain::new()).unwrap();
    assert_eq!(sum.digits(), vec![0]);
}
