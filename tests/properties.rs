//! Property-based tests for the lexer and evaluator.
//!
//! 1. **Lexer never panics** and always ends with exactly one `Eof`.
//! 2. **Sums and products** of non-negative literals match exact arithmetic,
//!    well past the 64-bit range.
//! 3. **Digit runs** of any length evaluate to the number they spell.
//! 4. **Whitespace** between tokens never changes the result.
//! 5. **Negation chains** flip the sign once per `-`.
//! 6. **Floor division identity** holds for every non-zero divisor.

use num_traits::{Signed, Zero};
use proptest::prelude::*;
use reckon::{BigInt, Options, evaluate, interpreter::lexer::Token, tokenize};

fn eval(src: &str) -> Result<BigInt, reckon::Error> {
    evaluate(src, &Options::default())
}

/// Renders an integer as source text, using prefix negation for negatives.
fn literal(n: i128) -> String {
    if n < 0 { format!("-{}", n.unsigned_abs()) } else { n.to_string() }
}

proptest! {
    #[test]
    fn lexer_is_total(input in ".{0,64}") {
        let tokens = tokenize(&input);
        let eofs = tokens.iter().filter(|(tok, _)| *tok == Token::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last(), Some(&(Token::Eof, input.len())));
    }

    #[test]
    fn evaluator_never_panics(input in "[0-9+*/%() -]{0,32}") {
        let _ = eval(&input);
    }

    #[test]
    fn addition_matches(a in 0..i128::MAX / 2, b in 0..i128::MAX / 2) {
        prop_assert_eq!(eval(&format!("{a} + {b}")).unwrap(), BigInt::from(a + b));
    }

    #[test]
    fn multiplication_matches(a in 0..i128::from(i64::MAX), b in 0..i128::from(i64::MAX)) {
        prop_assert_eq!(eval(&format!("{a} * {b}")).unwrap(), BigInt::from(a * b));
    }

    #[test]
    fn digit_runs_evaluate_to_their_value(digits in "[0-9]{1,80}") {
        let expected = BigInt::parse_bytes(digits.as_bytes(), 10).unwrap();
        prop_assert_eq!(eval(&digits).unwrap(), expected);
    }

    #[test]
    fn whitespace_is_insignificant(a in 0..1000_i64,
                                   b in 0..1000_i64,
                                   c in 1..1000_i64,
                                   pad in "[ \t\n]{0,3}") {
        let tight = format!("({a}+{b})*{c}+{a}%{c}");
        let loose = format!("{pad}({pad}{a}{pad}+{pad}{b}{pad}){pad}*{pad}{c}{pad}+{pad}{a}{pad}%{pad}{c}{pad}");
        prop_assert_eq!(eval(&tight).unwrap(), eval(&loose).unwrap());
    }

    #[test]
    fn negation_chain_parity(n in 0..i128::MAX, count in 0..40_usize) {
        let src = format!("{}{n}", "-".repeat(count));
        let expected = if count % 2 == 0 { n } else { -n };
        prop_assert_eq!(eval(&src).unwrap(), BigInt::from(expected));
    }

    #[test]
    fn floor_division_identity(a in -(1_i128 << 100)..(1_i128 << 100),
                               b in -(1_i128 << 70)..(1_i128 << 70)) {
        prop_assume!(b != 0);
        let quotient = eval(&format!("{}/{}", literal(a), literal(b))).unwrap();
        let remainder = eval(&format!("{}%{}", literal(a), literal(b))).unwrap();
        let divisor = BigInt::from(b);
        prop_assert_eq!(BigInt::from(a), &divisor * quotient + &remainder);
        prop_assert!(remainder.is_zero() || remainder.is_negative() == divisor.is_negative());
        prop_assert!(remainder.abs() < divisor.abs());
    }
}
