//! The expression grammar, case by case
//!
//! Each case pairs an input with the first values it produces. Together they document the
//! accepted syntax: the `:width` and `/repeat` forms sit alongside `#radix`, `:fill>width`,
//! `^repeat` and the `!` / `@` flags.

use rstest::rstest;
use seqgen_core::seq::expression::Kind;
use seqgen_core::{parse, Expression, NoMatch, Operator, Start};

fn first(expr: &Expression, n: u64) -> Vec<String> {
    (0..n).map(|i| expr.value_at(i)).collect()
}

#[rstest]
#[case::zero_padded_step("01+2", &["01", "03", "05"])]
#[case::letters_step("aa+2", &["aa", "ac", "ae"])]
#[case::explicit_fill("1+2:0>2", &["01", "03", "05"])]
#[case::width_only("7:3", &["007", "008", "009"])]
#[case::reorder_flag("2!", &["2", "3", "4"])]
#[case::letter_rollover("z", &["z", "aa", "ab"])]
#[case::subtract("10-3", &["10", "7", "4", "1", "-2"])]
#[case::hex("254#16", &["fe", "ff", "100"])]
#[case::binary_padded("0+1#2:4", &["0000", "0001", "0010", "0011"])]
#[case::repeat_slash("1/2", &["1", "1", "2", "2", "3"])]
#[case::repeat_caret("a^3", &["a", "a", "a", "b"])]
#[case::positive_sign("-1@", &["-1", "+0", "+1"])]
#[case::sign_and_pad("-1:3@", &["-001", "+000", "+001"])]
#[case::custom_fill("8:_>3", &["__8", "__9", "_10"])]
#[case::letter_fill("y:.>3", &["..y", "..z", ".aa"])]
#[case::uppercase_letters("AZ", &["AZ", "BA", "BB"])]
#[case::letters_backwards("c-1", &["c", "b", "a", ""])]
#[case::double_plus("5++", &["5", "6", "7"])]
#[case::double_plus_offset("5++2", &["7", "8", "9"])]
#[case::double_minus("5--", &["5", "4", "3"])]
#[case::alphabetic_marker("b+2a", &["b", "d", "f"])]
#[case::spaced(" 1 + 2 / 2 ! ", &["1", "1", "3", "3"])]
#[case::all_flags("3@!", &["+3", "+4"])]
fn test_sequences(#[case] input: &str, #[case] expected: &[&str]) {
    let expr = parse(input).unwrap_or_else(|e| panic!("{input:?} should parse: {e}"));
    assert_eq!(first(&expr, expected.len() as u64), expected);
}

#[rstest]
#[case::operator_only("++", NoMatch::Grammar)]
#[case::empty("", NoMatch::Grammar)]
#[case::dangling_colon("1:", NoMatch::Grammar)]
#[case::fill_without_width("1:0>", NoMatch::Grammar)]
#[case::two_fill_chars("1:ab>2", NoMatch::Grammar)]
#[case::mixed_start("1a2", NoMatch::Grammar)]
#[case::flags_before_repeat("1!/2", NoMatch::Grammar)]
#[case::zero_repeat("1/0", NoMatch::ZeroRepeat)]
#[case::zero_repeat_caret("a^0", NoMatch::ZeroRepeat)]
#[case::radix_on_letters("ab#16", NoMatch::RadixOnLetters)]
#[case::marker_on_number("3a", NoMatch::MarkerOnNumber)]
#[case::radix_too_small("1#1", NoMatch::RadixOutOfRange(1))]
#[case::radix_too_large("1#40", NoMatch::RadixOutOfRange(40))]
#[case::non_latin_letter("ß", NoMatch::LetterOutsideAlphabet('ß'))]
fn test_no_match(#[case] input: &str, #[case] reason: NoMatch) {
    assert_eq!(parse(input), Err(reason));
}

#[test]
fn test_first_example_fields() {
    let expr = parse("01+2").unwrap();
    assert_eq!(expr.kind(), Kind::Numeric);
    assert_eq!(expr.start, Start::Numeric(1));
    assert_eq!(expr.pad_width, 2);
    assert_eq!(expr.step, 2);
    assert_eq!(expr.operator, Operator::Add);
}

#[test]
fn test_letter_example_fields() {
    let expr = parse("aa+2").unwrap();
    assert_eq!(expr.kind(), Kind::Alphabetic);
    assert_eq!(expr.start, Start::Alphabetic("aa".to_string()));
    assert_eq!(expr.step, 2);
    assert_eq!(expr.pad_char, ' ');
}

#[test]
fn test_explicit_pad_fields() {
    let expr = parse("1+2:0>2").unwrap();
    assert_eq!(expr.pad_char, '0');
    assert_eq!(expr.pad_width, 2);
    assert_eq!(expr.value_at(1), "03");
}

#[test]
fn test_reorder_flag_does_not_change_values() {
    let flagged = parse("2!").unwrap();
    let plain = parse("2").unwrap();
    assert!(flagged.reorder);
    assert!(!plain.reorder);
    assert_eq!(first(&flagged, 6), first(&plain, 6));
}

#[test]
fn test_defaults() {
    let expr = parse("5").unwrap();
    assert_eq!(expr.operator, Operator::Add);
    assert_eq!(expr.step, 1);
    assert_eq!(expr.radix, 10);
    assert_eq!(expr.repeat.get(), 1);
    assert_eq!(expr.pad_char, '0');
    assert_eq!(expr.pad_width, 0);
    assert!(!expr.reorder);
    assert!(!expr.show_positive_sign);
}
