use descrambler::solver::{Descrambler, GeneratorType};
use descrambler::wordlists::WordBank;

fn descrambler() -> Descrambler<'static, GeneratorType> {
    Descrambler::new(GeneratorType::Positional, WordBank::embedded())
}

#[test]
fn cat_found_under_three() {
    let buckets = descrambler().descramble("cat");

    assert!(buckets.get(3).contains(&"cat".to_string()));
    assert!(buckets.get(3).contains(&"act".to_string()));
    for len in 4..=7 {
        assert!(buckets.get(len).is_empty());
    }
}

#[test]
fn act_same_as_cat() {
    let descrambler = descrambler();
    assert_eq!(descrambler.descramble("act"), descrambler.descramble("cat"));
}

#[test]
fn two_letters_find_nothing() {
    let buckets = descrambler().descramble("aa");

    assert!(buckets.is_empty());
    assert_eq!(buckets.lengths().count(), 5);
}

#[test]
fn tabs_spans_two_lengths() {
    let buckets = descrambler().descramble("tabs");

    assert!(buckets.get(3).contains(&"tab".to_string()));
    assert!(buckets.get(3).contains(&"bat".to_string()));
    assert!(buckets.get(4).contains(&"tabs".to_string()));
    assert!(buckets.get(4).contains(&"bats".to_string()));
}

#[test]
fn seven_letter_word_recovered_from_scramble() {
    let buckets = descrambler().descramble("lpmaexe");
    assert!(buckets.get(7).contains(&"example".to_string()));
}

#[test]
fn symbols_never_match() {
    let descrambler = descrambler();
    assert_eq!(descrambler.descramble("t.a-b"), descrambler.descramble("tab"));
}

#[test]
fn multiset_generator_agrees_on_longer_input() {
    let positional = descrambler();
    let multiset = Descrambler::new(GeneratorType::Multiset, WordBank::embedded());

    for input in ["planets", "letters", "seatbelt"] {
        assert_eq!(positional.descramble(input), multiset.descramble(input));
    }
}
