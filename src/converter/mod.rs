//! `i32` to English words, short scale, British "and".
//!
//! Words are collected tail-first (units before tens, lower groups before
//! higher ones) and reversed once when the sentence is assembled.

const NEGATIVE: &str = "negative";
const AND: &str = "and";
const HUNDRED: &str = "hundred";

const UNDER_TWENTY: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// An i32 never goes past billions
const SCALES: [&str; 3] = ["thousand", "million", "billion"];

/// Convert an integer into an English sentence, e.g. `140` -> `"One hundred and forty"`.
pub fn convert(value: i32) -> String {
    let mut words: Vec<&'static str> = Vec::new();

    if value == 0 {
        words.push(UNDER_TWENTY[0]);
    } else {
        push_magnitude(&mut words, value.unsigned_abs());
        if value < 0 {
            words.push(NEGATIVE);
        }
    }

    assemble(words)
}

/// Push the words of a non-zero magnitude, lowest three-digit group first.
fn push_magnitude(words: &mut Vec<&'static str>, mut magnitude: u32) {
    let mut and_pending = push_group(words, magnitude % 1000, true);
    magnitude /= 1000;

    for scale in SCALES {
        if magnitude == 0 {
            break;
        }

        let group = magnitude % 1000;
        if group != 0 {
            // The tail is 1..=99 and nothing above it was non-zero until now
            if and_pending {
                words.push(AND);
                and_pending = false;
            }
            words.push(scale);
            push_group(words, group, false);
        }

        magnitude /= 1000;
    }
}

/// Push the words for a group in `0..=999`.
///
/// Returns true when the group's last two digits still need an "and" that
/// only a higher non-zero group can supply.
fn push_group(words: &mut Vec<&'static str>, group: u32, want_and: bool) -> bool {
    if group == 0 {
        return false;
    }

    let hundreds = (group / 100) as usize;
    let rest = (group % 100) as usize;
    let mut and_pending = want_and && rest != 0;

    if rest != 0 {
        push_tens(words, rest);
    }

    if hundreds > 0 {
        if and_pending {
            words.push(AND);
            and_pending = false;
        }
        words.push(HUNDRED);
        words.push(UNDER_TWENTY[hundreds]);
    }

    and_pending
}

fn push_tens(words: &mut Vec<&'static str>, rest: usize) {
    if rest < 20 {
        words.push(UNDER_TWENTY[rest]);
        return;
    }

    let units = rest % 10;
    if units != 0 {
        words.push(UNDER_TWENTY[units]);
    }
    words.push(TENS[rest / 10]);
}

fn assemble(words: Vec<&'static str>) -> String {
    let sentence = words.into_iter().rev().collect::<Vec<_>>().join(" ");

    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(convert(0), "Zero");
    }

    #[test]
    fn test_under_twenty() {
        let expected = [
            "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
            "Eighteen", "Nineteen", "Twenty",
        ];
        for (i, words) in (10..=20).zip(expected) {
            assert_eq!(convert(i), words);
        }
        assert_eq!(convert(9), "Nine");
    }

    #[test]
    fn test_tens() {
        assert_eq!(convert(60), "Sixty");
        assert_eq!(convert(78), "Seventy eight");
        assert_eq!(convert(99), "Ninety nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(convert(300), "Three hundred");
        assert_eq!(convert(322), "Three hundred and twenty two");
        assert_eq!(convert(140), "One hundred and forty");
        assert_eq!(convert(104), "One hundred and four");
        assert_eq!(convert(101), "One hundred and one");
    }

    #[test]
    fn test_and_crosses_scales() {
        assert_eq!(convert(1040), "One thousand and forty");
        assert_eq!(convert(34061), "Thirty four thousand and sixty one");
        assert_eq!(convert(340000045), "Three hundred forty million and forty five");
        assert_eq!(convert(1000000053), "One billion and fifty three");
    }

    #[test]
    fn test_and_placed_once() {
        assert_eq!(convert(1001001), "One million one thousand and one");
        assert_eq!(convert(2002000002), "Two billion two million and two");
    }

    #[test]
    fn test_no_and_on_round_tail() {
        assert_eq!(convert(134000), "One hundred thirty four thousand");
        assert_eq!(convert(194000000), "One hundred ninety four million");
        assert_eq!(convert(1000000000), "One billion");
        assert_eq!(convert(1100), "One thousand one hundred");
    }

    #[test]
    fn test_mixed_groups() {
        assert_eq!(
            convert(1023434),
            "One million twenty three thousand four hundred and thirty four"
        );
        assert_eq!(
            convert(491578493),
            "Four hundred ninety one million five hundred seventy eight thousand four hundred and ninety three"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(convert(-1), "Negative one");
        assert_eq!(convert(-10), "Negative ten");
        assert_eq!(
            convert(-5367),
            "Negative five thousand three hundred and sixty seven"
        );
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            convert(i32::MAX),
            "Two billion one hundred forty seven million four hundred eighty three thousand six hundred and forty seven"
        );
        assert_eq!(
            convert(i32::MIN),
            "Negative two billion one hundred forty seven million four hundred eighty three thousand six hundred and forty eight"
        );
    }
}
