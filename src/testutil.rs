// testutil.rs - Shared fixtures for unit tests.

use smallvec::smallvec;

use crate::ucd::{CategoryRange, Enumerations, UcdInput};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A reduced but realistically-shaped set of enumerations.
pub fn test_enums() -> Enumerations {
    Enumerations::new(
        names(&[
            "Unknown",
            "Common",
            "Latin",
            "Greek",
            "Cyrillic",
            "Arabic",
            "Hiragana",
        ]),
        names(&["Zzzz", "Zyyy", "Latn", "Grek", "Cyrl", "Arab", "Hira"]),
        names(&["Cn", "Lu", "Ll", "Nd", "Mn", "Lo", "So", "Zs", "Ps", "Pe"]),
        names(&[
            "Other",
            "Extend",
            "Extended_Pictographic",
            "Regional_Indicator",
            "Control",
        ]),
        names(&["L", "R", "AL", "EN", "NSM", "ON"]),
        names(&[
            "ASCII",
            "Bidi_Mirrored",
            "Alphabetic",
            "White_Space",
            "Math",
            "Dash",
        ]),
    )
}

/// A full-domain input with a small amount of realistic structure: cased
/// ASCII letters, the Kelvin caseless triple, decimal digits, a script
/// extension run, and the built-in boolean properties.
pub fn small_input(enums: &Enumerations) -> UcdInput {
    let mut input = UcdInput::new(enums).unwrap();
    input.merge_version("15.0.0", "Scripts.txt");

    let latin = enums.script_id("Latin").unwrap();
    let common = enums.script_id("Common").unwrap();
    let lu = enums.category_id("Lu").unwrap();
    let ll = enums.category_id("Ll").unwrap();
    let nd = enums.category_id("Nd").unwrap();
    let en = enums.bidi_id("EN").unwrap();
    let alphabetic = enums.bool_prop_id("Alphabetic").unwrap() as u16;

    for c in 0x41..=0x5a_usize {
        input.script[c] = latin;
        input.category[c] = lu;
        input.other_case[c] = 0x20;
        input.bool_props[c].push(alphabetic);
    }
    for c in 0x61..=0x7a_usize {
        input.script[c] = latin;
        input.category[c] = ll;
        input.bool_props[c].push(alphabetic);
    }
    for c in 0x30..=0x39_usize {
        input.script[c] = common;
        input.category[c] = nd;
        input.bidi_class[c] = en;
    }

    // The Kelvin sign folds to k, making {K, k, kelvin} a caseless set.
    input.script[0x212a] = latin;
    input.category[0x212a] = lu;
    input.other_case[0x212a] = 0x6b - 0x212a;

    // A contiguous script-extension run.
    let hira = enums.script_abbrev_id("Hira").unwrap() as u16;
    let zyyy = enums.script_abbrev_id("Zyyy").unwrap() as u16;
    for c in 0x3031..=0x3035_usize {
        input.script_extensions[c] = smallvec![zyyy, hira];
    }

    input.apply_builtin_bool_props(enums, &[0x28, 0x29]).unwrap();

    input.digit_ranges.push(CategoryRange {
        first: 0x30,
        last: 0x39,
        category: nd,
    });

    input
}
