// common/mod.rs - Shared fixtures for the integration tests.

use smallvec::smallvec;
use ucdgen::prelude::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn enums() -> Enumerations {
    Enumerations::new(
        names(&[
            "Unknown",
            "Common",
            "Latin",
            "Greek",
            "Cyrillic",
            "Arabic",
            "Hiragana",
            "Katakana",
            "Han",
        ]),
        names(&[
            "Zzzz", "Zyyy", "Latn", "Grek", "Cyrl", "Arab", "Hira", "Kana", "Hani",
        ]),
        names(&[
            "Cn", "Lu", "Ll", "Nd", "Mn", "Lo", "So", "Zs", "Ps", "Pe", "Po",
        ]),
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

/// Full-domain input carrying the structures the tables must preserve:
/// cased ASCII letters, the Kelvin caseless triple, two decimal digit
/// ranges, a script-extension run, and the built-in boolean properties.
pub fn input(enums: &Enumerations) -> UcdInput {
    let mut input = UcdInput::new(enums).unwrap();
    input.merge_version("15.0.0", "Scripts.txt");
    input.merge_version("15.0.0", "CaseFolding.txt");

    let latin = enums.script_id("Latin").unwrap();
    let common = enums.script_id("Common").unwrap();
    let arabic = enums.script_id("Arabic").unwrap();
    let lu = enums.category_id("Lu").unwrap();
    let ll = enums.category_id("Ll").unwrap();
    let nd = enums.category_id("Nd").unwrap();
    let en = enums.bidi_id("EN").unwrap();
    let al = enums.bidi_id("AL").unwrap();
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
    // Arabic-Indic digits, right-to-left context.
    for c in 0x660..=0x669_usize {
        input.script[c] = arabic;
        input.category[c] = nd;
        input.bidi_class[c] = al;
    }

    // The Kelvin sign folds to k, forming the {K, k, kelvin} set.
    input.script[0x212a] = latin;
    input.category[0x212a] = lu;
    input.other_case[0x212a] = 0x6b - 0x212a;

    // Kana-shared punctuation with a two-script extension list.
    let hira = enums.script_abbrev_id("Hira").unwrap() as u16;
    let kana = enums.script_abbrev_id("Kana").unwrap() as u16;
    for c in 0x3031..=0x3035_usize {
        input.script_extensions[c] = smallvec![hira, kana];
    }

    input
        .apply_builtin_bool_props(enums, &[0x28, 0x29])
        .unwrap();

    input.digit_ranges.push(CategoryRange {
        first: 0x30,
        last: 0x39,
        category: nd,
    });
    input.digit_ranges.push(CategoryRange {
        first: 0x660,
        last: 0x669,
        category: nd,
    });

    input
}
