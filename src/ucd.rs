// ucd.rs - Codepoint domain, symbolic enumerations, and raw input model.
//
// The generator does not parse Unicode data files itself; a collaborator
// hands it dense per-codepoint arrays plus the ordered symbol lists. List
// order defines each symbol's integer id, so reordering a list changes the
// emitted tables. Compatibility-sensitive.

use log::warn;
use smallvec::SmallVec;

use crate::error::GenError;

/// One past the largest Unicode codepoint.
pub const MAX_UNICODE: u32 = 0x110000;

/// Sentinel larger than any valid codepoint, used to terminate the runs of
/// the caseless-set table.
pub const NOTACHAR: u32 = 0xffff_ffff;

/// Ordered script-id list attached to a single codepoint.
pub type ScriptList = SmallVec<[u16; 4]>;

/// Unordered boolean-property tag ids attached to a single codepoint.
pub type BoolPropList = SmallVec<[u16; 8]>;

/// A contiguous codepoint range carrying a general-category id, as supplied
/// by the source parser for decimal-digit detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRange {
    pub first: u32,
    pub last: u32,
    pub category: i32,
}

/// The fixed symbol lists supplied once at startup.
///
/// Each symbol's integer id is its index in its list. The bitmap word
/// counts are derived from the list lengths: one bit per possible id,
/// rounded up to whole 32-bit words.
#[derive(Debug, Clone)]
pub struct Enumerations {
    pub script_names: Vec<String>,
    pub script_abbrevs: Vec<String>,
    pub category_names: Vec<String>,
    pub break_properties: Vec<String>,
    pub bidi_classes: Vec<String>,
    pub bool_properties: Vec<String>,
    /// Words per script-extension bitmap entry.
    pub script_set_words: usize,
    /// Words per boolean-property bitmap entry.
    pub bool_set_words: usize,
}

fn index_of(list: &[String], kind: &'static str, name: &str) -> Result<i32, GenError> {
    list.iter()
        .position(|n| n == name)
        .map(|i| i as i32)
        .ok_or_else(|| GenError::UnknownName {
            kind,
            name: name.to_string(),
        })
}

impl Enumerations {
    pub fn new(
        script_names: Vec<String>,
        script_abbrevs: Vec<String>,
        category_names: Vec<String>,
        break_properties: Vec<String>,
        bidi_classes: Vec<String>,
        bool_properties: Vec<String>,
    ) -> Self {
        let script_set_words = script_names.len().div_ceil(32);
        let bool_set_words = bool_properties.len().div_ceil(32);
        Enumerations {
            script_names,
            script_abbrevs,
            category_names,
            break_properties,
            bidi_classes,
            bool_properties,
            script_set_words,
            bool_set_words,
        }
    }

    pub fn script_id(&self, name: &str) -> Result<i32, GenError> {
        index_of(&self.script_names, "script", name)
    }

    /// Script id by abbreviation, as used in script-extension lists.
    pub fn script_abbrev_id(&self, abbrev: &str) -> Result<i32, GenError> {
        index_of(&self.script_abbrevs, "script abbreviation", abbrev)
    }

    pub fn category_id(&self, name: &str) -> Result<i32, GenError> {
        index_of(&self.category_names, "category", name)
    }

    pub fn break_id(&self, name: &str) -> Result<i32, GenError> {
        index_of(&self.break_properties, "grapheme break property", name)
    }

    pub fn bidi_id(&self, name: &str) -> Result<i32, GenError> {
        index_of(&self.bidi_classes, "bidi class", name)
    }

    pub fn bool_prop_id(&self, name: &str) -> Result<i32, GenError> {
        index_of(&self.bool_properties, "boolean property", name)
    }
}

/// Dense per-codepoint raw property arrays, pre-filled with defaults.
///
/// Every array has one entry per codepoint in `[0, MAX_UNICODE)`. The
/// collaborator that parses the source files fills these in; unlisted
/// codepoints keep the defaults (script Unknown, category Cn, grapheme
/// break Other, bidi class L, no case delta, empty lists).
#[derive(Debug, Clone)]
pub struct UcdInput {
    pub script: Vec<i32>,
    pub category: Vec<i32>,
    pub break_prop: Vec<i32>,
    pub bidi_class: Vec<i32>,
    /// Signed delta to the codepoint's other case; 0 = none.
    pub other_case: Vec<i32>,
    pub script_extensions: Vec<ScriptList>,
    pub bool_props: Vec<BoolPropList>,
    /// Category-tagged ranges for the digit-run extractor.
    pub digit_ranges: Vec<CategoryRange>,
    /// Source data revision, adopted from the first source seen.
    pub version: Option<String>,
}

impl UcdInput {
    /// Allocate the full domain with default values.
    ///
    /// Fails when the enumerations do not declare the default symbols
    /// (`Unknown`, `Cn`, `Other`, `L`).
    pub fn new(enums: &Enumerations) -> Result<UcdInput, GenError> {
        let n = MAX_UNICODE as usize;
        Ok(UcdInput {
            script: vec![enums.script_id("Unknown")?; n],
            category: vec![enums.category_id("Cn")?; n],
            break_prop: vec![enums.break_id("Other")?; n],
            bidi_class: vec![enums.bidi_id("L")?; n],
            other_case: vec![0; n],
            script_extensions: vec![ScriptList::new(); n],
            bool_props: vec![BoolPropList::new(); n],
            digit_ranges: Vec::new(),
            version: None,
        })
    }

    /// Adopt a source file's version tag, warning when sources disagree.
    pub fn merge_version(&mut self, version: &str, source: &str) {
        match &self.version {
            None => self.version = Some(version.to_string()),
            Some(current) if current != version => {
                warn!(
                    "Unicode version differs in {}: {} (using {})",
                    source, version, current
                );
            }
            Some(_) => {}
        }
    }

    /// Add the two boolean properties that no source file lists directly:
    /// ASCII for every codepoint below 128, and Bidi_Mirrored for the
    /// supplied mirrored-character list.
    pub fn apply_builtin_bool_props(
        &mut self,
        enums: &Enumerations,
        mirrored: &[u32],
    ) -> Result<(), GenError> {
        let ascii = enums.bool_prop_id("ASCII")? as u16;
        for c in 0..128 {
            self.bool_props[c].push(ascii);
        }
        let bidi_mirrored = enums.bool_prop_id("Bidi_Mirrored")? as u16;
        for &c in mirrored {
            self.bool_props[c as usize].push(bidi_mirrored);
        }
        Ok(())
    }

    /// Overwrite the grapheme-break value of extended-pictographic ranges.
    ///
    /// The pictographic property arrives from a coordinated but separate
    /// standard, so it is applied as an override: any codepoint whose prior
    /// break class is not the default draws a data-consistency warning, and
    /// the override is applied regardless.
    pub fn apply_extended_pictographic(
        &mut self,
        enums: &Enumerations,
        ranges: &[(u32, u32)],
    ) -> Result<(), GenError> {
        let other = enums.break_id("Other")?;
        let pictographic = enums.break_id("Extended_Pictographic")?;
        for &(first, last) in ranges {
            for c in first..=last {
                let prior = self.break_prop[c as usize];
                if prior != other {
                    warn!(
                        "Emoji {:#06x} has break property {}, not 'Other'",
                        c, self.enum_name(&enums.break_properties, prior)
                    );
                }
                self.break_prop[c as usize] = pictographic;
            }
        }
        Ok(())
    }

    fn enum_name<'a>(&self, list: &'a [String], id: i32) -> &'a str {
        list.get(id as usize).map(String::as_str).unwrap_or("?")
    }
}
