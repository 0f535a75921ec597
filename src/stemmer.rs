//! Russian Snowball stemmer.
//!
//! Suffix-stripping scheme after http://snowball.tartarus.org/algorithms/russian/stemmer.html
//! All rules operate on the RV region: the part of the word after its first
//! vowel. Letters before RV are never examined, so for example
//! "противоестественном" splits as "про" + "тивоестественном" and only the
//! tail is ever shortened.
//!
//! Suffix classes are explicit candidate tables matched from the end of RV.
//! Within a class the longest valid candidate wins. Some short candidates
//! are valid only when the letter immediately before them is а or я; that
//! gating letter stays in place.

const VOWELS: &[char] = &['а', 'е', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

// Step 1 classes, in priority order.
const PERFECTIVE_GERUND: &[&str] = &["ившись", "ывшись", "ивши", "ывши", "ив", "ыв"];
const PERFECTIVE_GERUND_GATED: &[&str] = &["вшись", "вши", "в"];

const REFLEXIVE: &[&str] = &["ся", "сь"];

const ADJECTIVAL: &[&str] = &[
    "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом", "его",
    "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];

const PARTICIPLE: &[&str] = &["ивш", "ывш", "ующ"];
const PARTICIPLE_GATED: &[&str] = &["ем", "нн", "вш", "ющ", "щ"];

const VERB: &[&str] = &[
    "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл", "им", "ым",
    "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены", "ить", "ыть", "ишь", "ую",
    "ю",
];
const VERB_GATED: &[&str] = &[
    "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны", "ть",
    "ешь", "нно",
];

const NOUN: &[&str] = &[
    "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей", "ой",
    "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы", "ь", "ию",
    "ью", "ю", "ия", "ья", "я",
];

const SUPERLATIVE: &[&str] = &["ейше", "ейш"];

/// Stem a single Russian word.
///
/// Returns `None` for input that is not a Russian token: empty or blank
/// strings, or anything containing a non-Cyrillic character ("abc", "123",
/// "абвabc"). Valid input is lowercased and ё is folded to е before
/// stemming, so `stem("ВАГОНА")` and `stem("вагона")` agree. A word with no
/// vowel ("в") is returned as is.
///
/// The result is a search key, not a dictionary form.
pub fn stem(word: &str) -> Option<String> {
    let word = normalize(word)?;

    let rv_start = match rv_start(&word) {
        Some(i) => i,
        // consonant-only word, nothing to strip
        None => return Some(word),
    };

    let mut rv = word[rv_start..].to_string();
    step1(&mut rv);
    step2(&mut rv);
    step3(&mut rv);
    step4(&mut rv);

    let mut stem = word;
    stem.truncate(rv_start);
    stem.push_str(&rv);
    Some(stem)
}

/// Lowercase, fold ё to е and reject anything that is not a Russian token.
fn normalize(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        for lower in c.to_lowercase() {
            let lower = if lower == 'ё' { 'е' } else { lower };
            if !('а'..='я').contains(&lower) {
                return None;
            }
            out.push(lower);
        }
    }
    Some(out)
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Byte offset where the RV region begins: just past the first vowel.
fn rv_start(word: &str) -> Option<usize> {
    word.char_indices()
        .find(|&(_, c)| is_vowel(c))
        .map(|(i, c)| i + c.len_utf8())
}

/// Remove the longest suffix of `rv` found in `plain` or `gated`.
///
/// Gated candidates only count when the character right before the suffix
/// is а or я; the gating character itself is kept. Returns whether anything
/// was removed.
fn strip_longest(rv: &mut String, plain: &[&str], gated: &[&str]) -> bool {
    let mut best = 0;
    for suffix in plain {
        if suffix.len() > best && rv.ends_with(suffix) {
            best = suffix.len();
        }
    }
    for suffix in gated {
        if suffix.len() > best && rv.ends_with(suffix) {
            let head = &rv[..rv.len() - suffix.len()];
            if head.ends_with('а') || head.ends_with('я') {
                best = suffix.len();
            }
        }
    }

    if best == 0 {
        return false;
    }
    let keep = rv.len() - best;
    rv.truncate(keep);
    true
}

/// Step 1: a perfective gerund ending wins outright. Otherwise drop a
/// reflexive ending if present, then try adjectival (followed by a
/// participle sub-strip), verb and noun endings in that order, stopping at
/// the first class that matches.
fn step1(rv: &mut String) {
    if strip_longest(rv, PERFECTIVE_GERUND, PERFECTIVE_GERUND_GATED) {
        return;
    }

    strip_longest(rv, REFLEXIVE, &[]);

    if strip_longest(rv, ADJECTIVAL, &[]) {
        strip_longest(rv, PARTICIPLE, PARTICIPLE_GATED);
        return;
    }
    if strip_longest(rv, VERB, VERB_GATED) {
        return;
    }
    strip_longest(rv, NOUN, &[]);
}

/// Step 2: drop a trailing и.
fn step2(rv: &mut String) {
    if rv.ends_with('и') {
        let keep = rv.len() - 'и'.len_utf8();
        rv.truncate(keep);
    }
}

/// Step 3: drop a derivational ость/ост ending, but only when it lies in
/// R2, i.e. the part of RV before the ending contains a consonant
/// immediately followed by a vowel. The whole-ending-in-R2 rule keeps short
/// stems like "важност" intact.
fn step3(rv: &mut String) {
    let suffix = if rv.ends_with("ость") {
        "ость"
    } else if rv.ends_with("ост") {
        "ост"
    } else {
        return;
    };

    let head = rv.len() - suffix.len();
    if has_vowel_after_consonant(&rv[..head]) {
        rv.truncate(head);
    }
}

fn has_vowel_after_consonant(s: &str) -> bool {
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if let Some(p) = prev {
            if !is_vowel(p) && is_vowel(c) {
                return true;
            }
        }
        prev = Some(c);
    }
    false
}

/// Step 4: a trailing soft sign is dropped and ends the step; otherwise a
/// superlative ending is dropped and a trailing нн collapses to н (the
/// collapse also applies on its own).
fn step4(rv: &mut String) {
    if rv.ends_with('ь') {
        let keep = rv.len() - 'ь'.len_utf8();
        rv.truncate(keep);
        return;
    }

    strip_longest(rv, SUPERLATIVE, &[]);
    if rv.ends_with("нн") {
        let keep = rv.len() - 'н'.len_utf8();
        rv.truncate(keep);
    }
}
