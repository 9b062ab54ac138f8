//! Arabic number word tables
//!
//! Cardinal words are in the masculine form used for counting.

/// Spelling of zero
pub const ZERO: &str = "صفر";

/// Prefix for negative numbers
pub const NEGATIVE: &str = "سالب";

/// Conjunction placed between segments
pub const CONJUNCTION: &str = "و";

/// 1 through 10
const ONES: [&str; 11] = [
    "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
];

/// 11 through 19
const TEENS: [&str; 9] = [
    "أحد عشر",
    "اثنا عشر",
    "ثلاثة عشر",
    "أربعة عشر",
    "خمسة عشر",
    "ستة عشر",
    "سبعة عشر",
    "ثمانية عشر",
    "تسعة عشر",
];

/// 20, 30, ... 90 (indices 0 and 1 are never used)
const TENS: [&str; 10] = [
    "", "", "عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];

/// 100, 200, ... 900
const HUNDREDS: [&str; 10] = [
    "", "مئة", "مئتان", "ثلاثمئة", "أربعمئة", "خمسمئة", "ستمئة", "سبعمئة", "ثمانمئة", "تسعمئة",
];

/// Noun naming one power of a thousand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleWord {
    /// Counted singular, also used alone for exactly one
    pub singular: &'static str,
    /// Standalone dual, when the language uses one for this scale
    pub dual: Option<&'static str>,
    /// Plural used after 3 through 10
    pub plural: &'static str,
}

/// Scale words, starting at a thousand (scale index 1)
pub const SCALES: [ScaleWord; 6] = [
    ScaleWord {
        singular: "ألف",
        dual: Some("ألفان"),
        plural: "آلاف",
    },
    ScaleWord {
        singular: "مليون",
        dual: None,
        plural: "ملايين",
    },
    ScaleWord {
        singular: "مليار",
        dual: None,
        plural: "مليارات",
    },
    ScaleWord {
        singular: "تريليون",
        dual: None,
        plural: "تريليونات",
    },
    ScaleWord {
        singular: "كوادريليون",
        dual: None,
        plural: "كوادريليونات",
    },
    ScaleWord {
        singular: "كوينتليون",
        dual: None,
        plural: "كوينتليونات",
    },
];

/// Scale word for a scale index (1 = thousand)
pub fn scale_word(scale: usize) -> Option<&'static ScaleWord> {
    scale.checked_sub(1).and_then(|i| SCALES.get(i))
}

/// How a counted scale word agrees with its count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    /// Exactly one: the singular noun alone ("ألف")
    Singular,
    /// Exactly two: the dual noun alone ("ألفان")
    Dual,
    /// Three to ten: numeral then plural noun ("ثلاثة آلاف")
    Plural,
    /// Eleven and up: numeral then singular noun ("أحد عشر ألف")
    Counted,
}

/// Agreement rule for a triad value
pub fn agreement(value: u16) -> Agreement {
    match value {
        1 => Agreement::Singular,
        2 => Agreement::Dual,
        3..=10 => Agreement::Plural,
        _ => Agreement::Counted,
    }
}

/// Words for a value in 1..=999, with conjunctions between segments
///
/// Units come before tens ("خمسة و عشرون"). Zero yields no words.
pub fn triad_words(value: u16) -> Vec<&'static str> {
    let mut words = Vec::with_capacity(5);
    let hundreds = usize::from(value / 100 % 10);
    let rest = usize::from(value % 100);

    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
        if rest > 0 {
            words.push(CONJUNCTION);
        }
    }

    match rest {
        0 => {}
        1..=10 => words.push(ONES[rest]),
        11..=19 => words.push(TEENS[rest - 11]),
        _ => {
            let ones = rest % 10;
            if ones > 0 {
                words.push(ONES[ones]);
                words.push(CONJUNCTION);
            }
            words.push(TENS[rest / 10]);
        }
    }

    words
}
