//! Static bilingual synonym table for common words.
//!
//! Keyed by the exact lower-cased input word; no fuzzy lookup. The first
//! entry of each row is the word's primary translation and is skipped when
//! topping up suggestions, since the remote lookup already covers it.

use super::Language;

/// Alternative translations for `word`, excluding the primary one.
///
/// Returns an empty slice for unknown words or unsupported language pairs.
pub fn variants(word: &str, from: Language, to: Language) -> &'static [&'static str] {
    let row = match (from, to) {
        (Language::En, Language::Ru) => en_to_ru(word),
        (Language::Ru, Language::En) => ru_to_en(word),
        _ => None,
    };
    match row {
        Some(translations) if translations.len() > 1 => &translations[1..],
        _ => &[],
    }
}

fn en_to_ru(word: &str) -> Option<&'static [&'static str]> {
    let row: &[&str] = match word {
        "hello" => &["привет", "здравствуйте", "приветствие"],
        "good" => &["хороший", "добрый", "качественный"],
        "bad" => &["плохой", "дурной", "скверный"],
        "big" => &["большой", "крупный", "огромный"],
        "small" => &["маленький", "небольшой", "крошечный"],
        "beautiful" => &["красивый", "прекрасный", "великолепный"],
        "house" => &["дом", "жилище", "здание"],
        "car" => &["машина", "автомобиль", "авто"],
        "book" => &["книга", "учебник", "том"],
        "water" => &["вода", "жидкость"],
        "food" => &["еда", "пища", "питание"],
        "time" => &["время", "период", "момент"],
        "work" => &["работа", "труд", "деятельность"],
        "love" => &["любовь", "привязанность", "обожание"],
        "friend" => &["друг", "приятель", "товарищ"],
        "family" => &["семья", "родня", "близкие"],
        "money" => &["деньги", "средства", "финансы"],
        "school" => &["школа", "учебное заведение"],
        "teacher" => &["учитель", "преподаватель", "педагог"],
        "student" => &["студент", "ученик", "учащийся"],
        "cat" => &["кот", "кошка", "котенок"],
        "dog" => &["собака", "пес", "щенок"],
        "run" => &["бегать", "бежать", "мчаться"],
        "walk" => &["идти", "гулять", "ходить"],
        "eat" => &["есть", "кушать", "питаться"],
        "drink" => &["пить", "выпивать"],
        "sleep" => &["спать", "дремать", "почивать"],
        "read" => &["читать", "изучать"],
        "write" => &["писать", "записывать"],
        "speak" => &["говорить", "разговаривать"],
        _ => return None,
    };
    Some(row)
}

fn ru_to_en(word: &str) -> Option<&'static [&'static str]> {
    let row: &[&str] = match word {
        "привет" => &["hello", "hi", "greetings"],
        "хороший" => &["good", "nice", "fine"],
        "плохой" => &["bad", "poor", "awful"],
        "большой" => &["big", "large", "huge"],
        "маленький" => &["small", "little", "tiny"],
        "красивый" => &["beautiful", "pretty", "lovely"],
        "дом" => &["house", "home", "building"],
        "машина" => &["car", "auto", "vehicle"],
        "книга" => &["book", "volume"],
        "вода" => &["water", "liquid"],
        "еда" => &["food", "meal"],
        "время" => &["time", "period"],
        "работа" => &["work", "job", "labor"],
        "любовь" => &["love", "affection"],
        "друг" => &["friend", "buddy"],
        "семья" => &["family", "relatives"],
        "деньги" => &["money", "cash"],
        "школа" => &["school", "academy"],
        "учитель" => &["teacher", "instructor"],
        "студент" => &["student", "pupil"],
        _ => return None,
    };
    Some(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_variants_skip_the_primary_translation() {
        let hits = variants("hello", Language::En, Language::Ru);
        assert_eq!(hits, ["здравствуйте", "приветствие"]);
    }

    #[test]
    fn test_unknown_word_has_no_variants() {
        assert!(variants("zzz", Language::En, Language::Ru).is_empty());
        assert!(variants("hello", Language::Ru, Language::En).is_empty());
    }

    #[test]
    fn test_single_alternative_rows() {
        assert_eq!(variants("книга", Language::Ru, Language::En), ["volume"]);
    }

    #[test]
    fn test_lookup_is_exact_lower_case() {
        // callers lower-case before lookup; the table itself does not
        assert!(variants("Hello", Language::En, Language::Ru).is_empty());
    }
}
