use super::*;

#[test]
fn color_index_uses_first_char_code_mod_eight_plus_one() {
    // 'a' = 97, 97 % 8 = 1
    assert_eq!(color_index("apple"), 2);
    // 'h' = 104, 104 % 8 = 0
    assert_eq!(color_index("hill"), 1);
    // 'o' = 111, 111 % 8 = 7
    assert_eq!(color_index("owl"), 8);
}

#[test]
fn color_index_is_case_insensitive() {
    assert_eq!(color_index("Apple"), color_index("apple"));
    assert_eq!(color_index("OWL"), color_index("owl"));
}

#[test]
fn color_index_depends_only_on_first_char() {
    assert_eq!(color_index("cat"), color_index("cloud"));
}

#[test]
fn color_index_stays_in_range() {
    for word in ["", "z", "9lives", "éclair", "🐱cat", "tree"] {
        let idx = color_index(word);
        assert!((1..=WORD_COLOR_COUNT).contains(&idx), "{word:?} -> {idx}");
    }
}

#[test]
fn empty_word_maps_to_first_class() {
    assert_eq!(color_index(""), 1);
}

#[test]
fn token_class_for_drawn_and_blended_words() {
    assert_eq!(token_class("apple", false), "word-item word-color-2");
    assert_eq!(token_class("apple", true), "word-item badge-primary");
}
