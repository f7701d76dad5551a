use crate::text::mapping::{CharacterMap, LAYOUT_PAIRS};

#[test]
fn standard_table_sizes() {
    let map = CharacterMap::standard();

    assert_eq!(LAYOUT_PAIRS.len(), 80);
    assert_eq!(map.len_forward(), 80);
    // '/' and '?' share '.' on the Cyrillic side
    assert_eq!(map.len_reverse(), 79);
}

#[test]
fn forward_keys_are_unique() {
    let mut keys: Vec<char> = LAYOUT_PAIRS.iter().map(|&(latin, _)| latin).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), LAYOUT_PAIRS.len());
}

#[test]
fn every_key_and_value_is_one_char() {
    for (latin, cyrillic) in CharacterMap::standard().pairs() {
        assert_eq!(latin.to_string().chars().count(), 1);
        assert_eq!(cyrillic.to_string().chars().count(), 1);
    }
}

#[test]
fn pairs_keep_declaration_order() {
    let pairs: Vec<_> = CharacterMap::standard().pairs().collect();
    assert_eq!(pairs.as_slice(), LAYOUT_PAIRS);
}

#[test]
fn letters_map_by_physical_position() {
    let map = CharacterMap::standard();

    assert_eq!(map.lookup_forward('q'), Some('й'));
    assert_eq!(map.lookup_forward('a'), Some('ф'));
    assert_eq!(map.lookup_forward('b'), Some('и'));
    assert_eq!(map.lookup_forward('c'), Some('с'));
    assert_eq!(map.lookup_forward('s'), Some('і'));
    assert_eq!(map.lookup_forward(']'), Some('ї'));
    assert_eq!(map.lookup_forward('\''), Some('є'));

    assert_eq!(map.lookup_forward('A'), Some('Ф'));
    assert_eq!(map.lookup_forward('B'), Some('И'));
    assert_eq!(map.lookup_forward('C'), Some('С'));
    assert_eq!(map.lookup_forward('}'), Some('Ї'));
}

#[test]
fn digit_row_symbols() {
    let map = CharacterMap::standard();

    assert_eq!(map.lookup_forward('`'), Some('ґ'));
    assert_eq!(map.lookup_forward('~'), Some('Ґ'));
    assert_eq!(map.lookup_forward('@'), Some('"'));
    assert_eq!(map.lookup_forward('#'), Some('№'));
    assert_eq!(map.lookup_forward('&'), Some('?'));

    for same in ['!', '%', '*', '(', ')', '\\', '|'] {
        assert_eq!(map.lookup_forward(same), Some(same));
        assert_eq!(map.lookup_reverse(same), Some(same));
    }
}

#[test]
fn reverse_inverts_letters() {
    let map = CharacterMap::standard();

    assert_eq!(map.lookup_reverse('ф'), Some('a'));
    assert_eq!(map.lookup_reverse('и'), Some('b'));
    assert_eq!(map.lookup_reverse('с'), Some('c'));
    assert_eq!(map.lookup_reverse('Ф'), Some('A'));
    assert_eq!(map.lookup_reverse('И'), Some('B'));
    assert_eq!(map.lookup_reverse('С'), Some('C'));
}

#[test]
fn reverse_collision_keeps_last_declared_pair() {
    let map = CharacterMap::standard();

    assert_eq!(map.lookup_forward('/'), Some('.'));
    assert_eq!(map.lookup_forward('?'), Some('.'));
    assert_eq!(map.lookup_reverse('.'), Some('?'));
}

#[test]
fn reverse_is_exact_for_all_but_one_pair() {
    let map = CharacterMap::standard();

    let lossy: Vec<char> = map
        .pairs()
        .filter(|&(latin, cyrillic)| map.lookup_reverse(cyrillic) != Some(latin))
        .map(|(latin, _)| latin)
        .collect();

    assert_eq!(lossy, vec!['/']);
}

#[test]
fn lookups_are_pure() {
    let map = CharacterMap::standard();

    for _ in 0..3 {
        assert_eq!(map.lookup_forward('z'), Some('я'));
        assert_eq!(map.lookup_reverse('я'), Some('z'));
        assert_eq!(map.lookup_forward('7'), None);
        assert_eq!(map.lookup_reverse('7'), None);
    }
}

#[test]
fn absent_chars_have_no_entry() {
    let map = CharacterMap::standard();

    for ch in ['0', '9', ' ', '\n', '\t', 'é', 'ы', 'ё', '-', '='] {
        assert_eq!(map.lookup_forward(ch), None, "{ch:?}");
        assert_eq!(map.lookup_reverse(ch), None, "{ch:?}");
    }
}

#[test]
fn standard_is_built_once() {
    let a = CharacterMap::standard();
    let b = CharacterMap::standard();
    assert!(std::ptr::eq(a, b));
}

#[test]
fn custom_pairs_collision_last_wins() {
    let map = CharacterMap::from_pairs(&[('a', 'x'), ('b', 'x'), ('c', 'y')]);

    assert_eq!(map.len_forward(), 3);
    assert_eq!(map.len_reverse(), 2);
    assert_eq!(map.lookup_reverse('x'), Some('b'));
    assert_eq!(map.lookup_reverse('y'), Some('c'));
}

#[test]
fn custom_pairs_repeated_key_takes_later_value() {
    let map = CharacterMap::from_pairs(&[('a', 'x'), ('b', 'z'), ('a', 'y')]);

    assert_eq!(map.lookup_forward('a'), Some('y'));
    assert_eq!(map.pairs().collect::<Vec<_>>(), vec![('a', 'y'), ('b', 'z')]);
    assert_eq!(map.lookup_reverse('x'), None);
    assert_eq!(map.lookup_reverse('y'), Some('a'));
}

#[test]
fn empty_map_has_no_entries() {
    let map = CharacterMap::from_pairs(&[]);

    assert_eq!(map.len_forward(), 0);
    assert_eq!(map.len_reverse(), 0);
    assert_eq!(map.pairs().count(), 0);
}
