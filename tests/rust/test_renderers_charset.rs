use super::*;

#[test]
fn test_charset_default_is_unicode() {
    assert_eq!(CharSet::default(), CharSet::Unicode);
}

#[test]
fn test_box_chars_sets() {
    let u = BoxChars::for_charset(CharSet::Unicode);
    assert_eq!(u.top_left, '┌');
    assert_eq!(u.hour_rule, '┄');
    let a = BoxChars::for_charset(CharSet::Ascii);
    assert_eq!(a.top_left, '+');
    assert_eq!(a.vertical, '|');
    assert_eq!(a.hour_rule, '.');
}

#[test]
fn test_card_corners_rounded_in_unicode() {
    let u = BoxChars::card(CharSet::Unicode);
    assert_eq!(
        (u.top_left, u.top_right, u.bottom_left, u.bottom_right),
        ('╭', '╮', '╰', '╯')
    );
    assert_eq!(u.horizontal, '─');
    let a = BoxChars::card(CharSet::Ascii);
    assert_eq!(a.top_left, '+');
}

#[test]
fn test_arms_merge_to_cross() {
    let merged = Arms::HORIZONTAL.merge(Arms::VERTICAL);
    assert_eq!(merged.to_char(CharSet::Unicode), '┼');
    assert_eq!(merged.to_char(CharSet::Ascii), '+');
}

#[test]
fn test_arms_tees() {
    assert_eq!(Arms::new(false, true, true, true).to_char(CharSet::Unicode), '┬');
    assert_eq!(Arms::new(true, false, true, true).to_char(CharSet::Unicode), '┴');
    assert_eq!(Arms::new(true, true, false, true).to_char(CharSet::Unicode), '├');
    assert_eq!(Arms::new(true, true, true, false).to_char(CharSet::Unicode), '┤');
}

#[test]
fn test_arms_round_trip_grid_chars() {
    for ch in ['─', '│', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼'] {
        let arms = Arms::from_char(ch).unwrap();
        assert_eq!(arms.to_char(CharSet::Unicode), ch);
    }
}

#[test]
fn test_card_corners_do_not_merge() {
    assert_eq!(Arms::from_char('╭'), None);
    assert_eq!(Arms::from_char('┄'), None);
    assert_eq!(Arms::from_char('A'), None);
}

#[test]
fn test_single_arm_fallback() {
    assert_eq!(Arms::new(true, false, false, false).to_char(CharSet::Unicode), '│');
    assert_eq!(Arms::new(false, false, false, true).to_char(CharSet::Ascii), '-');
    assert_eq!(Arms::default().to_char(CharSet::Unicode), ' ');
}
