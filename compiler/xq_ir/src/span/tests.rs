use super::*;

#[test]
fn len_and_empty() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert!(Span::point(5).is_empty());
}

#[test]
fn contains_is_half_open() {
    let span = Span::new(2, 4);
    assert!(!span.contains(1));
    assert!(span.contains(2));
    assert!(span.contains(3));
    assert!(!span.contains(4));
}

#[test]
fn shift_moves_both_ends() {
    assert_eq!(Span::new(10, 12).shift(5), Span::new(15, 17));
    assert_eq!(Span::new(10, 12).shift(-10), Span::new(0, 2));
}

#[test]
fn try_from_range_rejects_oversized_offsets() {
    assert_eq!(Span::try_from_range(1..3), Ok(Span::new(1, 3)));
    let too_large = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(0..too_large),
        Err(SpanError::EndTooLarge(too_large))
    );
    assert_eq!(
        Span::try_from_range(too_large..too_large),
        Err(SpanError::StartTooLarge(too_large))
    );
}

#[test]
fn display_and_range() {
    let span = Span::new(1, 4);
    assert_eq!(span.to_string(), "1..4");
    assert_eq!(format!("{span:?}"), "1..4");
    assert_eq!(&"abcdef"[span.to_range()], "bcd");
}
