use epyl_domain::CarouselState;
use epyl_domain::content::HERO_SLIDES;

#[test]
fn starts_at_first_slide() {
    let carousel = CarouselState::new(HERO_SLIDES.len());
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.len(), 3);
    assert!(!carousel.can_prev());
    assert!(carousel.can_next());
}

#[test]
fn saturates_at_both_ends() {
    let mut carousel = CarouselState::new(3);

    assert!(!carousel.prev());
    assert_eq!(carousel.index(), 0);

    assert!(carousel.next());
    assert!(carousel.next());
    assert_eq!(carousel.index(), 2);
    assert!(!carousel.can_next());

    assert!(!carousel.next());
    assert_eq!(carousel.index(), 2);

    assert!(carousel.prev());
    assert_eq!(carousel.index(), 1);
}

#[test]
fn empty_carousel_never_moves() {
    let mut carousel = CarouselState::new(0);
    assert!(carousel.is_empty());
    assert!(!carousel.next());
    assert!(!carousel.prev());
    assert_eq!(carousel.index(), 0);
}
