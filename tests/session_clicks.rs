use color_by_number::{ClickOutcome, PixelBuffer, Rgb, Session, SessionError};

// A 2x1 image posterized at two levels: (200,0,0) -> (128,0,0), (10,10,10) -> (0,0,0)
fn two_by_one_session() -> Session {
    let buffer = PixelBuffer::new(
        2,
        1,
        vec![200, 0, 0, 255, 10, 10, 10, 255],
    );
    let mut session = Session::new();
    session.install_image(buffer);
    session.levels = 2;
    session.create_outline().unwrap();
    session
}

#[test]
fn outline_requires_an_image() {
    let mut session = Session::new();
    assert!(matches!(
        session.create_outline(),
        Err(SessionError::NoImage)
    ));
}

#[test]
fn paint_click_records_under_the_target_color() {
    let mut session = two_by_one_session();
    let black = Rgb::new(0, 0, 0);
    session.select_color(black);

    assert_eq!(session.click(0, 0), ClickOutcome::Painted(black));
    assert_eq!(session.display().unwrap().rgb_at(0, 0), Some(black));

    // keyed by the outline's color at the clicked pixel, not the paint color
    let events = session.progress().events(Rgb::new(128, 0, 0)).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!((events[0].x, events[0].y, events[0].color), (0, 0, black));

    assert_eq!(
        session.save_progress().unwrap(),
        r#"{"128,0,0":[[0,0,0,0,0]]}"#
    );
}

#[test]
fn click_without_a_selection_does_nothing() {
    let mut session = two_by_one_session();
    let before = session.display().unwrap().clone();

    assert_eq!(session.click(0, 0), ClickOutcome::NoSelection);
    assert_eq!(session.display().unwrap(), &before);
    assert!(session.progress().is_empty());
}

#[test]
fn reveal_click_restores_the_original_color() {
    let mut session = two_by_one_session();
    // a selection exists, but reveal mode must ignore it
    session.select_color(Rgb::new(128, 0, 0));
    session.reveal = true;

    let original = Rgb::new(10, 10, 10);
    assert_eq!(session.click(1, 0), ClickOutcome::Revealed(original));
    assert_eq!(session.display().unwrap().rgb_at(1, 0), Some(original));

    let events = session.progress().events(Rgb::new(0, 0, 0)).unwrap();
    assert_eq!((events[0].x, events[0].y, events[0].color), (1, 0, original));
}

#[test]
fn clicks_outside_the_image_are_ignored() {
    let mut session = two_by_one_session();
    session.select_color(Rgb::new(0, 0, 0));

    assert_eq!(session.click(2, 0), ClickOutcome::OutOfBounds);
    assert_eq!(session.click(0, 1), ClickOutcome::OutOfBounds);
    assert!(session.progress().is_empty());

    let mut empty = Session::new();
    assert_eq!(empty.click(0, 0), ClickOutcome::OutOfBounds);
}

#[test]
fn repainting_a_pixel_keeps_both_events_and_the_last_one_wins() {
    let mut session = two_by_one_session();
    let target = Rgb::new(128, 0, 0);

    session.select_color(Rgb::new(0, 0, 0));
    session.click(0, 0);
    session.select_color(Rgb::new(128, 0, 0));
    session.click(0, 0);

    assert_eq!(session.progress().events(target).unwrap().len(), 2);

    session.redraw();
    assert_eq!(
        session.display().unwrap().rgb_at(0, 0),
        Some(Rgb::new(128, 0, 0))
    );
}

#[test]
fn a_new_upload_discards_progress_and_selection() {
    let mut session = two_by_one_session();
    session.select_color(Rgb::new(0, 0, 0));
    session.click(0, 0);
    assert!(!session.progress().is_empty());

    session.install_image(PixelBuffer::filled(4, 4, Rgb::new(9, 9, 9)));

    assert!(session.progress().is_empty());
    assert_eq!(session.selected(), None);
    assert!(session.palette().is_empty());
    assert_eq!(session.dimensions(), Some((4, 4)));
}
