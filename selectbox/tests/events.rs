use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use selectbox::{
    Buffer, Event, Key, Modifiers, MouseButton, OptionRow, Rect, RowEvent, SelectTheme,
};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Crossterm conversion
// ============================================================================

#[test]
fn test_key_press_converts() {
    let event = CtEvent::Key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));

    assert_eq!(
        Event::from_crossterm(event),
        Some(Event::Key {
            key: Key::Char('M'),
            modifiers: Modifiers {
                shift: true,
                ctrl: false,
                alt: false,
            },
        })
    );
}

#[test]
fn test_navigation_keys_convert() {
    let cases = [
        (KeyCode::Up, Key::Up),
        (KeyCode::Down, Key::Down),
        (KeyCode::Enter, Key::Enter),
        (KeyCode::Esc, Key::Escape),
        (KeyCode::Tab, Key::Tab),
        (KeyCode::Char(' '), Key::Char(' ')),
    ];

    for (code, key) in cases {
        let event = CtEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm(event), Some(Event::key(key)));
    }
}

#[test]
fn test_key_release_and_unsupported_keys_are_dropped() {
    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(Event::from_crossterm(CtEvent::Key(release)), None);

    let f1 = KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE);
    assert_eq!(Event::from_crossterm(CtEvent::Key(f1)), None);

    assert_eq!(Event::from_crossterm(CtEvent::FocusGained), None);
}

#[test]
fn test_mouse_events_convert() {
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Down(CtButton::Left), 4, 7)),
        Some(Event::click(4, 7))
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Down(CtButton::Right), 4, 7)),
        Some(Event::Click {
            x: 4,
            y: 7,
            button: MouseButton::Right,
        })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Moved, 1, 2)),
        Some(Event::MouseMove { x: 1, y: 2 })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::ScrollDown, 1, 2)),
        Some(Event::Scroll { x: 1, y: 2, delta: 1 })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::ScrollUp, 1, 2)),
        Some(Event::Scroll { x: 1, y: 2, delta: -1 })
    );
    assert_eq!(
        Event::from_crossterm(mouse(MouseEventKind::Up(CtButton::Left), 1, 2)),
        None
    );
}

#[test]
fn test_resize_converts() {
    assert_eq!(
        Event::from_crossterm(CtEvent::Resize(120, 40)),
        Some(Event::Resize {
            width: 120,
            height: 40,
        })
    );
}

// ============================================================================
// Option row
// ============================================================================

#[test]
fn test_row_reports_click_and_hover() {
    let row = OptionRow::new(3, "March");
    let area = Rect::new(2, 5, 10, 1);

    assert_eq!(row.handle(&Event::click(4, 5), area), Some(RowEvent::Selected(3)));
    assert_eq!(
        row.handle(&Event::MouseMove { x: 11, y: 5 }, area),
        Some(RowEvent::Highlighted(3))
    );
    assert_eq!(row.handle(&Event::click(12, 5), area), None);
    assert_eq!(row.handle(&Event::click(4, 6), area), None);
    assert_eq!(
        row.handle(
            &Event::Click {
                x: 4,
                y: 5,
                button: MouseButton::Middle,
            },
            area
        ),
        None
    );
    assert_eq!(row.handle(&Event::key(Key::Enter), area), None);
}

#[test]
fn test_row_highlight_wins_over_selection() {
    let theme = SelectTheme::default();

    let both = OptionRow::new(0, "All").selected(true).highlighted(true);
    assert_eq!(both.pen(&theme).bg, theme.highlighted_bg.to_rgb());

    let selected = OptionRow::new(0, "All").selected(true);
    assert_eq!(selected.pen(&theme).bg, theme.selected_bg.to_rgb());

    let plain = OptionRow::new(0, "All");
    assert_eq!(plain.pen(&theme).bg, theme.list_bg.to_rgb());
    assert_eq!(plain.pen(&theme).fg, theme.text.to_rgb());
}

#[test]
fn test_row_at_screen_edge_draws_nothing() {
    let theme = SelectTheme::default();
    let mut buf = Buffer::new(10, 2);
    let area = Rect::new(u16::MAX, 0, 8, 1);

    OptionRow::new(0, "All").highlighted(true).render(&mut buf, area, &theme);

    assert_eq!(buf, Buffer::new(10, 2));
}
