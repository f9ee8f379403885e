use selectbox::{
    Buffer, Color, Event, Key, Listeners, Painter, Pen, Rect, Rgb, Select, SelectError,
    SelectOption, SelectProps, SelectTheme,
};

const AREA: Rect = Rect::new(0, 0, 30, 2);

fn period_props() -> SelectProps {
    SelectProps::new(
        "period",
        "All",
        vec![
            SelectOption::new("All", "All"),
            SelectOption::new("12 hours", "12"),
            SelectOption::new("24 hours", "24"),
        ],
        "Period",
    )
}

fn render(select: &mut Select, props: &SelectProps) -> Buffer {
    let mut buf = Buffer::new(40, 10);
    select.render(props, &mut buf, AREA).unwrap();
    buf
}

fn mounted(props: &SelectProps) -> Select {
    let mut select = Select::new(Listeners::new());
    select.mount(props, AREA, Rect::from_size(40, 10));
    select
}

// ============================================================================
// Closed
// ============================================================================

#[test]
fn test_closed_shows_label_and_value() {
    let props = period_props();
    let mut select = mounted(&props);

    let buf = render(&mut select, &props);

    assert_eq!(buf.row_text(0), "Period");
    let field = buf.row_text(1);
    assert!(field.contains("All"), "{field:?}");
    assert!(field.ends_with('▼'), "{field:?}");
    // Nothing below the box
    assert_eq!(buf.row_text(2), "");
}

#[test]
fn test_required_marker() {
    let props = period_props().required(true);
    let mut select = mounted(&props);

    let buf = render(&mut select, &props);

    let label = buf.row_text(0);
    assert!(label.starts_with("Period"));
    assert!(label.ends_with("Required"), "{label:?}");
}

#[test]
fn test_placeholder_when_value_empty() {
    let props = period_props().value("").placeholder("Pick a period");
    let mut select = mounted(&props);

    let buf = render(&mut select, &props);

    assert!(buf.row_text(1).contains("Pick a period"));
    let theme = SelectTheme::default();
    let cell = buf.get(1, 1).unwrap();
    assert_eq!(cell.fg, theme.placeholder.to_rgb());
}

#[test]
fn test_unknown_value_is_an_error() {
    let props = period_props().value("96");
    let mut select = mounted(&props);
    let mut buf = Buffer::new(40, 10);

    let err = select.render(&props, &mut buf, AREA).unwrap_err();

    assert!(matches!(
        err,
        SelectError::UnknownValue { ref name, ref value } if name == "period" && value == "96"
    ));
    assert!(err.to_string().contains("'96'"));
    // Nothing was drawn
    assert_eq!(buf.row_text(0), "");
}

#[test]
fn test_long_value_is_truncated() {
    let props = SelectProps::new(
        "tz",
        "x",
        vec![SelectOption::new("A very long timezone name indeed", "x")],
        "Zone",
    )
    .width(14);
    let mut select = mounted(&props);

    let buf = render(&mut select, &props);

    assert_eq!(buf.row_text(1), " A very lo… ▼");
}

#[test]
fn test_label_color_overrides_theme() {
    let props = period_props().label_color(Color::rgb(1, 2, 3));
    let mut select = mounted(&props);

    let buf = render(&mut select, &props);

    assert_eq!(buf.get(0, 0).unwrap().fg, Color::rgb(1, 2, 3).to_rgb());
}

#[test]
fn test_grey_and_disabled_boxes() {
    let theme = SelectTheme::default();

    let props = period_props().grey(true);
    let buf = render(&mut mounted(&props), &props);
    assert_eq!(buf.get(0, 1).unwrap().bg, theme.grey_bg.to_rgb());
    assert!(!buf.get(1, 1).unwrap().style.dim);

    let props = period_props().disabled(true);
    let buf = render(&mut mounted(&props), &props);
    assert_eq!(buf.get(0, 1).unwrap().bg, theme.grey_bg.to_rgb());
    assert!(buf.get(1, 1).unwrap().style.dim);
}

#[test]
fn test_tab_index() {
    assert_eq!(period_props().effective_tab_index(), Some(0));
    assert_eq!(period_props().tab_index(3).effective_tab_index(), Some(3));
    assert_eq!(period_props().tab_index(3).disabled(true).effective_tab_index(), None);
}

// ============================================================================
// Open
// ============================================================================

#[test]
fn test_open_lists_options_under_the_box() {
    let props = period_props();
    let mut select = mounted(&props);
    select.handle_event(&props, &Event::click(1, 1));

    let buf = render(&mut select, &props);

    assert!(buf.row_text(1).ends_with('▲'));
    assert_eq!(buf.row_text(2), " All");
    assert_eq!(buf.row_text(3), " 12 hours");
    assert_eq!(buf.row_text(4), " 24 hours");
    assert_eq!(buf.row_text(5), "");
}

#[test]
fn test_highlighted_and_selected_rows_are_colored() {
    let props = period_props();
    let theme = SelectTheme::default();
    let mut select = mounted(&props);
    select.handle_event(&props, &Event::click(1, 1));
    select.handle_event(&props, &Event::key(Key::Down));

    let buf = render(&mut select, &props);

    // "All" is the value, "12 hours" has the highlight
    assert_eq!(buf.get(0, 2).unwrap().bg, theme.selected_bg.to_rgb());
    assert!(buf.get(1, 2).unwrap().style.bold);
    assert_eq!(buf.get(0, 3).unwrap().bg, theme.highlighted_bg.to_rgb());
    assert_eq!(buf.get(0, 4).unwrap().bg, theme.list_bg.to_rgb());
}

#[test]
fn test_display_override() {
    let props = period_props().display(|o| format!("{} ({})", o.name, o.value));
    let mut select = mounted(&props);
    select.handle_event(&props, &Event::click(1, 1));

    let buf = render(&mut select, &props);

    assert_eq!(buf.row_text(3), " 12 hours (12)");
    // The box keeps the plain label
    assert!(buf.row_text(1).contains("All"));
    assert!(!buf.row_text(1).contains("(All)"));
}

#[test]
fn test_list_clipped_to_viewport() {
    let props = SelectProps::new(
        "month",
        "January",
        SelectOption::from_labels(["January", "February", "March", "April", "May", "June"]),
        "Month",
    );
    let mut select = Select::new(Listeners::new());
    let mut buf = Buffer::new(30, 6);
    select.mount(&props, AREA, buf.area());
    select.handle_event(&props, &Event::click(1, 1));

    select.render(&props, &mut buf, AREA).unwrap();

    // 6 rows - 2 for the widget - 1 margin
    assert_eq!(select.position().max_height, 3);
    assert_eq!(buf.row_text(2), " January");
    assert_eq!(buf.row_text(4), " March");
    assert_eq!(buf.row_text(5), "");
}

#[test]
fn test_render_without_mount_uses_buffer_as_viewport() {
    let props = period_props();
    let mut select = Select::new(Listeners::new());
    let mut buf = Buffer::new(40, 10);

    select.render(&props, &mut buf, AREA).unwrap();

    assert_eq!(select.position().top, 2);
    assert_eq!(select.position().max_height, 7);
}

// ============================================================================
// Painter
// ============================================================================

#[test]
fn test_painter_writes_only_changes() {
    let props = period_props();
    let mut select = mounted(&props);
    let buf = render(&mut select, &props);
    let mut painter = Painter::new(Vec::new());

    painter.draw(&buf).unwrap();
    let first_len = painter.get_ref().len();
    let first = String::from_utf8_lossy(painter.get_ref()).to_string();
    assert!(first.contains("Period"));

    painter.draw(&buf).unwrap();
    let second = String::from_utf8_lossy(&painter.get_ref()[first_len..]).to_string();
    assert!(!second.contains("Period"));

    select.handle_event(&props, &Event::click(1, 1));
    let opened = render(&mut select, &props);
    let before = painter.get_ref().len();
    painter.draw(&opened).unwrap();
    let third = String::from_utf8_lossy(&painter.get_ref()[before..]).to_string();
    assert!(third.contains("12 hours"));
    assert!(!third.contains("Period"));
}

#[test]
fn test_painter_emits_black_background() {
    let mut buf = Buffer::new(3, 1);
    buf.fill(buf.area(), Pen::new(Rgb::new(230, 230, 235), Rgb::new(0, 0, 0)));
    let mut painter = Painter::new(Vec::new());

    painter.draw(&buf).unwrap();

    let out = String::from_utf8_lossy(painter.get_ref()).to_string();
    assert!(out.contains("48;2;0;0;0"), "{out:?}");
    assert!(out.contains("38;2;230;230;235"), "{out:?}");
}

#[test]
fn test_painter_emits_white_foreground() {
    let mut buf = Buffer::new(2, 1);
    buf.set_str(0, 0, "ok", 2, Pen::new(Rgb::new(255, 255, 255), Rgb::new(10, 10, 10)));
    let mut painter = Painter::new(Vec::new());

    painter.draw(&buf).unwrap();

    let out = String::from_utf8_lossy(painter.get_ref()).to_string();
    assert!(out.contains("38;2;255;255;255"), "{out:?}");
}

// ============================================================================
// Screen edge
// ============================================================================

#[test]
fn test_render_at_right_screen_edge() {
    let props = period_props();
    let mut select = Select::new(Listeners::new());
    let mut buf = Buffer::new(40, 10);
    let edge = Rect::new(u16::MAX, 0, 20, 2);
    select.mount(&props, edge, buf.area());
    assert!(select.focus());
    select.handle_event(&props, &Event::key(Key::Down));

    select.render(&props, &mut buf, edge).unwrap();

    assert!(select.is_open());
    assert_eq!(buf.row_text(0), "");
    assert_eq!(buf.row_text(1), "");
}
