use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_daypicker::day::{Day, DaysError, DaysModel};
use rat_daypicker::day_picker::{DayPicker, DayPickerState, SELECTED_COLOR, UNSELECTED_COLOR};
use rat_daypicker::event::{DayPickerOutcome, HandleEvent, Outcome, Regular};
use rat_daypicker::lang::{Lang, PLACEHOLDER};
use rat_daypicker::reloc::RelocatableState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::StatefulWidget;
use std::cell::RefCell;
use std::rc::Rc;

fn render(picker: DayPicker<'_>, state: &mut DayPickerState) -> Buffer {
    let area = Rect::new(0, 0, 76, 1);
    let mut buf = Buffer::empty(area);
    picker.render(area, &mut buf, state);
    buf
}

fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn text_at(buf: &Buffer, x: u16, len: u16) -> String {
    let mut s = String::new();
    for i in x..x + len {
        s.push_str(buf[(i, 0)].symbol());
    }
    s
}

fn ids(days: &[Day]) -> Vec<i32> {
    days.iter().map(|v| v.id).collect()
}

#[test]
fn test_init() {
    let model = DaysModel::from_json(
        r#"{"days": [
            {"dayID": 1, "enDay": "Sunday", "isSelected": false},
            {"dayID": 2, "enDay": "Monday", "isSelected": true},
            {"dayID": 3, "enDay": "Tuesday", "isSelected": false}
        ]}"#,
    )
    .expect("json");

    let mut state = DayPickerState::new();
    state.set_days(model.days.clone()).expect("days");
    render(DayPicker::new(), &mut state);
    assert_eq!(ids(&state.selected_days()), vec![1, 2, 3]);
    assert_eq!(state.items.len(), 3);

    let mut state = DayPickerState::new();
    state.set_days(model.days.clone()).expect("days");
    render(DayPicker::new().default_selection(false), &mut state);
    assert!(state.selected_days().is_empty());

    let mut state = DayPickerState::new();
    state.set_days(model.days.clone()).expect("days");
    render(DayPicker::new().keep_selection(true), &mut state);
    assert_eq!(ids(&state.selected_days()), vec![2]);
}

#[test]
fn test_render_keeps_selection() {
    let mut state = DayPickerState::builtin();
    render(DayPicker::new(), &mut state);
    assert!(state.tap(3));
    render(DayPicker::new(), &mut state);
    assert!(!state.is_selected(3));
    assert_eq!(state.selected_days().len(), 6);
}

#[test]
fn test_layout() {
    let mut state = DayPickerState::builtin();
    let buf = render(DayPicker::new().spacing(4), &mut state);

    assert_eq!(state.item_width(), (76 - 6 * 4) / 7);
    assert_eq!(state.items[0].area, Rect::new(0, 0, 7, 1));
    assert_eq!(state.items[1].area, Rect::new(11, 0, 7, 1));

    assert_eq!(text_at(&buf, 0, 7), "Sunday ");
    // clipped
    assert_eq!(state.items[3].text, "Wednesday");
    assert_eq!(text_at(&buf, 33, 7), "Wednesd");

    assert_eq!(buf[(0, 0)].bg, SELECTED_COLOR);
    // spacing keeps the base style.
    assert_eq!(buf[(8, 0)].bg, Color::Reset);
}

#[test]
fn test_locale() {
    let mut state = DayPickerState::builtin();
    let buf = render(DayPicker::new().locale("de_DE").full_text(false), &mut state);
    assert_eq!(state.items[1].text, "Mo");
    assert_eq!(text_at(&buf, 11, 7), "  Mo   ");

    let mut state = DayPickerState::builtin();
    render(DayPicker::new().locale("AR").full_text(true), &mut state);
    assert_eq!(
        state.items[0].text,
        state.days()[0].full_name(Lang::Ar).to_string()
    );

    let mut state = DayPickerState::builtin();
    let buf = render(DayPicker::new().locale("fr"), &mut state);
    for item in &state.items {
        assert_eq!(item.text, PLACEHOLDER);
    }
    assert_eq!(text_at(&buf, 0, 7), "  ??   ");
}

#[test]
fn test_click() {
    let calls = Rc::new(RefCell::new(Vec::new()));

    let mut state = DayPickerState::builtin();
    let c = calls.clone();
    state.set_listener(move |days, changed| {
        c.borrow_mut()
            .push((days.len(), ids(days), changed.id, changed.selected));
    });
    render(DayPicker::new(), &mut state);

    let r = state.handle(&click(12, 0), Regular);
    assert_eq!(r, DayPickerOutcome::Value);
    assert_eq!(Outcome::from(r), Outcome::Changed);

    assert!(!state.is_selected(1));
    for i in [0, 2, 3, 4, 5, 6] {
        assert!(state.is_selected(i));
    }
    assert_eq!(state.items[1].style.bg, Some(UNSELECTED_COLOR));
    assert_eq!(state.items[0].style.bg, Some(SELECTED_COLOR));

    {
        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (7, vec![1, 2, 3, 4, 5, 6, 7], 2, false));
    }

    // into the gap
    let r = state.handle(&click(9, 0), Regular);
    assert_eq!(r, DayPickerOutcome::Unchanged);
    // outside
    let r = state.handle(&click(12, 3), Regular);
    assert_eq!(r, DayPickerOutcome::Continue);

    let r = state.handle(&click(13, 0), Regular);
    assert_eq!(r, DayPickerOutcome::Value);
    assert!(state.is_selected(1));
    assert_eq!(calls.borrow().len(), 2);
    assert_eq!(calls.borrow()[1].3, true);
}

#[test]
fn test_listener_replaced() {
    let first = Rc::new(RefCell::new(0));
    let second = Rc::new(RefCell::new(0));

    let mut state = DayPickerState::builtin();
    let c = first.clone();
    state.set_listener(move |_, _| *c.borrow_mut() += 1);
    let c = second.clone();
    state.set_listener(move |_, _| *c.borrow_mut() += 1);
    render(DayPicker::new(), &mut state);

    state.tap(0);
    assert_eq!(*first.borrow(), 0);
    assert_eq!(*second.borrow(), 1);

    state.clear_listener();
    state.tap(0);
    assert_eq!(*second.borrow(), 1);
}

#[test]
fn test_tap_before_render() {
    let calls = Rc::new(RefCell::new(0));

    let mut state = DayPickerState::builtin();
    let c = calls.clone();
    state.set_listener(move |_, _| *c.borrow_mut() += 1);

    assert!(!state.tap(0));
    assert_eq!(*calls.borrow(), 0);
    render(DayPicker::new(), &mut state);
    assert!(state.is_selected(0));

    assert!(state.tap(0));
    assert!(!state.is_selected(0));
    assert_eq!(*calls.borrow(), 1);

    // new days wait for the next render again
    state
        .set_days(DaysModel::builtin().into_days())
        .expect("days");
    assert!(!state.tap(0));
    assert_eq!(*calls.borrow(), 1);
    render(DayPicker::new(), &mut state);
    assert!(state.tap(0));
    assert_eq!(*calls.borrow(), 2);
}

#[test]
fn test_disabled() {
    let calls = Rc::new(RefCell::new(0));

    let mut state = DayPickerState::builtin();
    let c = calls.clone();
    state.set_listener(move |_, _| *c.borrow_mut() += 1);
    render(DayPicker::new().enabled(false), &mut state);

    let r = state.handle(&click(12, 0), Regular);
    assert_eq!(r, DayPickerOutcome::Unchanged);
    assert!(!state.tap(2));
    assert_eq!(state.selected_days().len(), 7);
    assert_eq!(*calls.borrow(), 0);

    render(DayPicker::new().enabled(true), &mut state);
    assert!(state.tap(2));
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_select_all() {
    let calls = Rc::new(RefCell::new(0));

    let mut state = DayPickerState::builtin();
    let c = calls.clone();
    state.set_listener(move |_, _| *c.borrow_mut() += 1);
    render(DayPicker::new(), &mut state);

    state.select_all(false);
    assert!(state.selected_days().is_empty());
    for item in &state.items {
        assert_eq!(item.style.bg, Some(UNSELECTED_COLOR));
    }

    state.select_all(true);
    assert_eq!(state.selected_days(), state.days().to_vec());
    for item in &state.items {
        assert_eq!(item.style.bg, Some(SELECTED_COLOR));
    }

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn test_selected_days() {
    let mut state = DayPickerState::builtin();
    render(DayPicker::new().default_selection(false), &mut state);

    state.tap(5);
    state.tap(1);
    state.tap(3);

    let before = state.days().to_vec();
    let sel = state.selected_days();
    assert_eq!(ids(&sel), vec![2, 4, 6]);
    assert_eq!(state.days(), before.as_slice());
}

#[test]
fn test_text_override() {
    let mut state = DayPickerState::builtin();
    render(
        DayPicker::new()
            .selected_text_color(Color::Black)
            .unselected_text_color(Color::Gray)
            .text_color(Color::Yellow),
        &mut state,
    );
    for item in &state.items {
        assert_eq!(item.style.fg, Some(Color::Yellow));
    }

    state.tap(0);
    assert_eq!(state.items[0].style.fg, Some(Color::Yellow));
    assert_eq!(state.items[0].style.bg, Some(UNSELECTED_COLOR));

    state.select_all(false);
    for item in &state.items {
        assert_eq!(item.style.fg, Some(Color::Yellow));
    }

    let mut state = DayPickerState::builtin();
    render(
        DayPicker::new()
            .selected_text_color(Color::Black)
            .unselected_text_color(Color::Gray),
        &mut state,
    );
    assert_eq!(state.items[0].style.fg, Some(Color::Black));
    state.tap(0);
    assert_eq!(state.items[0].style.fg, Some(Color::Gray));
}

#[test]
fn test_empty() {
    let mut state = DayPickerState::new();
    assert!(state.is_empty());
    let buf = render(DayPicker::new(), &mut state);
    assert!(state.items.is_empty());
    assert_eq!(state.item_width(), 0);
    assert_eq!(buf[(0, 0)].symbol(), " ");

    assert_eq!(state.handle(&click(3, 0), Regular), DayPickerOutcome::Unchanged);
    assert!(!state.tap(0));
    state.select_all(true);
    assert!(state.selected_days().is_empty());

    state.focus.set(true);
    assert_eq!(
        state.handle(&key(KeyCode::Char(' ')), Regular),
        DayPickerOutcome::Unchanged
    );
}

#[test]
fn test_keyboard() {
    let mut state = DayPickerState::builtin();
    render(DayPicker::new(), &mut state);

    assert_eq!(
        state.handle(&key(KeyCode::Right), Regular),
        DayPickerOutcome::Continue
    );

    state.focus.set(true);
    assert_eq!(
        state.handle(&key(KeyCode::Right), Regular),
        DayPickerOutcome::Changed
    );
    assert_eq!(
        state.handle(&key(KeyCode::Char(' ')), Regular),
        DayPickerOutcome::Value
    );
    assert!(!state.is_selected(1));

    assert_eq!(
        state.handle(&key(KeyCode::End), Regular),
        DayPickerOutcome::Changed
    );
    assert_eq!(
        state.handle(&key(KeyCode::Right), Regular),
        DayPickerOutcome::Unchanged
    );
    assert_eq!(
        state.handle(&key(KeyCode::Enter), Regular),
        DayPickerOutcome::Value
    );
    assert!(!state.is_selected(6));

    assert_eq!(
        state.handle(&key(KeyCode::Home), Regular),
        DayPickerOutcome::Changed
    );
    assert_eq!(
        state.handle(&key(KeyCode::Left), Regular),
        DayPickerOutcome::Unchanged
    );
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_duplicate_ids() {
    let mut state = DayPickerState::builtin();
    let r = state.set_days(vec![Day::new(1), Day::new(2), Day::new(1)]);
    assert!(matches!(r, Err(DaysError::DuplicateId(1))));
    assert_eq!(state.len(), 7);
}

#[test]
fn test_relocate() {
    let mut state = DayPickerState::builtin();
    render(DayPicker::new(), &mut state);

    state.relocate((2, 1), Rect::new(0, 0, 100, 10));
    assert_eq!(state.area, Rect::new(2, 1, 76, 1));
    assert_eq!(state.items[1].area, Rect::new(13, 1, 7, 1));
    assert_eq!(state.item_at((14, 1).into()), Some(1));
}
