use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::debug;
use rat_daypicker::day::BuiltinDays;
use rat_daypicker::day_picker::{DayPicker, DayPickerState};
use rat_daypicker::event::{try_flow, HandleEvent, Outcome, Regular};
use rat_daypicker::focus::{Focus, FocusBuilder};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, StatefulWidget, Widget};
use ratatui::Terminal;
use std::cell::RefCell;
use std::fs;
use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".into());
    debug!("locale {}", locale);

    let status = Rc::new(RefCell::new(String::new()));

    let mut state = State {
        locale,
        full_text: true,
        status: status.clone(),
        days: DayPickerState::named("days"),
        short: DayPickerState::named("short"),
        quit: false,
    };
    state.days.load(&BuiltinDays)?;
    state.short.load(&BuiltinDays)?;

    state.days.set_listener(move |days, changed| {
        let selected = days.iter().filter(|v| v.selected).count();
        *status.borrow_mut() = format!(
            "day {} -> {}, {} of {} selected",
            changed.id,
            changed.selected,
            selected,
            days.len()
        );
    });

    run_ui(&mut state)
}

struct State {
    locale: String,
    full_text: bool,
    status: Rc<RefCell<String>>,
    days: DayPickerState,
    short: DayPickerState,
    quit: bool,
}

fn render(buf: &mut Buffer, area: Rect, state: &mut State) -> Result<(), anyhow::Error> {
    let l = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .spacing(1)
    .split(area);

    Line::from(format!(
        "locale {} | F2 full/short | F3 all | F4 none | Tab focus | Ctrl-Q quit",
        state.locale
    ))
    .render(l[0], buf);

    DayPicker::new()
        .locale(&state.locale)
        .full_text(state.full_text)
        .spacing(1)
        .text_size(3)
        .selected_color(Color::Rgb(46, 125, 50))
        .unselected_color(Color::Rgb(66, 66, 66))
        .selected_text_color(Color::White)
        .unselected_text_color(Color::Gray)
        .block(Block::bordered().border_type(BorderType::Rounded))
        .focus_style(Style::new().underlined())
        .render(l[1], buf, &mut state.days);

    Line::from("german, abbreviated, disabled").render(l[2], buf);

    DayPicker::new()
        .locale("de")
        .full_text(false)
        .spacing(2)
        .default_selection(false)
        .enabled(false)
        .text_color(Color::Yellow)
        .block(Block::bordered())
        .render(l[3], buf, &mut state.short);

    let selected = state
        .days
        .selected_days()
        .iter()
        .map(|v| v.id.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Line::from(format!("{} | selected [{}]", state.status.borrow(), selected))
        .reversed()
        .render(l[5], buf);

    Ok(())
}

fn focus(state: &State) -> Focus {
    let mut fb = FocusBuilder::new(None);
    fb.widget(&state.days);
    fb.widget(&state.short);
    fb.build()
}

fn event(event: &Event, state: &mut State) -> Result<Outcome, anyhow::Error> {
    let mut focus = focus(state);
    let f = focus.handle(event, Regular);

    try_flow!(match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            ..
        }) => {
            state.quit = true;
            Outcome::Changed
        }
        Event::Key(KeyEvent {
            code: KeyCode::F(2),
            kind: KeyEventKind::Press,
            ..
        }) => {
            state.full_text = !state.full_text;
            Outcome::Changed
        }
        Event::Key(KeyEvent {
            code: KeyCode::F(3),
            kind: KeyEventKind::Press,
            ..
        }) => {
            state.days.select_all(true);
            Outcome::Changed
        }
        Event::Key(KeyEvent {
            code: KeyCode::F(4),
            kind: KeyEventKind::Press,
            ..
        }) => {
            state.days.select_all(false);
            Outcome::Changed
        }
        _ => Outcome::Continue,
    });

    try_flow!(state.days.handle(event, Regular));
    try_flow!(state.short.handle(event, Regular));

    Ok(f)
}

fn run_ui(state: &mut State) -> Result<(), anyhow::Error> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let r = 'l: loop {
        if let Err(e) = terminal.draw(|frame| {
            let area = frame.area();
            if let Err(e) = render(frame.buffer_mut(), area, state) {
                debug!("render {:?}", e);
            }
        }) {
            break 'l Err(e.into());
        }

        match crossterm::event::poll(Duration::from_millis(50)) {
            Ok(true) => {
                let ev = match crossterm::event::read() {
                    Ok(v) => v,
                    Err(e) => break 'l Err(e.into()),
                };
                if let Err(e) = event(&ev, state) {
                    break 'l Err(e);
                }
            }
            Ok(false) => {}
            Err(e) => break 'l Err(e.into()),
        }

        if state.quit {
            break 'l Ok(());
        }
    };

    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    r
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("daypicker.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
