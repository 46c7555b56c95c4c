//!
//! Weekday picker.
//!
//! Renders a horizontal row with one label per day. Each day can be
//! toggled on and off with a mouse click, or with Space/Enter when the
//! widget is focused.
//!
//! ```rust ignore
//! use rat_daypicker::day_picker::{DayPicker, DayPickerState};
//! use ratatui::widgets::StatefulWidget;
//!
//! let mut state = DayPickerState::builtin();
//! state.set_listener(|days, changed| {
//!     debug!("{} now {}", changed.en_day, changed.selected);
//! });
//!
//! DayPicker::new()
//!     .locale("de")
//!     .full_text(false)
//!     .spacing(1)
//!     .render(layout[1], frame.buffer_mut(), &mut state);
//! ```
//!
//! The picker applies its default selection to all days the first time
//! it is rendered after [DayPickerState::set_days]. Selections stored
//! with the data are overwritten unless [DayPicker::keep_selection] is set.
//!
use crate::_private::NonExhaustive;
use crate::day::{Day, DaySource, DaysError, DaysModel, DAYS_LIST};
use crate::day_picker::core::DayPickerCore;
use crate::day_picker::event::DayPickerOutcome;
use crate::lang::{resolve_text, Lang};
use crate::util::{block_size, clip_text, fill_buf_area, revert_style};
use log::{debug, warn};
use rat_event::util::MouseFlags;
use rat_event::{ct_event, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::BlockExt;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, StatefulWidget, Widget};
use serde_derive::{Deserialize, Serialize};
use std::cmp::{max, min};
use std::fmt::{Debug, Formatter};
use unicode_width::UnicodeWidthStr;

/// Default background for selected days.
pub const SELECTED_COLOR: Color = Color::Green;
/// Default background for unselected days.
pub const UNSELECTED_COLOR: Color = Color::DarkGray;
/// Default text color.
pub const TEXT_COLOR: Color = Color::White;
/// Default space between two days.
pub const SPACING: u16 = 4;
/// Default height of a day.
pub const TEXT_SIZE: u16 = 1;

/// Weekday picker widget.
#[derive(Debug, Clone)]
pub struct DayPicker<'a> {
    locale: &'a str,
    enabled: bool,
    default_selection: bool,
    keep_selection: bool,
    full_text: bool,
    spacing: u16,
    text_size: u16,
    colors: DayColors,

    style: Style,
    focus_style: Option<Style>,
    block: Option<Block<'a>>,
}

/// Colors of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColors {
    /// Background of a selected day.
    pub selected: Color,
    /// Background of an unselected day.
    pub unselected: Color,
    /// Text color of a selected day.
    pub selected_text: Color,
    /// Text color of an unselected day.
    pub unselected_text: Color,
    /// Overrides the text color regardless of the selection.
    pub text_override: Option<Color>,
}

/// Composite style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPickerStyle {
    /// Base style.
    pub style: Style,
    /// Focused style
    pub focus: Option<Style>,
    /// Border
    #[serde(skip)]
    pub block: Option<Block<'static>>,

    /// Background of a selected day.
    pub selected_color: Option<Color>,
    /// Background of an unselected day.
    pub unselected_color: Option<Color>,
    /// Text color of a selected day.
    pub selected_text_color: Option<Color>,
    /// Text color of an unselected day.
    pub unselected_text_color: Option<Color>,
    /// Overrides the text color.
    pub text_color: Option<Color>,

    /// Taps are processed.
    pub enabled: Option<bool>,
    /// Selection applied when initializing.
    pub default_selection: Option<bool>,
    /// Full day names or abbreviations.
    pub full_text: Option<bool>,
    /// Space between days.
    pub spacing: Option<u16>,
    /// Height of a day.
    pub text_size: Option<u16>,

    #[serde(skip)]
    pub non_exhaustive: NonExhaustive,
}

/// One rendered day.
///
/// The index in [DayPickerState::items] is the index of the day.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DayItem {
    /// Displayed text.
    pub text: String,
    /// Area of the day.
    pub area: Rect,
    /// Current visual state.
    pub style: Style,
}

/// State.
pub struct DayPickerState {
    /// Complete area
    /// __read only__. renewed for each render.
    pub area: Rect,
    /// Area inside the block.
    /// __read only__. renewed for each render.
    pub inner: Rect,
    /// Width of a single day.
    /// __read only__. renewed for each render.
    pub item_width: u16,
    /// Rendered days.
    /// __read only__. renewed for each render.
    pub items: Vec<DayItem>,
    /// Colors
    /// __read only__. renewed for each render.
    pub colors: DayColors,

    /// Days and selection.
    pub core: DayPickerCore,
    /// Days need initialization with the next render.
    /// __read+write__
    pub init_pending: bool,

    /// Keyboard cursor.
    /// __read+write__
    pub cursor: usize,

    /// Current focus state.
    /// __read+write__
    pub focus: FocusFlag,

    /// Mouse helper
    /// __read+write__
    pub mouse: MouseFlags,

    pub non_exhaustive: NonExhaustive,
}

pub(crate) mod event {
    use rat_event::{ConsumedEvent, Outcome};

    /// Result value for event-handling.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DayPickerOutcome {
        /// The given event was not handled at all.
        Continue,
        /// The event was handled, no repaint necessary.
        Unchanged,
        /// The event was handled, repaint necessary.
        Changed,
        /// A day has been toggled.
        Value,
    }

    impl ConsumedEvent for DayPickerOutcome {
        fn is_consumed(&self) -> bool {
            *self != DayPickerOutcome::Continue
        }
    }

    impl From<bool> for DayPickerOutcome {
        fn from(value: bool) -> Self {
            if value {
                DayPickerOutcome::Changed
            } else {
                DayPickerOutcome::Unchanged
            }
        }
    }

    impl From<DayPickerOutcome> for Outcome {
        fn from(value: DayPickerOutcome) -> Self {
            match value {
                DayPickerOutcome::Continue => Outcome::Continue,
                DayPickerOutcome::Unchanged => Outcome::Unchanged,
                DayPickerOutcome::Changed => Outcome::Changed,
                DayPickerOutcome::Value => Outcome::Changed,
            }
        }
    }
}

pub mod core {
    use crate::day::{validate_ids, Day, DaysError};
    use log::debug;
    use std::fmt::{Debug, Formatter};

    /// Listener for taps.
    ///
    /// Gets the complete list and the day that changed.
    pub type DayListener = Box<dyn FnMut(&[Day], &Day) + 'static>;

    /// The days and their selection, without any rendering.
    pub struct DayPickerCore {
        days: Vec<Day>,
        enabled: bool,
        listener: Option<DayListener>,
    }

    impl Default for DayPickerCore {
        fn default() -> Self {
            Self {
                days: Default::default(),
                enabled: true,
                listener: None,
            }
        }
    }

    impl Debug for DayPickerCore {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("DayPickerCore")
                .field("days", &self.days)
                .field("enabled", &self.enabled)
                .field("listener", &self.listener.is_some())
                .finish()
        }
    }

    impl Clone for DayPickerCore {
        fn clone(&self) -> Self {
            Self {
                days: self.days.clone(),
                enabled: self.enabled,
                listener: None,
            }
        }
    }

    impl DayPickerCore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the days and apply the default selection.
        pub fn init(&mut self, days: Vec<Day>, default_selection: bool) -> Result<(), DaysError> {
            self.set_days(days)?;
            self.select_all(default_selection);
            Ok(())
        }

        /// Set the days as they are.
        ///
        /// Fails if two days share an id.
        pub fn set_days(&mut self, days: Vec<Day>) -> Result<(), DaysError> {
            validate_ids(&days)?;
            self.days = days;
            Ok(())
        }

        pub fn days(&self) -> &[Day] {
            &self.days
        }

        pub fn day(&self, n: usize) -> Option<&Day> {
            self.days.get(n)
        }

        pub fn len(&self) -> usize {
            self.days.len()
        }

        pub fn is_empty(&self) -> bool {
            self.days.is_empty()
        }

        pub fn is_enabled(&self) -> bool {
            self.enabled
        }

        pub fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        pub fn is_selected(&self, n: usize) -> bool {
            self.days.get(n).map(|v| v.selected).unwrap_or_default()
        }

        /// Toggle the day at index n and notify the listener.
        ///
        /// Does nothing if disabled or n is out of bounds.
        /// Returns true if the day has been toggled.
        pub fn tap(&mut self, n: usize) -> bool {
            if !self.enabled {
                return false;
            }
            let Some(day) = self.days.get_mut(n) else {
                return false;
            };
            day.selected = !day.selected;
            debug!("day {} selected {}", day.id, day.selected);

            if let Some(listener) = self.listener.as_mut() {
                listener(&self.days, &self.days[n]);
            }
            true
        }

        /// Select or deselect all days.
        ///
        /// The listener is not called.
        pub fn select_all(&mut self, select: bool) {
            for day in self.days.iter_mut() {
                day.selected = select;
            }
        }

        /// Copy of all selected days, in order.
        pub fn selected_days(&self) -> Vec<Day> {
            self.days.iter().filter(|v| v.selected).cloned().collect()
        }

        /// Set the listener. Replaces any previous listener.
        pub fn set_listener(&mut self, listener: impl FnMut(&[Day], &Day) + 'static) {
            self.listener = Some(Box::new(listener));
        }

        pub fn clear_listener(&mut self) {
            self.listener = None;
        }

        pub fn has_listener(&self) -> bool {
            self.listener.is_some()
        }
    }
}

/// Width of a single day.
///
/// The available width minus the spacing between the days,
/// divided by the number of days. Zero for no days.
pub fn item_width(available: u16, spacing: u16, count: usize) -> u16 {
    if count == 0 {
        return 0;
    }
    let count = count as u32;
    let gaps = spacing as u32 * (count - 1);
    ((available as u32).saturating_sub(gaps) / count) as u16
}

/// Areas for count days laid out from left to right.
pub fn layout_items(inner: Rect, count: usize, spacing: u16, text_size: u16) -> Vec<Rect> {
    let width = item_width(inner.width, spacing, count);
    let height = min(max(text_size, 1), inner.height);

    let mut areas = Vec::with_capacity(count);
    let mut x = inner.x as u32;
    for _ in 0..count {
        let area = Rect::new(
            min(x, inner.right() as u32) as u16, //
            inner.y,
            width,
            height,
        );
        areas.push(area.intersection(inner));
        x += width as u32 + spacing as u32;
    }
    areas
}

impl Default for DayColors {
    fn default() -> Self {
        Self {
            selected: SELECTED_COLOR,
            unselected: UNSELECTED_COLOR,
            selected_text: TEXT_COLOR,
            unselected_text: TEXT_COLOR,
            text_override: None,
        }
    }
}

impl DayColors {
    /// Style for a selected or unselected day.
    ///
    /// The text override is applied last.
    pub fn visual_style(&self, selected: bool) -> Style {
        let mut style = if selected {
            Style::new().bg(self.selected).fg(self.selected_text)
        } else {
            Style::new().bg(self.unselected).fg(self.unselected_text)
        };
        if let Some(text_override) = self.text_override {
            style = style.fg(text_override);
        }
        style
    }
}

impl DayItem {
    /// Set the style for the selection state.
    pub fn apply_visual_state(&mut self, selected: bool, colors: &DayColors) {
        self.style = colors.visual_style(selected);
    }
}

impl Default for DayPickerStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            focus: Default::default(),
            block: Default::default(),
            selected_color: Default::default(),
            unselected_color: Default::default(),
            selected_text_color: Default::default(),
            unselected_text_color: Default::default(),
            text_color: Default::default(),
            enabled: Default::default(),
            default_selection: Default::default(),
            full_text: Default::default(),
            spacing: Default::default(),
            text_size: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for DayPicker<'_> {
    fn default() -> Self {
        Self {
            locale: Lang::En.code(),
            enabled: true,
            default_selection: true,
            keep_selection: false,
            full_text: true,
            spacing: SPACING,
            text_size: TEXT_SIZE,
            colors: Default::default(),
            style: Default::default(),
            focus_style: Default::default(),
            block: Default::default(),
        }
    }
}

impl<'a> DayPicker<'a> {
    /// New.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all styles.
    pub fn styles(mut self, styles: DayPickerStyle) -> Self {
        self.style = styles.style;
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if let Some(block) = styles.block {
            self.block = Some(block);
        }
        if let Some(color) = styles.selected_color {
            self.colors.selected = color;
        }
        if let Some(color) = styles.unselected_color {
            self.colors.unselected = color;
        }
        if let Some(color) = styles.selected_text_color {
            self.colors.selected_text = color;
        }
        if let Some(color) = styles.unselected_text_color {
            self.colors.unselected_text = color;
        }
        if styles.text_color.is_some() {
            self.colors.text_override = styles.text_color;
        }
        if let Some(enabled) = styles.enabled {
            self.enabled = enabled;
        }
        if let Some(default_selection) = styles.default_selection {
            self.default_selection = default_selection;
        }
        if let Some(full_text) = styles.full_text {
            self.full_text = full_text;
        }
        if let Some(spacing) = styles.spacing {
            self.spacing = spacing;
        }
        if let Some(text_size) = styles.text_size {
            self.text_size = text_size;
        }
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Set the base-style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self
    }

    /// Style when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Block.
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Language of the labels. Takes a language code or a locale
    /// like `de_AT`. Unknown languages show a placeholder.
    pub fn locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    /// Taps are processed. Default is true.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Selection applied to all days when initializing.
    /// Default is true.
    pub fn default_selection(mut self, default_selection: bool) -> Self {
        self.default_selection = default_selection;
        self
    }

    /// Keep the selection that came with the data instead of
    /// applying the default selection.
    pub fn keep_selection(mut self, keep: bool) -> Self {
        self.keep_selection = keep;
        self
    }

    /// Background for selected days.
    pub fn selected_color(mut self, color: Color) -> Self {
        self.colors.selected = color;
        self
    }

    /// Background for unselected days.
    pub fn unselected_color(mut self, color: Color) -> Self {
        self.colors.unselected = color;
        self
    }

    /// Text color of selected days.
    pub fn selected_text_color(mut self, color: Color) -> Self {
        self.colors.selected_text = color;
        self
    }

    /// Text color of unselected days.
    pub fn unselected_text_color(mut self, color: Color) -> Self {
        self.colors.unselected_text = color;
        self
    }

    /// Text color for all days. Wins over the selected/unselected
    /// text color.
    pub fn text_color(mut self, color: Color) -> Self {
        self.colors.text_override = Some(color);
        self
    }

    /// Show full day names or abbreviations. Default is full names.
    pub fn full_text(mut self, full_text: bool) -> Self {
        self.full_text = full_text;
        self
    }

    /// Space between two days.
    pub fn spacing(mut self, spacing: u16) -> Self {
        self.spacing = spacing;
        self
    }

    /// Height of a day in rows.
    pub fn text_size(mut self, text_size: u16) -> Self {
        self.text_size = text_size;
        self
    }

    /// Inherent width.
    pub fn width(&self, state: &DayPickerState) -> u16 {
        let n = u32::try_from(state.core.len()).unwrap_or(u32::MAX);
        let max_text = state
            .core
            .days()
            .iter()
            .map(|v| resolve_text(v, self.locale, self.full_text).width())
            .max()
            .unwrap_or_default();
        let max_text = u32::try_from(max_text).unwrap_or(u32::MAX);
        let width = n
            .saturating_mul(max_text)
            .saturating_add(n.saturating_sub(1).saturating_mul(self.spacing as u32))
            .saturating_add(block_size(&self.block).width as u32);
        min(width, u16::MAX as u32) as u16
    }

    /// Inherent height.
    pub fn height(&self) -> u16 {
        max(self.text_size, 1) + block_size(&self.block).height
    }
}

impl<'a> StatefulWidget for &DayPicker<'a> {
    type State = DayPickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for DayPicker<'_> {
    type State = DayPickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &DayPicker<'_>, area: Rect, buf: &mut Buffer, state: &mut DayPickerState) {
    state.area = area;
    state.inner = widget.block.inner_if_some(area);
    state.colors = widget.colors;
    state.core.set_enabled(widget.enabled);

    if state.init_pending {
        state.init_pending = false;
        if !widget.keep_selection {
            state.core.select_all(widget.default_selection);
        }
        if state.core.is_empty() {
            warn!("day picker without days");
        }
        if Lang::from_locale(widget.locale).is_none() {
            warn!("no day names for locale {:?}", widget.locale);
        }
        state.cursor = 0;
    }

    layout(widget, state);

    if state.cursor >= state.items.len() {
        state.cursor = state.items.len().saturating_sub(1);
    }

    let focus_style = if let Some(focus_style) = widget.focus_style {
        widget.style.patch(focus_style)
    } else {
        revert_style(widget.style)
    };

    if let Some(block) = &widget.block {
        block.render(area, buf);
    } else {
        buf.set_style(area, widget.style);
    }

    let focused = state.is_focused();
    for (i, item) in state.items.iter().enumerate() {
        let style = if focused && i == state.cursor {
            item.style.patch(focus_style)
        } else {
            item.style
        };
        fill_buf_area(buf, item.area, " ", style);

        if item.area.is_empty() {
            continue;
        }
        let text = clip_text(&item.text, item.area.width);
        let text_width = text.width() as u16;
        let x = item.area.x + (item.area.width - text_width) / 2;
        let y = item.area.y + (item.area.height - 1) / 2;
        buf.set_stringn(x, y, text, item.area.width as usize, style);
    }
}

/// Recalculate the areas, texts and styles of all days.
fn layout(widget: &DayPicker<'_>, state: &mut DayPickerState) {
    let areas = layout_items(
        state.inner,
        state.core.len(),
        widget.spacing,
        widget.text_size,
    );
    state.item_width = item_width(state.inner.width, widget.spacing, state.core.len());

    state.items.resize_with(state.core.len(), Default::default);
    for (i, (day, area)) in state.core.days().iter().zip(areas).enumerate() {
        let item = &mut state.items[i];
        item.text.clear();
        item.text
            .push_str(resolve_text(day, widget.locale, widget.full_text));
        item.area = area;
        item.apply_visual_state(day.selected, &widget.colors);
    }
}

impl Debug for DayPickerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DayPickerState")
            .field("area", &self.area)
            .field("inner", &self.inner)
            .field("item_width", &self.item_width)
            .field("items", &self.items)
            .field("colors", &self.colors)
            .field("core", &self.core)
            .field("init_pending", &self.init_pending)
            .field("cursor", &self.cursor)
            .field("focus", &self.focus)
            .field("mouse", &self.mouse)
            .finish()
    }
}

impl Clone for DayPickerState {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            inner: self.inner,
            item_width: self.item_width,
            items: self.items.clone(),
            colors: self.colors,
            core: self.core.clone(),
            init_pending: self.init_pending,
            cursor: self.cursor,
            focus: FocusFlag::named(self.focus.name()),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for DayPickerState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            item_width: Default::default(),
            items: Default::default(),
            colors: Default::default(),
            core: Default::default(),
            init_pending: true,
            cursor: Default::default(),
            focus: Default::default(),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl HasFocus for DayPickerState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for DayPickerState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        for item in self.items.iter_mut() {
            item.area = relocate_area(item.area, shift, clip);
        }
    }
}

impl DayPickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            ..Default::default()
        }
    }

    /// State with the built-in list of days.
    pub fn builtin() -> Self {
        let mut s = Self::default();
        if let Err(e) = s.core.set_days(DaysModel::builtin().into_days()) {
            warn!("builtin days rejected: {}", e);
        }
        s
    }

    /// Load the days from a source. Uses the key `days_list`.
    pub fn load(&mut self, source: &dyn DaySource) -> Result<(), DaysError> {
        let model = source.load(DAYS_LIST)?;
        self.set_days(model.into_days())
    }

    /// Set new days.
    ///
    /// The days are initialized with the next render.
    /// Fails if two days share an id.
    pub fn set_days(&mut self, days: Vec<Day>) -> Result<(), DaysError> {
        self.core.set_days(days)?;
        self.items.clear();
        self.init_pending = true;
        debug!("day picker got {} days", self.core.len());
        Ok(())
    }

    /// All days in order.
    pub fn days(&self) -> &[Day] {
        self.core.days()
    }

    pub fn day(&self, n: usize) -> Option<&Day> {
        self.core.day(n)
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_selected(&self, n: usize) -> bool {
        self.core.is_selected(n)
    }

    /// Width of a single day as of the last render.
    pub fn item_width(&self) -> u16 {
        self.item_width
    }

    /// Taps are processed.
    /// Set with each render.
    pub fn is_enabled(&self) -> bool {
        self.core.is_enabled()
    }

    /// Toggle the day at index n.
    ///
    /// Calls the listener and updates the style of this one day.
    /// Does nothing if the picker is disabled, or if the days
    /// have not been rendered since the last [DayPickerState::set_days].
    pub fn tap(&mut self, n: usize) -> bool {
        if self.init_pending {
            debug!("tap {} before init ignored", n);
            return false;
        }
        if !self.core.tap(n) {
            return false;
        }
        let selected = self.core.is_selected(n);
        if let Some(item) = self.items.get_mut(n) {
            item.apply_visual_state(selected, &self.colors);
        }
        true
    }

    /// Select or deselect all days. The listener is not called.
    pub fn select_all(&mut self, select: bool) {
        self.core.select_all(select);
        for item in self.items.iter_mut() {
            item.apply_visual_state(select, &self.colors);
        }
    }

    /// Copy of the selected days in order.
    pub fn selected_days(&self) -> Vec<Day> {
        self.core.selected_days()
    }

    /// Set the listener that is called for each tap.
    /// Replaces any previous listener.
    pub fn set_listener(&mut self, listener: impl FnMut(&[Day], &Day) + 'static) {
        self.core.set_listener(listener);
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.core.clear_listener();
    }

    /// Index of the day at the position.
    pub fn item_at(&self, pos: Position) -> Option<usize> {
        self.items.iter().position(|v| v.area.contains(pos))
    }

    /// Move the cursor to the next day.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.cursor + 1 < self.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor to the previous day.
    pub fn prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor.
    pub fn set_cursor(&mut self, n: usize) -> bool {
        let old = self.cursor;
        self.cursor = min(n, self.len().saturating_sub(1));
        old != self.cursor
    }
}

impl HandleEvent<crossterm::event::Event, Regular, DayPickerOutcome> for DayPickerState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> DayPickerOutcome {
        let r: DayPickerOutcome = if self.is_focused() {
            match event {
                ct_event!(keycode press Left) => self.prev().into(),
                ct_event!(keycode press Right) => self.next().into(),
                ct_event!(keycode press Home) => self.set_cursor(0).into(),
                ct_event!(keycode press End) => {
                    self.set_cursor(self.len().saturating_sub(1)).into()
                }
                ct_event!(keycode press Enter) | ct_event!(key press ' ') => {
                    if self.tap(self.cursor) {
                        DayPickerOutcome::Value
                    } else {
                        DayPickerOutcome::Unchanged
                    }
                }
                _ => DayPickerOutcome::Continue,
            }
        } else {
            DayPickerOutcome::Continue
        };

        if r == DayPickerOutcome::Continue {
            HandleEvent::handle(self, event, MouseOnly)
        } else {
            r
        }
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, DayPickerOutcome> for DayPickerState {
    fn handle(&mut self, event: &crossterm::event::Event, _keymap: MouseOnly) -> DayPickerOutcome {
        match event {
            ct_event!(mouse down Left for x,y) if self.area.contains((*x, *y).into()) => {
                if let Some(n) = self.item_at(Position::new(*x, *y)) {
                    self.cursor = n;
                    if self.tap(n) {
                        DayPickerOutcome::Value
                    } else {
                        DayPickerOutcome::Unchanged
                    }
                } else {
                    DayPickerOutcome::Unchanged
                }
            }
            _ => DayPickerOutcome::Continue,
        }
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut DayPickerState,
    focus: bool,
    event: &crossterm::event::Event,
) -> DayPickerOutcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut DayPickerState,
    event: &crossterm::event::Event,
) -> DayPickerOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_width() {
        assert_eq!(item_width(76, 4, 7), (76 - 6 * 4) / 7);
        assert_eq!(item_width(70, 0, 7), 10);
        assert_eq!(item_width(20, 1, 2), 9);
        assert_eq!(item_width(10, 1, 1), 10);
        assert_eq!(item_width(5, 4, 7), 0);
        assert_eq!(item_width(80, 4, 0), 0);
    }

    #[test]
    fn test_layout_items() {
        let areas = layout_items(Rect::new(2, 3, 76, 5), 7, 4, 1);
        assert_eq!(areas.len(), 7);
        assert_eq!(areas[0], Rect::new(2, 3, 7, 1));
        assert_eq!(areas[1], Rect::new(13, 3, 7, 1));
        assert_eq!(areas[6], Rect::new(68, 3, 7, 1));

        let areas = layout_items(Rect::new(0, 0, 20, 1), 2, 0, 3);
        assert_eq!(areas, vec![Rect::new(0, 0, 10, 1), Rect::new(10, 0, 10, 1)]);

        assert!(layout_items(Rect::new(0, 0, 20, 1), 0, 4, 1).is_empty());
    }

    #[test]
    fn test_visual_style() {
        let colors = DayColors::default();
        assert_eq!(
            colors.visual_style(true),
            Style::new().bg(SELECTED_COLOR).fg(TEXT_COLOR)
        );
        assert_eq!(
            colors.visual_style(false),
            Style::new().bg(UNSELECTED_COLOR).fg(TEXT_COLOR)
        );

        let colors = DayColors {
            text_override: Some(Color::Yellow),
            ..Default::default()
        };
        assert_eq!(colors.visual_style(true).fg, Some(Color::Yellow));
        assert_eq!(colors.visual_style(false).fg, Some(Color::Yellow));
        assert_eq!(colors.visual_style(false).bg, Some(UNSELECTED_COLOR));
    }

    #[test]
    fn test_core() {
        let mut core = DayPickerCore::new();
        core.init(DaysModel::builtin().into_days(), false)
            .expect("init");
        assert!(core.selected_days().is_empty());

        assert!(core.tap(2));
        assert!(core.tap(4));
        let sel = core.selected_days();
        assert_eq!(sel.len(), 2);
        assert_eq!(sel[0].id, 3);
        assert_eq!(sel[1].id, 5);

        assert!(!core.tap(7));

        core.set_enabled(false);
        assert!(!core.tap(2));
        assert!(core.is_selected(2));
    }

    #[test]
    fn test_width() {
        let mut state = DayPickerState::new();
        state
            .set_days(vec![
                Day::new(1).with_text(Lang::En, "Sunday", "Sun"),
                Day::new(2).with_text(Lang::En, "Monday", "Mon"),
            ])
            .expect("days");
        assert_eq!(DayPicker::new().spacing(4).width(&state), 2 * 6 + 4);
        assert_eq!(DayPicker::new().full_text(false).spacing(1).width(&state), 7);

        let long = "x".repeat(400);
        let days = (0..200)
            .map(|i| Day::new(i).with_text(Lang::En, long.as_str(), "x"))
            .collect();
        state.set_days(days).expect("days");
        assert_eq!(DayPicker::new().width(&state), u16::MAX);
        assert_eq!(DayPicker::new().full_text(false).spacing(0).width(&state), 200);
    }
}
