//!
//! Weekday records and the sources they are loaded from.
//!
//! The records are read from a json payload of the form
//!
//! ```json
//! { "days": [
//!     { "dayID": 1,
//!       "arDay": "الأحد", "arDayAbbrev": "أحد",
//!       "enDay": "Sunday", "enDayAbbrev": "Sun",
//!       "deDay": "Sonntag", "deDayAbbrev": "So" },
//!     ...
//! ]}
//! ```
//!
//! Every field is optional. `isSelected` is accepted, but the
//! picker overwrites it with its default selection on initialization.
//!
use crate::lang::Lang;
use chrono::Weekday;
use log::warn;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::{fmt, io};

/// Key of the built-in list.
pub const DAYS_LIST: &str = "days_list";

static BUILTIN_DAYS: &str = include_str!("days_list.json");

/// One day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Day {
    #[serde(rename = "dayID")]
    pub id: i32,
    #[serde(rename = "arDay")]
    pub ar_day: String,
    #[serde(rename = "arDayAbbrev")]
    pub ar_day_abbrev: String,
    #[serde(rename = "enDay")]
    pub en_day: String,
    #[serde(rename = "enDayAbbrev")]
    pub en_day_abbrev: String,
    #[serde(rename = "deDay")]
    pub de_day: String,
    #[serde(rename = "deDayAbbrev")]
    pub de_day_abbrev: String,
    /// Selection flag.
    #[serde(rename = "isSelected")]
    pub selected: bool,
}

/// The list of days as it is stored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaysModel {
    pub days: Vec<Day>,
}

/// Errors when loading a list of days.
#[derive(Debug)]
#[non_exhaustive]
pub enum DaysError {
    /// The source could not be read.
    Io(io::Error),
    /// Invalid json.
    Json(serde_json::Error),
    /// Two records share the same dayID.
    DuplicateId(i32),
}

/// Loads a list of days by key.
///
/// This is the seam to whatever asset storage the application uses.
pub trait DaySource {
    fn load(&self, key: &str) -> Result<DaysModel, DaysError>;
}

/// The list that comes with the crate.
///
/// Contains Sunday to Saturday with ids 1 to 7,
/// texts in arabic, english and german.
/// Any key other than [DAYS_LIST] gives an empty list.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinDays;

/// Reads `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct DirDays {
    dir: PathBuf,
}

impl Default for Day {
    fn default() -> Self {
        Self {
            id: 0,
            ar_day: Default::default(),
            ar_day_abbrev: Default::default(),
            en_day: Default::default(),
            en_day_abbrev: Default::default(),
            de_day: Default::default(),
            de_day_abbrev: Default::default(),
            selected: true,
        }
    }
}

impl Day {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Full and abbreviated text in one language.
    pub fn with_text(
        mut self,
        lang: Lang,
        full: impl Into<String>,
        abbrev: impl Into<String>,
    ) -> Self {
        let (f, a) = match lang {
            Lang::Ar => (&mut self.ar_day, &mut self.ar_day_abbrev),
            Lang::En => (&mut self.en_day, &mut self.en_day_abbrev),
            Lang::De => (&mut self.de_day, &mut self.de_day_abbrev),
        };
        *f = full.into();
        *a = abbrev.into();
        self
    }

    /// Full name of the day.
    pub fn full_name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.ar_day,
            Lang::En => &self.en_day,
            Lang::De => &self.de_day,
        }
    }

    /// Abbreviated name of the day.
    pub fn abbrev_name(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.ar_day_abbrev,
            Lang::En => &self.en_day_abbrev,
            Lang::De => &self.de_day_abbrev,
        }
    }

    /// Full or abbreviated name.
    pub fn name(&self, lang: Lang, full: bool) -> &str {
        if full {
            self.full_name(lang)
        } else {
            self.abbrev_name(lang)
        }
    }

    /// Weekday for the ids 1..=7, counted from Sunday.
    pub fn weekday(&self) -> Option<Weekday> {
        match self.id {
            1 => Some(Weekday::Sun),
            2 => Some(Weekday::Mon),
            3 => Some(Weekday::Tue),
            4 => Some(Weekday::Wed),
            5 => Some(Weekday::Thu),
            6 => Some(Weekday::Fri),
            7 => Some(Weekday::Sat),
            _ => None,
        }
    }
}

impl DaysModel {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    /// The list that comes with the crate.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_DAYS).unwrap_or_else(|e| {
            warn!("builtin days invalid: {}", e);
            Self::default()
        })
    }

    /// Parse from a json string.
    pub fn from_json(json: &str) -> Result<Self, DaysError> {
        let model: DaysModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Parse from a reader.
    pub fn from_reader(rd: impl Read) -> Result<Self, DaysError> {
        let model: DaysModel = serde_json::from_reader(rd)?;
        model.validate()?;
        Ok(model)
    }

    /// Write as json.
    pub fn to_json(&self) -> Result<String, DaysError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks for duplicate ids.
    pub fn validate(&self) -> Result<(), DaysError> {
        validate_ids(&self.days)
    }

    pub fn into_days(self) -> Vec<Day> {
        self.days
    }
}

/// Checks that no two days share an id.
pub fn validate_ids(days: &[Day]) -> Result<(), DaysError> {
    let mut ids = HashSet::new();
    for day in days {
        if !ids.insert(day.id) {
            return Err(DaysError::DuplicateId(day.id));
        }
    }
    Ok(())
}

impl DaySource for BuiltinDays {
    fn load(&self, key: &str) -> Result<DaysModel, DaysError> {
        if key == DAYS_LIST {
            DaysModel::from_json(BUILTIN_DAYS)
        } else {
            Ok(DaysModel::default())
        }
    }
}

impl DirDays {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DaySource for DirDays {
    fn load(&self, key: &str) -> Result<DaysModel, DaysError> {
        let path = self.dir.join(format!("{}.json", key));
        let f = File::open(&path)?;
        DaysModel::from_reader(BufReader::new(f))
    }
}

impl Display for DaysError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DaysError::Io(e) => write!(f, "can't read days: {}", e),
            DaysError::Json(e) => write!(f, "invalid days json: {}", e),
            DaysError::DuplicateId(id) => write!(f, "duplicate dayID {}", id),
        }
    }
}

impl Error for DaysError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DaysError::Io(e) => Some(e),
            DaysError::Json(e) => Some(e),
            DaysError::DuplicateId(_) => None,
        }
    }
}

impl From<io::Error> for DaysError {
    fn from(value: io::Error) -> Self {
        DaysError::Io(value)
    }
}

impl From<serde_json::Error> for DaysError {
    fn from(value: serde_json::Error) -> Self {
        DaysError::Json(value)
    }
}
