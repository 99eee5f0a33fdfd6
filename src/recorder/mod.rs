//! Recorder module
//!
//! The record lifecycle: pick a recent entry, gather date/genre/duration,
//! and apply a single insert, update, or delete. Also builds the two reports.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use log::{debug, info, warn};

use crate::config::{Config, MAX_DATES_RANGE};
use crate::error::{Result, StudyLogError, ValidationError};
use crate::models::{DailyTotal, Entry, EntryId, GenreReport, NewEntry};
use crate::prompt::{parse_minutes, Prompter};
use crate::renderer::{date_label, entry_line};
use crate::store::Store;

const MINUTES_PROMPT: &str =
    "Enter your study time in minutes (ex. 1 hour and 10 minutes, enter 70)";

/// Values supplied up front; anything missing is asked for
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub minutes: Option<u32>,
}

/// Which entry an edit or delete applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Pick from the recent-entries menu
    Select,
    /// The `(k + 1)`-th most recent entry
    Offset(usize),
}

pub struct Recorder<'a, P: Prompter> {
    store: &'a Store,
    config: &'a Config,
    prompter: &'a mut P,
}

impl<'a, P: Prompter> Recorder<'a, P> {
    pub fn new(store: &'a Store, config: &'a Config, prompter: &'a mut P) -> Self {
        Self {
            store,
            config,
            prompter,
        }
    }

    /// Entries inside the listing window, most recent first
    pub fn list_recent(&self, now: NaiveDateTime) -> Result<Vec<Entry>> {
        let since = now
            .checked_sub_signed(self.window())
            .ok_or_else(|| out_of_range(self.config.limits.dates_range))?;
        self.store.list_recent(since, self.config.limits.display_limit)
    }

    /// Show the recent entries and let the user pick one
    pub fn select_recent(&mut self, message: &str, now: NaiveDateTime) -> Result<Entry> {
        let mut entries = self.list_recent(now)?;
        if entries.is_empty() {
            return Err(StudyLogError::NoRows);
        }

        let lines: Vec<String> = entries.iter().map(entry_line).collect();
        let index = self.prompter.select(message, &lines)?;
        self.prompter.notify(&lines[index])?;
        debug!("selected offset {} ({:?})", index, entries[index].id);

        Ok(entries.swap_remove(index))
    }

    pub fn create(&mut self, input: EntryInput, now: NaiveDateTime) -> Result<Entry> {
        let new_entry = self.gather(input, now)?;
        let id = self.store.insert(&new_entry, now)?;
        info!("created entry {:?}", id);
        self.fetch(id)
    }

    /// Rewrite the target entry; `created_at` is kept and `updated_at` becomes `now`
    pub fn edit(&mut self, target: Target, input: EntryInput, now: NaiveDateTime) -> Result<Entry> {
        let id = self.resolve(target, "Choose a date to edit.", now)?;
        let new_entry = self.gather(input, now)?;
        self.store.update(id, &new_entry, now)?;
        info!("edited entry {:?}", id);
        self.fetch(id)
    }

    /// Remove the target entry and return what was removed
    pub fn delete(&mut self, target: Target, now: NaiveDateTime) -> Result<Entry> {
        let id = self.resolve(target, "Choose a date to delete.", now)?;
        let removed = self.fetch(id)?;
        self.store.delete(id)?;
        info!("deleted entry {:?}", id);
        Ok(removed)
    }

    fn window(&self) -> Duration {
        Duration::days(i64::from(self.config.limits.dates_range))
    }

    fn resolve(&mut self, target: Target, message: &str, now: NaiveDateTime) -> Result<EntryId> {
        match target {
            Target::Select => Ok(self.select_recent(message, now)?.id),
            Target::Offset(offset) => self
                .store
                .id_at_offset(offset)?
                .ok_or(StudyLogError::NoRows),
        }
    }

    fn fetch(&self, id: EntryId) -> Result<Entry> {
        self.store.get(id)?.ok_or(StudyLogError::NoRows)
    }

    fn gather(&mut self, input: EntryInput, now: NaiveDateTime) -> Result<NewEntry> {
        let date = match input.date {
            Some(date) => self.check_date(date, now)?,
            None => self.ask_date(now)?,
        };
        let genre = match input.genre {
            Some(genre) if self.config.has_genre(&genre) => genre,
            Some(genre) => return Err(ValidationError::UnknownGenre(genre).into()),
            None => self.ask_genre()?,
        };
        let minutes = match input.minutes {
            Some(minutes) => parse_minutes(&minutes.to_string())?,
            None => self.ask_minutes()?,
        };

        // the chosen day at the current time of day, to the second
        let learning_date = date.and_time(now.time().with_nanosecond(0).unwrap_or(now.time()));

        Ok(NewEntry {
            learning_date,
            genre,
            minutes,
        })
    }

    /// Today first, then `dates_range` earlier days
    fn date_choices(&self, now: NaiveDateTime) -> Result<Vec<NaiveDate>> {
        let today = now.date();
        let range = self.config.limits.dates_range;
        if range > MAX_DATES_RANGE {
            return Err(out_of_range(range));
        }
        (0..=i64::from(range))
            .map(|i| {
                today
                    .checked_sub_signed(Duration::days(i))
                    .ok_or_else(|| out_of_range(range))
            })
            .collect()
    }

    fn check_date(&self, date: NaiveDate, now: NaiveDateTime) -> Result<NaiveDate> {
        if self.date_choices(now)?.contains(&date) {
            Ok(date)
        } else {
            Err(ValidationError::InvalidDate(date.format("%Y-%m-%d").to_string()).into())
        }
    }

    fn ask_date(&mut self, now: NaiveDateTime) -> Result<NaiveDate> {
        let dates = self.date_choices(now)?;
        let labels: Vec<String> = dates.iter().copied().map(date_label).collect();

        let index = self.prompter.select("Choose a date of learning.", &labels)?;
        self.prompter.notify(&labels[index])?;
        Ok(dates[index])
    }

    fn ask_genre(&mut self) -> Result<String> {
        if self.config.genres.is_empty() {
            return Err(StudyLogError::Config("No genres configured".to_string()));
        }

        let index = self
            .prompter
            .select("Choose a genre of learning.", &self.config.genres)?;
        let genre = self.config.genres[index].clone();
        self.prompter.notify(&genre)?;
        Ok(genre)
    }

    fn ask_minutes(&mut self) -> Result<u32> {
        loop {
            let answer = self.prompter.input(MINUTES_PROMPT)?;
            match parse_minutes(&answer) {
                Ok(minutes) => {
                    self.prompter.notify(&minutes.to_string())?;
                    return Ok(minutes);
                }
                Err(e) => {
                    warn!("rejected study time {:?}: {}", answer, e);
                    self.prompter.notify(&format!("{}\nPlease re-type.", e))?;
                }
            }
        }
    }
}

/// Totals per genre plus the goal they count towards
pub fn genre_report(store: &Store, config: &Config) -> Result<GenreReport> {
    Ok(GenreReport {
        totals: store.totals_by_genre()?,
        total_minutes: store.total_minutes()?,
        goal_hours: config.goal.hours,
    })
}

pub fn daily_report(store: &Store) -> Result<Vec<DailyTotal>> {
    store.totals_by_day()
}

fn out_of_range(dates_range: u32) -> StudyLogError {
    StudyLogError::Config(format!(
        "limits.dates_range = {} is out of range (at most {})",
        dates_range, MAX_DATES_RANGE
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::TerminalPrompter;
    use std::io::Cursor;

    type TestPrompter = TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompter(input: &str) -> TestPrompter {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(21, 15, 30)
            .unwrap()
    }

    fn days_ago(n: i64) -> NaiveDateTime {
        now() - Duration::days(n)
    }

    fn seed(store: &Store, n: i64, genre: &str, minutes: u32) -> EntryId {
        store
            .insert(
                &NewEntry {
                    learning_date: days_ago(n),
                    genre: genre.to_string(),
                    minutes,
                },
                days_ago(n),
            )
            .unwrap()
    }

    #[test]
    fn test_create_interactive() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        // yesterday, javascript, 70 minutes
        let mut p = prompter("2\n2\n70\n");

        let entry = Recorder::new(&store, &config, &mut p)
            .create(EntryInput::default(), now())
            .unwrap();

        assert_eq!(entry.learning_date, days_ago(1));
        assert_eq!(entry.genre, "javascript");
        assert_eq!(entry.minutes, 70);
        assert_eq!(entry.created_at, now());
        assert_eq!(entry.updated_at, now());

        let output = String::from_utf8(p.into_writer()).unwrap();
        assert!(output.contains("  1) 5/10 (Fri)\n"));
        assert!(output.contains("  8) 5/3 (Fri)\n"));
        assert!(!output.contains("  9) "));
        assert!(output.contains("5/9 (Thu)\n"));
    }

    #[test]
    fn test_create_reprompts_until_valid_minutes() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("1\n1\n1441\nabc\n\n0\n45\n");

        let entry = Recorder::new(&store, &config, &mut p)
            .create(EntryInput::default(), now())
            .unwrap();
        assert_eq!(entry.minutes, 45);

        let output = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(output.matches("Please re-type.").count(), 4);
        assert!(output.contains("It's exceeding the time on a day."));
        assert!(output.contains("Please enter in half-width numbers."));
    }

    #[test]
    fn test_create_cancelled_writes_nothing() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("1\nq\n");

        let result = Recorder::new(&store, &config, &mut p)
            .create(EntryInput::default(), now());

        assert!(matches!(result, Err(StudyLogError::SelectionCancelled)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_create_minutes_eof_cancels() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("1\n1\nabc\n");

        let result = Recorder::new(&store, &config, &mut p)
            .create(EntryInput::default(), now());

        assert!(matches!(result, Err(StudyLogError::SelectionCancelled)));
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_create_from_flags_skips_prompts() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("");
        let input = EntryInput {
            date: Some(days_ago(3).date()),
            genre: Some("infra".to_string()),
            minutes: Some(90),
        };

        let entry = Recorder::new(&store, &config, &mut p)
            .create(input, now())
            .unwrap();

        assert_eq!(entry.learning_date, days_ago(3));
        assert_eq!(entry.genre, "infra");
        assert!(p.into_writer().is_empty());
    }

    #[test]
    fn test_create_rejects_bad_flags() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("");
        let mut recorder = Recorder::new(&store, &config, &mut p);

        let unknown_genre = EntryInput {
            date: Some(now().date()),
            genre: Some("cobol".to_string()),
            minutes: Some(30),
        };
        assert!(matches!(
            recorder.create(unknown_genre, now()),
            Err(StudyLogError::Validation(ValidationError::UnknownGenre(_)))
        ));

        let too_old = EntryInput {
            date: Some(days_ago(8).date()),
            genre: Some("ruby".to_string()),
            minutes: Some(30),
        };
        assert!(matches!(
            recorder.create(too_old, now()),
            Err(StudyLogError::Validation(ValidationError::InvalidDate(_)))
        ));

        let too_long = EntryInput {
            date: Some(now().date()),
            genre: Some("ruby".to_string()),
            minutes: Some(1500),
        };
        assert!(matches!(
            recorder.create(too_long, now()),
            Err(StudyLogError::Validation(ValidationError::ExceedsDay))
        ));

        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_created_entry_is_listed() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("1\n1\n60\n");
        let mut recorder = Recorder::new(&store, &config, &mut p);

        recorder.create(EntryInput::default(), now()).unwrap();
        let listed = recorder.list_recent(now()).unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(
            entry_line(&listed[0]),
            "2024/5/10      ruby              60 minutes"
        );
    }

    #[test]
    fn test_list_recent_respects_window_and_limit() {
        let store = Store::open_in_memory().unwrap();
        let mut config = Config::default();
        config.limits.display_limit = 2;
        for n in [0, 1, 2, 6, 9] {
            seed(&store, n, "ruby", 10);
        }
        let mut p = prompter("");
        let recorder = Recorder::new(&store, &config, &mut p);

        let listed = recorder.list_recent(now()).unwrap();
        let dates: Vec<NaiveDateTime> = listed.iter().map(|e| e.learning_date).collect();
        assert_eq!(dates, vec![days_ago(0), days_ago(1)]);
    }

    #[test]
    fn test_select_recent_without_rows() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        seed(&store, 30, "ruby", 10);
        let mut p = prompter("1\n");

        let result = Recorder::new(&store, &config, &mut p)
            .select_recent("Choose", now());

        assert!(matches!(result, Err(StudyLogError::NoRows)));
        assert!(p.into_writer().is_empty());
    }

    #[test]
    fn test_edit_selected_entry_only() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let newest = seed(&store, 0, "ruby", 10);
        let middle = seed(&store, 1, "ruby", 20);
        let oldest = seed(&store, 2, "ruby", 30);
        let before_newest = store.get(newest).unwrap();
        let before_oldest = store.get(oldest).unwrap();
        let before_middle = store.get(middle).unwrap().unwrap();

        // second listed entry, then today, html/css, 120 minutes
        let mut p = prompter("2\n1\n4\n120\n");
        let later = now() + Duration::minutes(5);
        let edited = Recorder::new(&store, &config, &mut p)
            .edit(Target::Select, EntryInput::default(), later)
            .unwrap();

        assert_eq!(edited.id, middle);
        assert_eq!(edited.genre, "html/css");
        assert_eq!(edited.minutes, 120);
        assert_eq!(edited.learning_date.date(), later.date());
        assert_eq!(edited.created_at, before_middle.created_at);
        assert_eq!(edited.updated_at, later);

        assert_eq!(store.get(newest).unwrap(), before_newest);
        assert_eq!(store.get(oldest).unwrap(), before_oldest);
        assert_eq!(store.count().unwrap(), 3);
    }

    #[test]
    fn test_edit_by_offset() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        seed(&store, 0, "ruby", 10);
        seed(&store, 1, "ruby", 20);
        let third = seed(&store, 2, "ruby", 30);

        let mut p = prompter("3\n2\n15\n");
        let edited = Recorder::new(&store, &config, &mut p)
            .edit(Target::Offset(2), EntryInput::default(), now())
            .unwrap();

        assert_eq!(edited.id, third);
        assert_eq!(edited.genre, "javascript");
        assert_eq!(edited.minutes, 15);
    }

    #[test]
    fn test_edit_offset_out_of_range() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        seed(&store, 0, "ruby", 10);
        let mut p = prompter("1\n1\n10\n");

        let result = Recorder::new(&store, &config, &mut p).edit(
            Target::Offset(1),
            EntryInput::default(),
            now(),
        );

        assert!(matches!(result, Err(StudyLogError::NoRows)));
    }

    #[test]
    fn test_edit_without_rows() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let mut p = prompter("1\n1\n1\n10\n");

        let result = Recorder::new(&store, &config, &mut p).edit(
            Target::Select,
            EntryInput::default(),
            now(),
        );

        assert!(matches!(result, Err(StudyLogError::NoRows)));
    }

    #[test]
    fn test_delete_selected_entry() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let keep_a = seed(&store, 0, "ruby", 10);
        let target = seed(&store, 1, "infra", 20);
        let keep_b = seed(&store, 2, "ruby", 30);

        let mut p = prompter("2\n");
        let removed = Recorder::new(&store, &config, &mut p)
            .delete(Target::Select, now())
            .unwrap();

        assert_eq!(removed.id, target);
        assert_eq!(removed.genre, "infra");
        assert_eq!(store.count().unwrap(), 2);
        assert!(store.get(target).unwrap().is_none());
        assert!(store.get(keep_a).unwrap().is_some());
        assert!(store.get(keep_b).unwrap().is_some());
    }

    #[test]
    fn test_delete_by_offset_on_shared_date() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        let first = seed(&store, 1, "ruby", 10);
        let second = seed(&store, 1, "infra", 20);

        let mut p = prompter("");
        let removed = Recorder::new(&store, &config, &mut p)
            .delete(Target::Offset(0), now())
            .unwrap();

        assert_eq!(removed.id, second);
        assert!(store.get(first).unwrap().is_some());
    }

    #[test]
    fn test_delete_cancelled() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        seed(&store, 0, "ruby", 10);
        let mut p = prompter("\n");

        let result = Recorder::new(&store, &config, &mut p)
            .delete(Target::Select, now());

        assert!(matches!(result, Err(StudyLogError::SelectionCancelled)));
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_genre_report() {
        let store = Store::open_in_memory().unwrap();
        let config = Config::default();
        seed(&store, 0, "ruby", 60);
        seed(&store, 1, "ruby", 30);
        seed(&store, 2, "js", 90);

        let report = genre_report(&store, &config).unwrap();

        let hours: Vec<(String, f64)> = report
            .totals
            .iter()
            .map(|t| (t.genre.clone(), crate::models::minutes_to_hours(t.minutes)))
            .collect();
        assert_eq!(
            hours,
            vec![("js".to_string(), 1.5), ("ruby".to_string(), 1.5)]
        );
        assert_eq!(report.total_hours(), 3.0);
        assert_eq!(report.remaining_hours(), 9997.0);
    }

    #[test]
    fn test_daily_report_same_day() {
        let store = Store::open_in_memory().unwrap();
        seed(&store, 0, "ruby", 60);
        seed(&store, 0, "infra", 30);

        let totals = daily_report(&store).unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].day, "2024-05-10");
        assert!(totals[0].genres.contains("ruby"));
        assert!(totals[0].genres.contains("infra"));
        assert_eq!(totals[0].minutes, 90);
    }

    #[test]
    fn test_huge_dates_range_is_a_config_error() {
        let store = Store::open_in_memory().unwrap();
        seed(&store, 0, "ruby", 10);
        let mut config = Config::default();
        config.limits.dates_range = u32::MAX;

        let mut p = prompter("1\n");
        let deleted = Recorder::new(&store, &config, &mut p)
            .delete(Target::Select, now());
        assert!(matches!(deleted, Err(StudyLogError::Config(_))));

        let mut p = prompter("1\n1\n1\n30\n");
        let edited = Recorder::new(&store, &config, &mut p).edit(
            Target::Select,
            EntryInput::default(),
            now(),
        );
        assert!(matches!(edited, Err(StudyLogError::Config(_))));

        let mut p = prompter("1\n1\n30\n");
        let created = Recorder::new(&store, &config, &mut p)
            .create(EntryInput::default(), now());
        assert!(matches!(created, Err(StudyLogError::Config(_))));
        assert!(p.into_writer().is_empty());

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_dates_range_at_limit_is_accepted() {
        let store = Store::open_in_memory().unwrap();
        let mut config = Config::default();
        config.limits.dates_range = MAX_DATES_RANGE;
        let mut p = prompter("1\n1\n30\n");

        let entry = Recorder::new(&store, &config, &mut p)
            .create(EntryInput::default(), now())
            .unwrap();

        assert_eq!(entry.learning_date, now());
        let output = String::from_utf8(p.into_writer()).unwrap();
        assert!(output.contains(&format!("  {}) ", MAX_DATES_RANGE + 1)));
    }
}
