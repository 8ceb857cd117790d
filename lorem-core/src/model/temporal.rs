use chrono::{Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use log::trace;

use crate::error::Result;
use crate::model::bounds::Bounds;
use crate::model::corpus::WordCorpus;
use crate::model::generator::TextGenerator;
use crate::model::random_source::RandomSource;

/// Lower bound used when no minimum date is given.
pub const DEFAULT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1950, 1, 1) {
	Some(date) => date,
	None => panic!("invalid default epoch"),
};

/// Upper bound used when no maximum time is given.
pub const DEFAULT_LATEST_TIME: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 0) {
	Some(time) => time,
	None => panic!("invalid default latest time"),
};

const MIDNIGHT: NaiveTime = match NaiveTime::from_hms_opt(0, 0, 0) {
	Some(time) => time,
	None => panic!("invalid midnight"),
};

impl<R: RandomSource, C: WordCorpus> TextGenerator<R, C> {
	/// Returns a date-time in `[min, max]`, with minute granularity.
	///
	/// The offset from `min` is a whole number of minutes, so
	/// `date_time(t, t)` always returns `t`.
	///
	/// # Errors
	/// `OutOfRange` if `max < min`.
	pub fn date_time(&self, min: NaiveDateTime, max: NaiveDateTime) -> Result<NaiveDateTime> {
		Bounds::new(min, max).check_order("max")?;

		let span = (max - min).num_minutes();
		let offset = self.rng.next_i64(0, span);
		trace!("date-time offset of {offset} minutes out of {span}");

		Ok(min.checked_add_signed(TimeDelta::minutes(offset)).unwrap_or(max))
	}

	/// Returns a date-time between `min` and now (local time).
	pub fn date_time_since(&self, min: NaiveDateTime) -> Result<NaiveDateTime> {
		self.date_time(min, Local::now().naive_local())
	}

	/// Returns a date-time between 1950-01-01 00:00 and now.
	pub fn date_time_default(&self) -> Result<NaiveDateTime> {
		self.date_time_since(DEFAULT_EPOCH.and_time(MIDNIGHT))
	}

	/// Returns a date in `[min, max]`.
	///
	/// The day offset is `floor(u * span_days)` with `u` uniform in `[0, 1)`.
	///
	/// # Errors
	/// `OutOfRange` if `max < min`.
	pub fn date(&self, min: NaiveDate, max: NaiveDate) -> Result<NaiveDate> {
		Bounds::new(min, max).check_order("max")?;

		let span = (max - min).num_days();
		let offset = (self.rng.next_f64() * span as f64).floor() as u64;
		trace!("date offset of {offset} days out of {span}");

		Ok(min.checked_add_days(Days::new(offset)).unwrap_or(max))
	}

	/// Returns a date between `min` and today.
	pub fn date_since(&self, min: NaiveDate) -> Result<NaiveDate> {
		self.date(min, Local::now().date_naive())
	}

	/// Returns a date between 1950-01-01 and today.
	pub fn date_default(&self) -> Result<NaiveDate> {
		self.date_since(DEFAULT_EPOCH)
	}

	/// Returns a time of day in `[min, max]`.
	///
	/// # Errors
	/// `OutOfRange` if `max < min`.
	pub fn time(&self, min: NaiveTime, max: NaiveTime) -> Result<NaiveTime> {
		Bounds::new(min, max).check_order("max")?;

		// Less than a day, always fits
		let span = (max - min).num_nanoseconds().unwrap_or(0);
		let offset = (self.rng.next_f64() * span as f64).floor() as i64;
		trace!("time offset of {offset}ns out of {span}");

		let (time, _) = min.overflowing_add_signed(TimeDelta::nanoseconds(offset));
		Ok(time.min(max))
	}

	/// Returns a time between `min` and 23:59:00.
	pub fn time_since(&self, min: NaiveTime) -> Result<NaiveTime> {
		self.time(min, DEFAULT_LATEST_TIME)
	}

	/// Returns a time between 00:00:00 and 23:59:00.
	pub fn time_default(&self) -> Result<NaiveTime> {
		self.time_since(MIDNIGHT)
	}
}
