use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, NaiveTime};
use lorem_core::{
	Bounds, LatinCorpus, LoremError, RandomSource, SeededRandom, TextGenerator, TextShape,
};

/// Seeded source that counts every draw.
struct CountingRandom {
	inner: SeededRandom,
	calls: AtomicUsize,
}

impl CountingRandom {
	fn new(seed: u64) -> Self {
		Self { inner: SeededRandom::new(seed), calls: AtomicUsize::new(0) }
	}

	fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

impl RandomSource for CountingRandom {
	fn next_i64(&self, min: i64, max: i64) -> i64 {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.inner.next_i64(min, max)
	}

	fn next_f64(&self) -> f64 {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.inner.next_f64()
	}

	fn fill_bytes(&self, buffer: &mut [u8]) {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.inner.fill_bytes(buffer)
	}
}

fn counting(seed: u64) -> TextGenerator<CountingRandom, LatinCorpus> {
	TextGenerator::with_parts(CountingRandom::new(seed), LatinCorpus)
}

#[test]
fn number_and_integer_stay_in_bounds() {
	let generator = TextGenerator::seeded(100);
	let ranges = [
		(0i64, 0i64),
		(-1, 1),
		(i64::MIN, i64::MIN + 3),
		(i64::MAX - 2, i64::MAX),
		(-1_000, 50),
	];
	for (min, max) in ranges {
		for _ in 0..200 {
			let value = generator.number(min, max).unwrap();
			assert!(value >= min && value <= max, "{value} not in {min}..={max}");
		}
	}
	for _ in 0..200 {
		let value = generator.integer(i32::MIN, i32::MIN + 1).unwrap();
		assert!(value == i32::MIN || value == i32::MIN + 1);
	}
}

#[test]
fn exact_word_count_is_inclusive() {
	let generator = TextGenerator::seeded(101);
	for n in 1..=30u32 {
		let words = generator.words(Bounds::new(n, n), false, false).unwrap();
		let tokens: Vec<&str> = words.split(' ').collect();
		assert_eq!(tokens.len(), n as usize);
		assert!(tokens.iter().all(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_lowercase())));
	}
}

#[test]
fn sentences_have_clean_terminal_period() {
	let generator = TextGenerator::seeded(102);
	for _ in 0..500 {
		let sentence = generator.sentence(1..=30).unwrap();
		assert!(!sentence.contains(",."), "{sentence}");
		assert!(!sentence.contains(".."), "{sentence}");
		assert!(sentence.ends_with('.'));
		assert_eq!(sentence.matches('.').count(), 1);
	}
}

#[test]
fn paragraph_has_no_outer_whitespace() {
	let generator = TextGenerator::seeded(103);
	for _ in 0..100 {
		let paragraph = generator.paragraph(1..=10, 1..=6).unwrap();
		assert_eq!(paragraph, paragraph.trim());
		assert!(!paragraph.contains("  "));
	}
}

#[test]
fn chance_never_and_always() {
	let generator = TextGenerator::seeded(104);
	for n in 1..=64 {
		assert!(!generator.chance(0, n).unwrap());
		assert!(generator.chance(n, n).unwrap());
	}
}

#[test]
fn pick_from_single_and_empty() {
	let generator = TextGenerator::seeded(105);
	for _ in 0..20 {
		assert_eq!(*generator.pick(&[42]).unwrap(), 42);
	}
	let empty: Vec<String> = Vec::new();
	assert!(matches!(generator.pick(&empty), Err(LoremError::InvalidArgument { .. })));
}

#[test]
fn hex_number_of_five_digits() {
	let generator = TextGenerator::seeded(106);
	for _ in 0..100 {
		let hex = generator.hex_number(5).unwrap();
		assert_eq!(hex.len(), 5);
		assert!(hex.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')), "{hex}");
	}
}

#[test]
fn degenerate_date_time_span() {
	let generator = TextGenerator::seeded(107);
	let moment = NaiveDate::from_ymd_opt(1969, 7, 20).unwrap().and_hms_opt(20, 17, 40).unwrap();
	assert_eq!(generator.date_time(moment, moment).unwrap(), moment);
	let day = moment.date();
	assert_eq!(generator.date(day, day).unwrap(), day);
	let time = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
	assert_eq!(generator.time(time, time).unwrap(), time);
}

#[test]
fn invalid_paragraph_fails_before_any_draw() {
	let generator = counting(108);
	let err = generator.paragraph(5..=3, 2).unwrap_err();
	assert!(matches!(err, LoremError::OutOfRange { name: "word_count", .. }));
	assert_eq!(generator.random_source().calls(), 0);
}

#[test]
fn every_validation_precedes_randomness() {
	let generator = counting(109);
	assert!(generator.words(0, true, false).is_err());
	assert!(generator.sentence(4..=2).is_err());
	assert!(generator.paragraph(3, 0).is_err());
	assert!(generator.paragraphs(3, 2, 5..=1).is_err());
	assert!(generator.chance(5, 4).is_err());
	assert!(generator.number(1, 0).is_err());
	assert!(generator.integer(1, 0).is_err());
	assert!(generator.hex_number(0).is_err());
	assert!(generator.pick::<u8>(&[]).is_err());
	let day = NaiveDate::from_ymd_opt(2000, 1, 2).unwrap();
	assert!(generator.date(day, day.pred_opt().unwrap()).is_err());
	assert_eq!(generator.random_source().calls(), 0);
}

#[test]
fn paragraphs_draw_lazily() {
	let generator = counting(110);
	let paragraphs = generator.paragraphs(3, 2, 4).unwrap();
	// Only the paragraph count has been drawn
	assert_eq!(generator.random_source().calls(), 1);
	assert_eq!(paragraphs.len(), 4);

	let collected: Vec<String> = paragraphs.collect();
	assert_eq!(collected.len(), 4);
	for paragraph in &collected {
		assert_eq!(paragraph.matches('.').count(), 2);
		assert_eq!(paragraph.split(' ').count(), 6);
	}
	assert!(generator.random_source().calls() > 1);
}

#[test]
fn shaped_paragraphs_follow_shape() {
	let generator = TextGenerator::seeded(111);
	let shape = TextShape {
		words: Bounds::new(2, 3),
		sentences: Bounds::exact(2),
		paragraphs: Bounds::new(2, 4),
	};
	let paragraphs: Vec<String> = generator.paragraphs_shaped(&shape).unwrap().collect();
	assert!((2..=4).contains(&paragraphs.len()));
	for paragraph in paragraphs {
		assert_eq!(paragraph.matches('.').count(), 2);
		let words = paragraph.split(' ').count();
		assert!((4..=6).contains(&words));
	}
}
