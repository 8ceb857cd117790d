use chrono::NaiveDate;
use log::info;
use lorem_core::{TextGenerator, TextShape, variants};

#[derive(Clone, Copy, Debug)]
enum Status {
    Draft,
    Published,
    Archived,
}

variants!(Status { Draft, Published, Archived });

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=trace shows every count drawn by the generator
    env_logger::init();

    // Process-wide generator, backed by the thread-local random source
    let lorem = TextGenerator::shared();

    // A single count is exact, a range is inclusive on both ends
    println!("Words: {}", lorem.words(5, true, false)?);
    println!("Sentence: {}", lorem.sentence(4..=10)?);
    println!("Paragraph: {}", lorem.paragraph(4..=10, 3..=5)?);

    // Paragraphs are generated lazily, one per iteration
    for (i, paragraph) in lorem.paragraphs(4..=10, 2..=4, 2..=3)?.enumerate() {
        println!("Paragraph {}: {}", i + 1, paragraph);
    }

    // Shapes can come from any serde format, missing fields use the defaults
    let shape = TextShape::default();
    info!("default shape: {shape:?}");
    println!("Shaped paragraphs: {}", lorem.paragraphs_shaped(&shape)?.count());

    // Invalid bounds are rejected before anything is drawn
    match lorem.paragraph(5..=3, 2) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Random primitives
    println!("Chance 1/3: {}", lorem.chance(1, 3)?);
    println!("Number: {}", lorem.number(-1_000, 1_000)?);
    println!("Hex: {}", lorem.hex_number(9)?);
    println!("Letter: {}", lorem.letter());
    println!("Status: {:?}", lorem.variant::<Status>()?);
    println!("Email: {}", lorem.email()?);
    println!("Pick: {}", lorem.pick(&["red", "green", "blue"])?);

    let since = NaiveDate::from_ymd_opt(2000, 1, 1).ok_or("invalid date")?;
    println!("Date: {}", lorem.date_since(since)?);
    println!("Date-time: {}", lorem.date_time_default()?);
    println!("Time: {}", lorem.time_default()?);

    // A seeded generator always prints the same sentence
    let seeded = TextGenerator::seeded(42);
    println!("Seeded: {}", seeded.sentence(6)?);

    Ok(())
}
