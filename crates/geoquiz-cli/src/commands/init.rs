//! The `geoquiz init` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("geoquiz.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("countries").context("failed to create countries/")?;
    for (file, content) in SAMPLE_COUNTRIES {
        write_if_missing(&Path::new("countries").join(file), content)?;
    }

    println!("\nNext steps:");
    println!("  1. Add more countries to countries/<letter>.txt");
    println!("  2. Run: geoquiz validate");
    println!("  3. Run: geoquiz play");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# geoquiz configuration

# Directory holding a.txt .. z.txt
data_dir = "countries"

# File each finished session is appended to
score_file = "score.txt"

# "totals" appends a four-line summary, "record" a timestamped score record
format = "totals"

# Uncomment for a reproducible question order
# seed = 42
"#;

const SAMPLE_COUNTRIES: [(&str, &str); 4] = [
    (
        "a.txt",
        "Argentina:Buenos Aires
Home of the tango.
Aconcagua, the highest peak outside Asia, is here.
Its name comes from the Latin word for silver.

Australia:Canberra
It is both a country and a continent.
The Great Barrier Reef lies off its coast.
Kangaroos outnumber people.
",
    ),
    (
        "e.txt",
        "Egypt:Cairo
The Great Pyramid of Giza stands here.
The Nile flows north through it.
Its ancient script was deciphered with the Rosetta Stone.
",
    ),
    (
        "j.txt",
        "Japan:Tokyo
It is made up of over 6,800 islands.
Mount Fuji is its tallest mountain.
The Shinkansen bullet train started here.
",
    ),
    (
        "p.txt",
        "Peru:Lima
Machu Picchu sits in its Andes.
Potatoes were first domesticated here.
Lake Titicaca is on its border.

Portugal:Lisbon
Vasco da Gama sailed from here to India.
It produces half the world's cork.
Its national music is fado.
",
    ),
];
