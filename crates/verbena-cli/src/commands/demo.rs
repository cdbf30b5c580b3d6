use anyhow::Result;
use verbena_core::parse::parse_line;

const SAMPLE_LINES: [&str; 4] = [
    "Gazpatxo Rock : valencia: 28-02-2022  :1  :rock:punk : hiphop ",
    "black sound fest:badajoz:05-02-2022:  21:rock:  blues",
    "guitar bcn:barcelona: 28-01-2022 :  170:indie:pop:fusion",
    "  benidorm fest:benidorm:26-01-2022:3:indie: pop  :rock",
];

/// Prints the sample festivals and a few derived-query checks,
/// mirroring the library's self-test output.
pub fn run_demo() -> Result<()> {
    let mut festivals = Vec::with_capacity(SAMPLE_LINES.len());
    for line in SAMPLE_LINES {
        let festival = parse_line(line)?;
        println!("{festival}");
        festivals.push(festival);
    }

    let (first, second) = (&festivals[0], &festivals[1]);
    println!("\nChronological comparison:\n");
    if first.starts_before(second) {
        println!("{} starts before {}", first.name(), second.name());
    } else if first.starts_after(second) {
        println!("{} starts after {}", first.name(), second.name());
    } else {
        println!("{} starts the same day as {}", first.name(), second.name());
    }

    println!("\nConclusion checks:\n");
    for festival in [&festivals[3], &festivals[0]] {
        println!("{festival}");
        println!("{} concluded? {}\n", festival.name(), festival.has_concluded());
    }

    Ok(())
}
