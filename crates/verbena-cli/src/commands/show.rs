use anyhow::{bail, Context, Result};
use verbena_core::parse::parse_line;

pub fn show_festivals(lines: &[String]) -> Result<()> {
    if lines.is_empty() {
        bail!("no festival lines given; see `verbena show --help` for the line format");
    }

    for line in lines {
        let festival =
            parse_line(line).with_context(|| format!("could not parse line: {line}"))?;
        println!("{festival}");
    }

    Ok(())
}
