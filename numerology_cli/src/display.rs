//! Plain-text rendering of a reading.

use numerology_core::{narrative, Reading};
use std::io::{self, Write};

/// A zero core number means "no value"
fn cell(n: u32) -> String {
    if n == 0 {
        "-".to_string()
    } else {
        n.to_string()
    }
}

fn digit_list(digits: &[u32]) -> String {
    if digits.is_empty() {
        "none".to_string()
    } else {
        digits
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn write_reading<W: Write>(out: &mut W, raw_name: &str, reading: &Reading) -> io::Result<()> {
    let core = &reading.core;
    let name = raw_name.trim();

    writeln!(out, "╭─────────────────────────────────────────╮")?;
    writeln!(out, "│  NUMEROLOGY READING")?;
    writeln!(out, "╰─────────────────────────────────────────╯")?;
    writeln!(out)?;
    writeln!(out, "  Name:       {}", if name.is_empty() { "—" } else { name })?;
    writeln!(out, "  Birth date: {}", reading.birth_date)?;
    writeln!(out)?;

    // North = Personality, West = Life Path, centre = Destiny, East = Maturity, South = Soul
    writeln!(out, "Core numbers")?;
    writeln!(out, "  {:>14}  {:^14}", "", format!("PN {}", cell(core.personality)))?;
    writeln!(
        out,
        "  {:>14}  {:^14}  {:<14}",
        format!("LP {}", cell(core.life_path)),
        format!("DP {}", cell(core.destiny)),
        format!("MP {}", cell(core.maturity))
    )?;
    writeln!(out, "  {:>14}  {:^14}", "", format!("SP {}", cell(core.soul)))?;
    writeln!(out)?;
    writeln!(out, "  Life Path:   {}", cell(core.life_path))?;
    writeln!(out, "  Destiny:     {}", cell(core.destiny))?;
    writeln!(out, "  Soul:        {}", cell(core.soul))?;
    writeln!(out, "  Personality: {}", cell(core.personality))?;
    writeln!(out, "  Maturity:    {}", cell(core.maturity))?;
    writeln!(out)?;

    let intensity = &reading.intensity;
    writeln!(out, "Intensity ({})", intensity.source)?;
    let header: Vec<String> = (1..=9).map(|d| format!("#{}", d)).collect();
    let counts: Vec<String> = (1..=9)
        .map(|d| format!("{:>2}", intensity.count(d)))
        .collect();
    writeln!(out, "  {}", header.join(" "))?;
    writeln!(out, "  {}", counts.join(" "))?;
    writeln!(out, "  Strong (3+):  {}", digit_list(&intensity.strong))?;
    writeln!(out, "  Missing (0):  {}", digit_list(&intensity.missing))?;
    writeln!(out)?;

    let cycles = &reading.cycles;
    writeln!(out, "Four periods")?;
    write!(out, "  {:<11}", "Ages")?;
    for band in &cycles.ages {
        write!(out, "{:>8}", band.to_string())?;
    }
    writeln!(out)?;
    write!(out, "  {:<11}", "Pinnacle")?;
    for n in &cycles.pinnacles {
        write!(out, "{:>8}", n)?;
    }
    writeln!(out)?;
    write!(out, "  {:<11}", "Challenge")?;
    for n in &cycles.challenges {
        write!(out, "{:>8}", n)?;
    }
    writeln!(out)?;

    Ok(())
}

pub fn write_narrative<W: Write>(out: &mut W, reading: &Reading) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "How these were calculated")?;
    writeln!(out, "─────────────────────────────────────────")?;
    for rule in narrative::rules() {
        writeln!(out, "  • {}", rule)?;
    }
    writeln!(out)?;
    for step in narrative::explain(reading) {
        writeln!(out, "  {}: {}", step.label, step.detail)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerology_core::calculate;

    fn render(name: &str, date: &str) -> String {
        let reading = calculate(name, date).unwrap();
        let mut out = Vec::new();
        write_reading(&mut out, name, &reading).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_reading_shows_core_numbers() {
        let text = render("Anna", "1990-07-15");
        assert!(text.contains("Life Path:   5"));
        assert!(text.contains("Destiny:     3"));
        assert!(text.contains("Strong (3+):  none"));
        assert!(text.contains("Missing (0):  2, 3, 4, 6, 8"));
        assert!(text.contains("0–31"));
        // 1990-07-15 -> 1 9 9 7 1 5
        assert!(text.contains("  #1 #2 #3 #4 #5 #6 #7 #8 #9\n   2  0  0  0  1  0  1  0  2\n"));
    }

    #[test]
    fn test_empty_name_renders_dashes() {
        let text = render("", "1990-07-15");
        assert!(text.contains("Name:       —"));
        assert!(text.contains("Destiny:     -"));
        assert!(text.contains("Soul:        -"));
    }

    #[test]
    fn test_narrative_lists_steps() {
        let reading = calculate("Anna", "1990-07-15").unwrap();
        let mut out = Vec::new();
        write_narrative(&mut out, &reading).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Life Path: year 1990 -> 1"));
        assert!(text.contains("Challenges: month 7 -> 7"));
    }
}
