//! Olympus Headless Derivation Harness
//!
//! Sweeps the character derivation pipeline over whole calendars and checks
//! its invariants. Runs entirely in-process — no rendering, no storage.
//!
//! Usage:
//!   cargo run -p olympus-simtest
//!   cargo run -p olympus-simtest -- --verbose
//!   cargo run -p olympus-simtest -- --birth-date 1990-04-15 --name Ariadne

use anyhow::{bail, Context};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use olympus_logic::calendar::{classify_month_day, classify_western, classify_year};
use olympus_logic::character::{assemble_character, GameCharacter};
use olympus_logic::creation::{submit_form, CreationForm};
use olympus_logic::element::{resolve_element, signs_of};
use olympus_logic::lexicon::{companion_type, numerology_meaning, primary_ability};
use olympus_logic::numerology::{reduce_numerology, MAX_NUMEROLOGY};
use olympus_logic::profile::{assemble_profile, describe_profile};
use olympus_logic::session::{GameState, TICKS_PER_PHASE};
use olympus_logic::signs::{ChineseSign, Element, WesternSign};
use olympus_logic::stats::{generate_stats, generate_stats_for, StatKind};

#[derive(Debug, Parser)]
#[command(name = "olympus-simtest", about = "Validate the Olympus derivation pipeline")]
struct Args {
    /// Print passing checks as well as failures.
    #[arg(long)]
    verbose: bool,

    /// Derive one character from this date (YYYY-MM-DD) and print it as JSON.
    #[arg(long)]
    birth_date: Option<String>,

    /// Name for the character derived with --birth-date.
    #[arg(long, requires = "birth_date")]
    name: Option<String>,

    /// First year of the numerology and Chinese cycle sweeps.
    #[arg(long, default_value_t = 1800)]
    from_year: i32,

    /// Last year (inclusive) of the numerology and Chinese cycle sweeps.
    #[arg(long, default_value_t = 2100)]
    to_year: i32,
}

/// Name used when --birth-date is given without --name.
const DEFAULT_NAME: &str = "Hero";

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(birth_date) = &args.birth_date {
        let name = args.name.as_deref().unwrap_or(DEFAULT_NAME);
        return print_character_sheet(name, birth_date);
    }

    check_year_range(args.from_year, args.to_year)?;

    println!("=== Olympus Derivation Harness ===\n");
    log::info!("Sweeping years {}..={}", args.from_year, args.to_year);

    let mut results = Vec::new();

    // 1. Western sign partition
    results.extend(validate_western_partition(args.verbose));

    // 2. Chinese cycle
    results.extend(validate_chinese_cycle(args.from_year, args.to_year));

    // 3. Element partition
    results.extend(validate_elements());

    // 4. Numerology range sweep
    results.extend(validate_numerology(args.from_year, args.to_year, args.verbose));

    // 5. Stat generation
    results.extend(validate_stats());

    // 6. Character assembly & lexicon
    results.extend(validate_characters());

    // 7. Save / restore
    results.extend(validate_records());

    // 8. Session clock
    results.extend(validate_session());

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || args.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        bail!("{} check(s) failed", failed);
    }
    Ok(())
}

/// Reject sweep bounds that are reversed or outside the calendar chrono can
/// represent.
fn check_year_range(from_year: i32, to_year: i32) -> anyhow::Result<()> {
    let supported = NaiveDate::MIN.year()..=NaiveDate::MAX.year();
    for (flag, year) in [("--from-year", from_year), ("--to-year", to_year)] {
        if !supported.contains(&year) {
            bail!(
                "{} {} is outside the supported years {}..={}",
                flag,
                year,
                supported.start(),
                supported.end()
            );
        }
    }
    if from_year > to_year {
        bail!("--from-year {} is after --to-year {}", from_year, to_year);
    }
    Ok(())
}

fn print_character_sheet(name: &str, birth_date: &str) -> anyhow::Result<()> {
    let form = CreationForm {
        name: name.to_string(),
        birth_date: birth_date.to_string(),
    };
    let character = match submit_form(&form) {
        Ok(c) => c,
        Err(errors) => {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            bail!("invalid input: {}", messages.join("; "));
        }
    };

    println!("{}", character.creation_announcement());
    println!("{}\n", describe_profile(&character.profile));
    let stats = character.stats();
    for kind in StatKind::ALL {
        println!(
            "  {:<9} {:>4}  ({:>3.0}%)",
            kind.label(),
            stats.get(kind),
            stats.bar_fraction(kind) * 100.0
        );
    }
    println!();
    let json = serde_json::to_string_pretty(&character).context("serializing character")?;
    println!("{}", json);
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixed calendar date")
}

fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    date(year, 1, 1)
        .iter_days()
        .take_while(move |d| d.year() == year)
}

// ── 1. Western Partition ────────────────────────────────────────────────

fn validate_western_partition(verbose: bool) -> Vec<TestResult> {
    println!("--- Western Signs ---");
    let mut results = Vec::new();

    for year in [2000, 2001] {
        let mut counts = [0u32; 12];
        for d in days_of_year(year) {
            counts[classify_western(d).index()] += 1;
        }
        if verbose {
            for sign in WesternSign::ALL {
                println!("  {} {:<12} {:>3} days", year, sign, counts[sign.index()]);
            }
        }
        let total: u32 = counts.iter().sum();
        let missing: Vec<_> = WesternSign::ALL
            .iter()
            .filter(|s| counts[s.index()] == 0)
            .collect();
        results.push(TestResult {
            name: format!("western_partition_{}", year),
            passed: missing.is_empty() && (total == 365 || total == 366),
            detail: format!("{} days classified, {} signs unreached", total, missing.len()),
        });
    }

    // Consecutive days move forward by at most one sign.
    let mut jumps = 0;
    let mut prev = classify_western(date(2001, 1, 1));
    for d in days_of_year(2001).skip(1) {
        let sign = classify_western(d);
        if sign != prev && sign.index() != (prev.index() + 1) % 12 {
            jumps += 1;
        }
        prev = sign;
    }
    results.push(TestResult {
        name: "western_ranges_contiguous".into(),
        passed: jumps == 0,
        detail: format!("{} out-of-order transitions", jumps),
    });

    // Day numbers past month end still land in a real sign.
    results.push(TestResult {
        name: "western_catch_all_pisces".into(),
        passed: classify_month_day(2, 30) == WesternSign::Pisces
            && classify_month_day(3, 20) == WesternSign::Pisces,
        detail: "unmatched (month, day) pairs fall to Pisces".into(),
    });

    results
}

// ── 2. Chinese Cycle ────────────────────────────────────────────────────

fn validate_chinese_cycle(from_year: i32, to_year: i32) -> Vec<TestResult> {
    println!("--- Chinese Cycle ---");
    let mut results = Vec::new();

    let broken: Vec<i32> = (from_year..to_year)
        .filter(|y| classify_year(y + 1).index() != (classify_year(*y).index() + 1) % 12)
        .collect();
    results.push(TestResult {
        name: "chinese_cycle_advances_yearly".into(),
        passed: broken.is_empty(),
        detail: format!(
            "{} years checked, {} breaks",
            to_year - from_year + 1,
            broken.len()
        ),
    });

    results.push(TestResult {
        name: "chinese_golden_years".into(),
        passed: classify_year(1990) == ChineseSign::Horse
            && classify_year(2000) == ChineseSign::Dragon
            && classify_year(2008) == ChineseSign::Rat,
        detail: "1990 Horse, 2000 Dragon, 2008 Rat".into(),
    });

    results
}

// ── 3. Elements ─────────────────────────────────────────────────────────

fn validate_elements() -> Vec<TestResult> {
    println!("--- Elements ---");
    let mut results = Vec::new();

    let sizes: Vec<usize> = Element::ALL.iter().map(|e| signs_of(*e).len()).collect();
    results.push(TestResult {
        name: "element_triads".into(),
        passed: sizes.iter().all(|n| *n == 3),
        detail: format!("signs per element: {:?}", sizes),
    });

    let inconsistent = days_of_year(2001)
        .map(assemble_profile)
        .filter(|p| p.element() != resolve_element(p.western_sign()))
        .count();
    results.push(TestResult {
        name: "element_follows_sign".into(),
        passed: inconsistent == 0,
        detail: format!("{} profiles with a foreign element", inconsistent),
    });

    results
}

// ── 4. Numerology ───────────────────────────────────────────────────────

fn validate_numerology(from_year: i32, to_year: i32, verbose: bool) -> Vec<TestResult> {
    println!("--- Numerology ---");
    let mut results = Vec::new();

    let mut histogram = [0u32; MAX_NUMEROLOGY as usize + 1];
    let mut out_of_range = 0;
    for year in from_year..=to_year {
        for d in days_of_year(year) {
            let n = reduce_numerology(d);
            if (1..=MAX_NUMEROLOGY).contains(&n) {
                histogram[n as usize] += 1;
            } else {
                out_of_range += 1;
            }
        }
    }
    results.push(TestResult {
        name: "numerology_range".into(),
        passed: out_of_range == 0,
        detail: format!("{} values outside 1..={}", out_of_range, MAX_NUMEROLOGY),
    });

    let two_digit: u32 = histogram[10..].iter().sum();
    let total: u32 = histogram.iter().sum();
    log::info!(
        "{} of {} dates reduce to 10 or more after the single extra pass",
        two_digit,
        total
    );
    if verbose {
        for (n, count) in histogram.iter().enumerate().skip(1) {
            println!("  {:>2} {:>7}  {}", n, count, numerology_meaning(n as u8));
        }
    }

    results.push(TestResult {
        name: "numerology_golden_1990_04_15".into(),
        passed: reduce_numerology(date(1990, 4, 15)) == 11,
        detail: "1+5+4+1+9+9+0 = 29 -> 11".into(),
    });

    results
}

// ── 5. Stats ────────────────────────────────────────────────────────────

fn validate_stats() -> Vec<TestResult> {
    println!("--- Stats ---");
    let mut results = Vec::new();

    let s = generate_stats_for(Element::Water, 7);
    results.push(TestResult {
        name: "stats_golden_water_7".into(),
        passed: (s.health, s.mana, s.strength, s.agility, s.wisdom, s.charisma)
            == (119, 134, 8, 13, 15, 17),
        detail: format!("{:?}", s),
    });

    let mut negative = 0;
    let mut over_ceiling = 0;
    for element in Element::ALL {
        for n in 1..=MAX_NUMEROLOGY {
            let stats = generate_stats_for(element, n);
            for kind in StatKind::ALL {
                if stats.get(kind) < 0 {
                    negative += 1;
                }
                if stats.get(kind) > kind.display_ceiling() {
                    over_ceiling += 1;
                }
            }
        }
    }
    results.push(TestResult {
        name: "stats_never_negative".into(),
        passed: negative == 0,
        detail: format!(
            "{} negative values, {} above display ceiling (allowed)",
            negative, over_ceiling
        ),
    });

    let profile = assemble_profile(date(1969, 7, 20));
    results.push(TestResult {
        name: "stats_pure".into(),
        passed: generate_stats(&profile) == generate_stats(&profile.clone()),
        detail: "identical profile -> identical block".into(),
    });

    results
}

// ── 6. Characters ───────────────────────────────────────────────────────

fn validate_characters() -> Vec<TestResult> {
    println!("--- Characters ---");
    let mut results = Vec::new();

    let hero = assemble_character(assemble_profile(date(1990, 4, 15)), "Ariadne");
    results.push(TestResult {
        name: "character_golden_1990".into(),
        passed: hero.level == 1
            && hero.primary_ability == "Flame Strike"
            && hero.secondary_ability == "Thundering Gallop"
            && hero.companion_type == "Swift Steed",
        detail: format!(
            "{} / {} / {}",
            hero.primary_ability, hero.secondary_ability, hero.companion_type
        ),
    });

    let mismatched = days_of_year(2002)
        .step_by(5)
        .map(|d| assemble_character(assemble_profile(d), "Echo"))
        .filter(|c| {
            c.primary_ability != primary_ability(c.profile.western_sign())
                || c.companion_type != companion_type(c.profile.chinese_sign())
                || c.stats() != generate_stats(&c.profile)
        })
        .count();
    results.push(TestResult {
        name: "character_matches_lookups".into(),
        passed: mismatched == 0,
        detail: format!("{} characters disagree with lexicon/stats", mismatched),
    });

    results
}

// ── 7. Records ──────────────────────────────────────────────────────────

fn validate_records() -> Vec<TestResult> {
    println!("--- Save / Restore ---");
    let mut results = Vec::new();

    let mut failures = 0;
    let mut checked = 0;
    for d in days_of_year(1984).step_by(3) {
        checked += 1;
        let hero = assemble_character(assemble_profile(d), "Penelope");
        let restored = hero
            .to_json()
            .and_then(|text| GameCharacter::from_json(&text));
        match restored {
            Ok(r) if r == hero => {}
            Ok(_) => failures += 1,
            Err(e) => {
                log::error!("{}: {}", d, e);
                failures += 1;
            }
        }
    }
    results.push(TestResult {
        name: "record_round_trip".into(),
        passed: failures == 0,
        detail: format!("{}/{} characters restored intact", checked - failures, checked),
    });

    let tampered = r#"{"westernSign":"Leo","chineseSign":"Ox","element":"Air",
        "birthDate":"1985-08-01","numerology":5}"#;
    results.push(TestResult {
        name: "record_rejects_foreign_element".into(),
        passed: olympus_logic::profile::ZodiacProfile::from_json(tampered).is_err(),
        detail: "Leo stored as Air is refused".into(),
    });

    results
}

// ── 8. Session ──────────────────────────────────────────────────────────

fn validate_session() -> Vec<TestResult> {
    println!("--- Session ---");
    let mut results = Vec::new();

    let mut session = GameState::default();
    let changes = (0..TICKS_PER_PHASE * 8)
        .filter_map(|_| session.tick())
        .count();
    results.push(TestResult {
        name: "session_full_days".into(),
        passed: changes == 8 && session.day_night_cycle == GameState::default().day_night_cycle,
        detail: format!("{} phase changes over {} ticks", changes, session.game_time),
    });

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep_years_accepted() {
        assert!(check_year_range(1800, 2100).is_ok());
        assert!(check_year_range(2000, 2000).is_ok());
    }

    #[test]
    fn test_year_beyond_calendar_rejected() {
        let err = check_year_range(300_000, 300_001).unwrap_err();
        assert!(err.to_string().contains("--from-year 300000"), "{}", err);
        assert!(check_year_range(1800, i32::MAX).is_err());
        assert!(check_year_range(i32::MIN, 1800).is_err());
    }

    #[test]
    fn test_reversed_years_rejected() {
        let err = check_year_range(2100, 1800).unwrap_err();
        assert!(err.to_string().contains("is after"), "{}", err);
    }

    #[test]
    fn test_sweep_at_calendar_edges_does_not_panic() {
        let (min, max) = (NaiveDate::MIN.year(), NaiveDate::MAX.year());
        assert!(check_year_range(min, max).is_ok());
        assert_eq!(days_of_year(max).last(), Some(NaiveDate::MAX));
        assert_eq!(validate_chinese_cycle(max - 1, max).len(), 2);
    }
}
