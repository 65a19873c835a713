use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use kateb_i18n::{
    DateOptions, Direction, Localizer, MonthStyle, NumberOptions, WeekdayStyle, languages, segment,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NumberStyleArg {
    Decimal,
    Percent,
    Currency,
}

#[derive(Debug, Parser)]
#[command(name = "kateb-tester", version)]
#[command(about = "QA tools for the Kateb localization core")]
struct Args {
    /// Language to run under
    #[arg(long, default_value = "en", global = true)]
    lang: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the locale registry
    Langs,
    /// Resolve a translation key, optionally with key=value params
    Resolve {
        key: String,
        /// Interpolation params as key=value pairs
        #[arg(long, value_name = "KEY=VALUE")]
        param: Vec<String>,
    },
    /// Split text into directed runs under the active language's direction
    Segment {
        text: String,
        /// Emit runs as JSON instead of colored text
        #[arg(long)]
        json: bool,
    },
    /// Audit the dictionary for entries missing a locale
    Coverage,
    /// Format a number under the active locale
    Number {
        value: f64,
        #[arg(long, value_enum, default_value_t = NumberStyleArg::Decimal)]
        style: NumberStyleArg,
    },
    /// Format an ISO date (YYYY-MM-DD) under the active locale
    Date {
        date: String,
        /// Use numeric month instead of the long month name
        #[arg(long)]
        numeric: bool,
        /// Prefix the full weekday name
        #[arg(long)]
        weekday: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut loc = Localizer::in_memory();
    if !loc.change_language(&args.lang) {
        bail!(
            "unsupported language {:?}; registry has: {}",
            args.lang,
            languages()
                .iter()
                .map(|l| l.code)
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    match args.command {
        Command::Langs => cmd_langs(),
        Command::Resolve { key, param } => cmd_resolve(&loc, &key, &param),
        Command::Segment { text, json } => cmd_segment(&loc, &text, json),
        Command::Coverage => cmd_coverage(&loc),
        Command::Number { value, style } => {
            let opts = match style {
                NumberStyleArg::Decimal => NumberOptions::default(),
                NumberStyleArg::Percent => NumberOptions::percent(),
                NumberStyleArg::Currency => NumberOptions::currency(),
            };
            println!("{}", loc.format_number(value, &opts));
            Ok(())
        }
        Command::Date {
            date,
            numeric,
            weekday,
        } => cmd_date(&loc, &date, numeric, weekday),
    }
}

fn cmd_langs() -> Result<()> {
    for lang in languages() {
        println!(
            "{}  {:<8} {:<10} {:<6} {}",
            lang.flag,
            lang.code.bold(),
            lang.name,
            lang.direction.as_str(),
            lang.native_name
        );
    }
    Ok(())
}

fn cmd_resolve(loc: &Localizer, key: &str, params: &[String]) -> Result<()> {
    let mut parsed: BTreeMap<&str, &str> = BTreeMap::new();
    for pair in params {
        let (k, v) = pair
            .split_once('=')
            .with_context(|| format!("param {pair:?} is not KEY=VALUE"))?;
        parsed.insert(k, v);
    }
    println!("{}", loc.tr(key, &parsed));
    Ok(())
}

fn cmd_segment(loc: &Localizer, text: &str, json: bool) -> Result<()> {
    let runs = segment(text, loc.direction());
    if json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
        return Ok(());
    }
    for run in &runs {
        let tag = match run.direction {
            Direction::Ltr => "ltr".green(),
            Direction::Rtl => "rtl".yellow(),
        };
        println!("{tag}  {:?}", run.text);
    }
    log::debug!("{} runs for {} bytes", runs.len(), text.len());
    Ok(())
}

fn cmd_coverage(loc: &Localizer) -> Result<()> {
    let gaps = loc.table().coverage_gaps();
    if gaps.is_empty() {
        println!(
            "{} all {} entries cover the registry",
            "ok".green().bold(),
            loc.table().leaf_paths().len()
        );
        return Ok(());
    }
    for gap in &gaps {
        println!(
            "{} {} missing: {}",
            "gap".red().bold(),
            gap.path,
            gap.missing.join(", ")
        );
    }
    bail!("{} entries with coverage gaps", gaps.len());
}

fn cmd_date(loc: &Localizer, date: &str, numeric: bool, weekday: bool) -> Result<()> {
    let parsed: NaiveDate = date
        .parse()
        .with_context(|| format!("{date:?} is not a YYYY-MM-DD date"))?;
    let opts = DateOptions {
        month: if numeric {
            MonthStyle::Numeric
        } else {
            MonthStyle::Long
        },
        weekday: weekday.then_some(WeekdayStyle::Long),
    };
    println!("{}", loc.format_date(parsed, &opts));
    Ok(())
}
