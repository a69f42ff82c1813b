//! backdrop CLI
//!
//! Chooses a background image the way a page load would and shows the
//! result: the chosen path, the generated rule, a whole document with the
//! rule attached, or selection statistics.

mod dump;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use backdrop_common::warning::clear_warnings;
use backdrop_dom::{DomTree, serialize_document};
use backdrop_picker::{
    BackdropConfig, BackgroundPicker, ImagePath, PageLoad, RandomSource, RngSource, WriterSink,
};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;

/// backdrop — random full-page backgrounds
#[derive(Parser, Debug)]
#[command(name = "backdrop")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Which image would this page load show?
    backdrop pick

    # Also say what kind of locator it is
    backdrop pick --kind

    # Emit the rule for a reproducible choice
    backdrop css --seed 7 > background.css

    # Render a document with the background attached
    backdrop page --title Dashboard

    # Check the distribution over a custom image list
    backdrop stats --config images.json --trials 100000
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chosen image path
    Pick {
        #[command(flatten)]
        source: Source,
        /// Also print the kind of locator (absolute URL, path-absolute, ...)
        #[arg(long)]
        kind: bool,
    },
    /// Print the generated style rule
    Css(Source),
    /// Print an HTML document with the background attached
    Page {
        #[command(flatten)]
        source: Source,
        /// Document title
        #[arg(long, default_value = "")]
        title: String,
        /// Dump the document and selection as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Draw many times and report how often each image was chosen
    Stats {
        #[command(flatten)]
        source: Source,
        /// Number of draws
        #[arg(long, default_value = "10000")]
        trials: usize,
    },
}

#[derive(Args, Debug)]
struct Source {
    /// JSON config with `images` and optional `overlay`
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for a reproducible draw (default: OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Source {
    fn picker(&self) -> Result<BackgroundPicker> {
        let config = match &self.config {
            Some(path) => BackdropConfig::load(path)?,
            None => BackdropConfig::default(),
        };
        config.picker().context("invalid background configuration")
    }

    fn rng(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(RngSource::seeded(seed)),
            None => Box::new(RngSource::thread()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    clear_warnings();

    match cli.command {
        Command::Pick { source, kind } => {
            let picker = source.picker()?;
            let path = picker.choose(source.rng().as_mut());
            println!("{}", describe_choice(path, kind));
        }
        Command::Css(source) => {
            let picker = source.picker()?;
            let mut sink = WriterSink::new(io::stdout().lock());
            let _init = picker
                .initialize(source.rng().as_mut(), &mut sink)
                .context("failed to write style rule")?;
        }
        Command::Page {
            source,
            title,
            json,
        } => {
            let mut page = PageLoad::new(source.picker()?);
            let mut document = DomTree::html_document(&title);
            let init = page.initialize(source.rng().as_mut(), &mut document)?;

            if json {
                let value = serde_json::json!({
                    "background": init,
                    "document": dump::node_to_json(&document, document.root()),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", serialize_document(&document));
            }
        }
        Command::Stats { source, trials } => {
            let picker = source.picker()?;
            print_stats(&picker, source.rng().as_mut(), trials);
        }
    }

    Ok(())
}

fn describe_choice(path: &ImagePath, kind: bool) -> String {
    if kind {
        format!("{path} ({})", path.kind())
    } else {
        path.to_string()
    }
}

/// Bar width for the most frequent image.
const BAR_WIDTH: usize = 40;

/// How many of `trials` draws landed on each image, in configuration order.
fn count_choices(
    picker: &BackgroundPicker,
    rng: &mut dyn RandomSource,
    trials: usize,
) -> Vec<usize> {
    let mut counts = vec![0usize; picker.images().len().get()];
    for _ in 0..trials {
        counts[picker.choose_index(rng)] += 1;
    }
    counts
}

/// Width of the histogram bar for `count`, scaled against the largest count.
fn bar_len(count: usize, max: usize) -> usize {
    count * BAR_WIDTH / max.max(1)
}

#[allow(clippy::cast_precision_loss)]
fn share_percent(count: usize, trials: usize) -> f64 {
    if trials == 0 {
        0.0
    } else {
        count as f64 * 100.0 / trials as f64
    }
}

#[allow(clippy::cast_precision_loss)]
fn print_stats(picker: &BackgroundPicker, rng: &mut dyn RandomSource, trials: usize) {
    let counts = count_choices(picker, rng, trials);

    let max = counts.iter().copied().max().unwrap_or(0);
    let expected = trials as f64 / counts.len() as f64;
    println!(
        "{} {} draws over {} images (expected {expected:.1} each)",
        "Stats:".bold(),
        trials,
        counts.len()
    );
    for (path, &count) in picker.images().iter().zip(&counts) {
        let bar = "#".repeat(bar_len(count, max));
        println!(
            "  {:>8} {:>6.2}%  {}  {}",
            count,
            share_percent(count, trials),
            bar.green(),
            path.cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use backdrop_picker::{DrawSequence, FixedDraw, ImageSet};

    use super::*;

    fn picker(paths: &[&str]) -> BackgroundPicker {
        BackgroundPicker::new(ImageSet::new(paths.iter().copied()).unwrap())
    }

    #[test]
    fn test_zero_trials_counts_nothing() {
        let picker = picker(&["a.jpg", "b.jpg", "c.jpg"]);
        let counts = count_choices(&picker, &mut FixedDraw(0.5), 0);
        assert_eq!(counts, vec![0, 0, 0]);
        assert!(share_percent(0, 0).abs() < f64::EPSILON);
        assert_eq!(bar_len(0, 0), 0);
    }

    #[test]
    fn test_single_image_takes_every_draw() {
        let picker = picker(&["only.jpg"]);
        let counts = count_choices(&picker, &mut FixedDraw(0.999), 25);
        assert_eq!(counts, vec![25]);
        assert!((share_percent(25, 25) - 100.0).abs() < f64::EPSILON);
        assert_eq!(bar_len(25, 25), BAR_WIDTH);
    }

    #[test]
    fn test_counts_follow_draws() {
        let picker = picker(&["a.jpg", "b.jpg"]);
        let mut draws = DrawSequence::new(vec![0.0, 0.7, 0.9, 0.2, 0.6]);
        let counts = count_choices(&picker, &mut draws, 5);
        assert_eq!(counts, vec![2, 3]);
        assert_eq!(bar_len(2, 3), BAR_WIDTH * 2 / 3);
    }

    #[test]
    fn test_describe_choice() {
        let path = ImagePath::parse("/static/images/thai-1.jpeg").unwrap();
        assert_eq!(describe_choice(&path, false), "/static/images/thai-1.jpeg");
        assert_eq!(
            describe_choice(&path, true),
            "/static/images/thai-1.jpeg (path-absolute URL)"
        );

        let url = ImagePath::parse("https://cdn.example.com/a.jpg").unwrap();
        assert_eq!(describe_choice(&url, true), "https://cdn.example.com/a.jpg (absolute URL)");
    }
}
