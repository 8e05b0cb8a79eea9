// SorTTY: Step-by-step Sorting Visualizer for the Terminal

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use sortty::input::{parse_values, random_array, DEFAULT_ARRAY_SIZE};
use sortty::logging::{self, LogTarget};
use sortty::playback::DEFAULT_SPEED;
use sortty::snapshot::Trace;
use sortty::sorting::constants::TIM_SORT_RUN;
use sortty::sorting::{generate_trace_with, Algorithm, TraceConfig};
use sortty::ui::App;

#[derive(Parser)]
#[command(name = "sortty", version, about = "Step-by-step sorting algorithm visualizer")]
struct Cli {
    /// Algorithm to run (bubble, selection, insertion, quick, merge, heap,
    /// shell, counting, radix, tim)
    #[arg(short, long, default_value = "bubble")]
    algorithm: Algorithm,

    /// Number of random elements to sort
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Explicit input values, e.g. "5,3,8,1" (overrides --size)
    #[arg(long)]
    values: Option<String>,

    /// Seed for the random array
    #[arg(long)]
    seed: Option<u64>,

    /// Playback speed (10 = slowest, 500 = fastest)
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: u16,

    /// Run length for Tim sort
    #[arg(long, default_value_t = TIM_SORT_RUN)]
    tim_run: usize,

    /// Print every step to stdout instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Write diagnostic logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Print a trace as one line per step
fn print_trace(out: &mut impl Write, algorithm: Algorithm, trace: &Trace) -> io::Result<()> {
    writeln!(out, "{} ({} steps)", algorithm.name(), trace.len())?;
    for (index, step) in trace.iter().enumerate() {
        writeln!(
            out,
            "{:5} {:?} cmp={:?} swp={:?} sorted={} {}",
            index,
            step.array,
            step.comparison,
            step.swap,
            step.sorted.len(),
            step.summary()
        )?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_target = match (&cli.log_file, cli.headless) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    logging::init(log_target)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let input = match &cli.values {
        Some(text) => parse_values(text)?,
        None => random_array(&mut rng, cli.size),
    };
    info!(algorithm = cli.algorithm.name(), len = input.len(), "input ready");

    let config = TraceConfig {
        tim_run_size: cli.tim_run,
    };

    if cli.headless {
        let trace = generate_trace_with(cli.algorithm, &input, &config)?;
        let stdout = io::stdout();
        print_trace(&mut stdout.lock(), cli.algorithm, &trace)?;
        return Ok(());
    }

    // Fail before touching the terminal if the input is unsupported
    let mut app = App::new(cli.algorithm, input, config, rng, cli.speed)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
