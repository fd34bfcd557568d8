use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use signalinfo::config::MonitorConfig;
use signalinfo::display::{DisplaySlot, ScreenWriter, SlotBindings};
use signalinfo::metric::Metric;
use signalinfo::output::{OutputFormat, SignalReading, create_formatter};
use signalinfo::session::MonitorSession;
use signalinfo::telephony::{ReaderSource, SnapshotSource};

/// Cellular signal-strength monitor
#[derive(Parser, Debug)]
#[command(name = "signalinfo")]
#[command(about = "Display cellular signal metrics from telephony snapshots", long_about = None)]
#[command(version)]
struct Args {
    /// Replay snapshots from a capture file instead of reading stdin
    #[arg(short, long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stream one line per update instead of redrawing the screen
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Stop after this many updates
    #[arg(long, value_name = "COUNT")]
    max_updates: Option<u64>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = match &args.config {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig::default(),
    };

    let source: Box<dyn SnapshotSource> = match &args.replay {
        Some(path) => {
            log::info!("replaying snapshots from {}", path.display());
            Box::new(ReaderSource::from_path(path)?)
        }
        None => Box::new(ReaderSource::stdin()),
    };

    let mut session = MonitorSession::new(source, config.sanitize.clone());
    session.start();

    let result = match args.format {
        Some(format) => run_stream(&mut session, format, args.verbose > 0, args.max_updates),
        None => run_screen(&mut session, &config, args.max_updates),
    };

    session.stop();
    result
}

/// A labeled line of the terminal screen.
struct TerminalSlot {
    text: String,
}

impl DisplaySlot for TerminalSlot {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Screen mode: device header once, then the full metric block per update.
fn run_screen(
    session: &mut MonitorSession<Box<dyn SnapshotSource>>,
    config: &MonitorConfig,
    max_updates: Option<u64>,
) -> Result<()> {
    let device = &config.device;
    println!("Phone:      {}", device.name_line());
    println!("Model:      {}", device.model_line());
    println!("OS:         {}", device.os_line());
    println!("Carrier:    {}", device.operator);
    println!("Build host: {}", device.build_host);

    let mut bindings = SlotBindings::new(Metric::ALL.iter().map(|&metric| {
        (
            metric,
            TerminalSlot {
                text: config.display.placeholder.clone(),
            },
        )
    }));
    let writer = ScreenWriter::new(&config.display);

    while let Some(snapshot) = session.next()? {
        let updated = writer.write(&snapshot, &mut bindings);
        log::debug!("display pass updated {} slots", updated);

        println!("---");
        for (metric, slot) in bindings.iter() {
            println!("{:<22}{}", format!("{}:", metric.label()), slot.text);
        }

        if max_updates.is_some_and(|max| session.updates_seen() >= max) {
            break;
        }
    }

    Ok(())
}

/// Stream mode: one formatter line per update (for piping).
fn run_stream(
    session: &mut MonitorSession<Box<dyn SnapshotSource>>,
    format: OutputFormat,
    verbose: bool,
    max_updates: Option<u64>,
) -> Result<()> {
    let formatter = create_formatter(format, verbose);
    if let Some(header) = formatter.header() {
        println!("{}", header);
    }

    while let Some(snapshot) = session.next()? {
        let reading = SignalReading::from_snapshot(&snapshot);
        println!("{}", formatter.format(&reading));

        if max_updates.is_some_and(|max| session.updates_seen() >= max) {
            break;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };

    // RUST_LOG still overrides the flag-derived default.
    Builder::new().filter_level(level).parse_default_env().init();
}
