use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueHint};

use texa_logview::data::arrow_view::preview;
use texa_logview::{DisplayOptions, Session};

#[derive(Parser, Debug)]
#[command(author, version, about = "TEXA log export viewer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the recovered columns, units and time axis of an export
    Inspect(InspectArgs),
    /// Write the chart description for selected channels as JSON
    Chart(ChartArgs),
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// TEXA export (UTF-16, tab separated)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Number of data rows to preview
    #[arg(long, default_value_t = 10)]
    rows: usize,
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// TEXA export (UTF-16, tab separated)
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Channel to plot (repeatable, plotted in the given order)
    #[arg(short, long = "channel")]
    channels: Vec<String>,

    /// Plot every available channel
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "channels")]
    all_channels: bool,

    /// Display options JSON; flags below override it
    #[arg(long, value_hint = ValueHint::FilePath)]
    options: Option<PathBuf>,

    /// Plot raw values instead of 0..1 scaled curves
    #[arg(long, action = ArgAction::SetTrue)]
    no_normalize: bool,

    /// One synchronized panel per channel
    #[arg(long, action = ArgAction::SetTrue)]
    multi_panel: bool,

    /// Omit the time value from hover text
    #[arg(long, action = ArgAction::SetTrue)]
    hide_time: bool,

    /// Add the wall-clock time to hover text
    #[arg(long, action = ArgAction::SetTrue)]
    show_wall_clock: bool,

    /// Omit the channel name from hover text
    #[arg(long, action = ArgAction::SetTrue)]
    hide_label: bool,

    /// Disable spike lines
    #[arg(long, action = ArgAction::SetTrue)]
    no_spikes: bool,

    /// Start of the highlighted time range
    #[arg(long)]
    highlight_start: Option<f64>,

    /// End of the highlighted time range
    #[arg(long)]
    highlight_end: Option<f64>,

    /// Output path (`-` for stdout)
    #[arg(short, long, default_value = "-", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Pretty-print the JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,
}

impl ChartArgs {
    fn display_options(&self) -> Result<DisplayOptions> {
        let mut options = match &self.options {
            Some(path) => DisplayOptions::from_json_file(path)?,
            None => DisplayOptions::default(),
        };
        if self.no_normalize {
            options.normalize = false;
        }
        if self.multi_panel {
            options.multi_panel = true;
        }
        if self.hide_time {
            options.show_time = false;
        }
        if self.show_wall_clock {
            options.show_wall_clock = true;
        }
        if self.hide_label {
            options.show_channel_label = false;
        }
        if self.no_spikes {
            options.spike_lines = false;
        }
        if let Some(start) = self.highlight_start {
            options.highlight.start = start;
        }
        if let Some(end) = self.highlight_end {
            options.highlight.end = end;
        }
        Ok(options)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Inspect(args) => run_inspect(args),
        Command::Chart(args) => run_chart(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn report_warnings(session: &Session) {
    for warning in session.warnings() {
        eprintln!("Warning: {warning}");
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let session = Session::open(&args.input, DisplayOptions::default())?;
    let table = session.table();
    let series = session.series();

    println!("TEXA export recognised: {}", args.input.display());
    println!("{} data rows, {} columns", table.len(), table.columns.len());
    println!();
    for column in &table.columns {
        let unit = table.unit_for(&column.name).unwrap_or("-");
        println!("  {:<40} {:<8} {unit}", column.name, column.kind);
    }
    println!();
    println!("Time axis:  {}", series.time_axis.label);
    println!(
        "Wall clock: {}",
        series.wall_clock.as_deref().unwrap_or("(none)")
    );
    report_warnings(&session);

    if args.rows > 0 && !table.is_empty() {
        println!();
        println!("{}", preview(table, args.rows).context("rendering table preview")?);
    }
    Ok(())
}

fn run_chart(args: ChartArgs) -> Result<()> {
    let options = args.display_options()?;
    let mut session = Session::open(&args.input, options)?;
    report_warnings(&session);

    if args.all_channels {
        session.select_all();
    } else {
        for name in &args.channels {
            if !session.available_channels().contains(name) {
                eprintln!("Warning: '{name}' is not a selectable channel");
            }
        }
        session.select_channels(args.channels.iter().cloned());
    }

    let spec = session.render_spec();
    if spec.is_empty() {
        eprintln!("No channel selected. Available channels:");
        for name in session.available_channels() {
            eprintln!("  {name}");
        }
    }

    let writer: Box<dyn Write> = if args.output.as_os_str() == "-" {
        Box::new(io::stdout().lock())
    } else {
        Box::new(
            File::create(&args.output)
                .with_context(|| format!("creating {}", args.output.display()))?,
        )
    };
    let mut writer = io::BufWriter::new(writer);
    if args.pretty {
        serde_json::to_writer_pretty(&mut writer, spec)?;
    } else {
        serde_json::to_writer(&mut writer, spec)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    log::info!(
        "wrote {} traces across {} panels",
        spec.traces.len(),
        spec.panel_count()
    );
    Ok(())
}
