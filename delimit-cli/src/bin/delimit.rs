use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use delimit_engine::{Alphabet, Direction, FieldConfig, Preset, Selection};
use delimit_field::config::{FieldSettings, Settings};
use delimit_field::{DelimitedField, KeyEvent, KeyModifiers, Keysym, TextField, init_logging};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// delimit — format and edit delimited values (1,234,567 / 4820 6728 ...)
#[derive(Parser, Debug)]
#[command(name = "delimit")]
#[command(about = "Format delimited values and replay keystrokes through the edit engine", long_about = None)]
struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    field: FieldArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Field layout options. Precedence: flags > --preset > --config / user config.
#[derive(Args, Debug)]
struct FieldArgs {
    /// Built-in layout
    #[arg(long, value_enum, global = true)]
    preset: Option<PresetArg>,

    /// Settings file (defaults to the user config file)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Separator (exactly one character)
    #[arg(long, global = true)]
    separator: Option<String>,

    /// Payload characters per group
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Grouping direction
    #[arg(long, value_enum, global = true)]
    direction: Option<DirectionArg>,

    /// Accepted characters
    #[arg(long, value_enum, global = true)]
    alphabet: Option<AlphabetArg>,

    /// Maximum formatted length, separators included
    #[arg(long, global = true)]
    max_length: Option<usize>,

    /// Replace instead of push when the field is full
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    overwrite: Option<bool>,

    /// Append the separator as soon as a group is complete
    #[arg(long, global = true, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    prefill: Option<bool>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the formatted form of a value
    Format {
        /// Flat or partially formatted value
        value: String,
    },

    /// Print a value with every separator removed
    Strip {
        /// Formatted value
        value: String,
    },

    /// Replay keystrokes and print the field after each one.
    ///
    /// Every character of the script is typed as a key (upper-case letters
    /// with Shift held); `<bs>` is BackSpace.
    Type {
        /// Keystroke script, e.g. "1234<bs>5"
        script: String,

        /// Initial field contents
        #[arg(short, long, default_value = "")]
        buffer: String,

        /// Initial caret position (defaults to the end)
        #[arg(short, long, conflicts_with = "select")]
        caret: Option<usize>,

        /// Initial selection as START:END
        #[arg(short, long, value_parser = parse_selection)]
        select: Option<Selection>,

        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the effective field settings as TOML
    Config {
        /// Also write them to the user config file
        #[arg(long)]
        save: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PresetArg {
    Thousands,
    CardNumber,
    SerialKey,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Thousands => Preset::Thousands,
            PresetArg::CardNumber => Preset::CardNumber,
            PresetArg::SerialKey => Preset::SerialKey,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum DirectionArg {
    Ltr,
    Rtl,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Ltr => Direction::Ltr,
            DirectionArg::Rtl => Direction::Rtl,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AlphabetArg {
    Digits,
    Alphanumeric,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Digits => Alphabet::Digits,
            AlphabetArg::Alphanumeric => Alphabet::Alphanumeric,
        }
    }
}

fn parse_selection(s: &str) -> Result<Selection, String> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got {:?}", s))?;
    let start = start.trim().parse().map_err(|e| format!("bad start: {}", e))?;
    let end = end.trim().parse().map_err(|e| format!("bad end: {}", e))?;
    Ok(Selection::new(start, end))
}

/// Turn a keystroke script into key events
fn parse_script(script: &str) -> Vec<KeyEvent> {
    let mut keys = Vec::new();
    let mut rest = script;
    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("<bs>") {
            keys.push(KeyEvent::press(Keysym::BACKSPACE));
            rest = after;
            continue;
        }
        let modifiers = KeyModifiers::new().with_shift(ch.is_ascii_uppercase());
        keys.push(KeyEvent::new(Keysym::from_char(ch), modifiers, true));
        rest = &rest[ch.len_utf8()..];
    }
    keys
}

// --- field resolution ---

fn resolve_settings(args: &FieldArgs) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::load()?,
    };

    if let Some(preset) = args.preset {
        settings.field = FieldSettings::from_config(&FieldConfig::preset(preset.into()));
    }

    let field = &mut settings.field;
    if let Some(separator) = &args.separator {
        field.separator.clone_from(separator);
    }
    if let Some(width) = args.width {
        field.segment_width = width;
    }
    if let Some(direction) = args.direction {
        field.direction = direction.into();
    }
    if let Some(alphabet) = args.alphabet {
        field.alphabet = alphabet.into();
    }
    if args.max_length.is_some() {
        field.max_length = args.max_length;
    }
    if let Some(overwrite) = args.overwrite {
        field.overwrite = overwrite;
    }
    if let Some(prefill) = args.prefill {
        field.prefill = prefill;
    }

    Ok(settings)
}

// --- type subcommand ---

#[derive(Serialize)]
struct Step {
    key: String,
    consumed: bool,
    buffer: String,
    selection: [usize; 2],
}

/// Render the field with `|` at the caret, or `[...]` around the selection
fn render(host: &TextField) -> String {
    let selection = host.selection();
    let mut out = String::new();
    for (i, ch) in host.text().chars().enumerate() {
        if selection.is_empty() && i == selection.start {
            out.push('|');
        } else if !selection.is_empty() && i == selection.start {
            out.push('[');
        }
        if !selection.is_empty() && i == selection.end {
            out.push(']');
        }
        out.push(ch);
    }
    let len = host.len();
    if selection.is_empty() && selection.start == len {
        out.push('|');
    } else if !selection.is_empty() && selection.end == len {
        out.push(']');
    }
    out
}

fn key_label(key: &KeyEvent) -> String {
    if key.keysym == Keysym::BACKSPACE {
        "<bs>".to_string()
    } else {
        key.keysym.to_string()
    }
}

fn run_type(
    field: &DelimitedField,
    script: &str,
    buffer: String,
    caret: Option<usize>,
    select: Option<Selection>,
    json: bool,
) -> Result<()> {
    let mut host = TextField::with_text(buffer);
    if let Some(selection) = select {
        host.select(selection.start, selection.end);
    } else if let Some(caret) = caret {
        host.set_caret(caret);
    }

    for key in parse_script(script) {
        let result = field.process_key(&mut host, &key);
        debug!("{} -> {:?}", key_label(&key), result);

        if json {
            let step = Step {
                key: key_label(&key),
                consumed: result.consumed,
                buffer: host.text().to_string(),
                selection: [host.selection().start, host.selection().end],
            };
            println!("{}", serde_json::to_string(&step)?);
        } else {
            let marker = if result.consumed { ' ' } else { '!' };
            println!("{:>5}{} {}", key_label(&key), marker, render(&host));
        }
    }

    if !json {
        println!("payload: {}", field.payload(&host));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = resolve_settings(&cli.field)?;

    if cli.verbose {
        init_logging("delimit_engine=debug,delimit_field=debug,delimit=debug");
    } else {
        init_logging(&settings.logging.filter);
    }

    let config = settings
        .field
        .to_config()
        .context("Invalid field configuration")?;
    let field = DelimitedField::new(config);

    match cli.command {
        Commands::Format { value } => println!("{}", field.engine().format(&value)),
        Commands::Strip { value } => println!("{}", field.engine().strip(&value)),
        Commands::Type {
            script,
            buffer,
            caret,
            select,
            json,
        } => run_type(&field, &script, buffer, caret, select, json)?,
        Commands::Config { save } => {
            print!("{}", toml::to_string_pretty(&settings)?);
            if save {
                settings.save()?;
                if let Some(path) = Settings::config_file() {
                    eprintln!("Saved to {}", path.display());
                }
            }
        }
    }
    Ok(())
}
