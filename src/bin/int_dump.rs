use anyhow::{Context, Result, bail, format_err};
use clap::{Arg, ArgAction, ArgMatches, Command};
use dialoguer::Confirm;
use fast_int::Strategy;
use indoc::indoc;
use log::{Level, debug, info, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

#[path = "int_dump/record.rs"]
mod record;
#[path = "int_dump/settings.rs"]
mod settings;

use crate::record::{ParsedLine, Source, Summary, convert_line};
use crate::settings::{DumpSettings, OutputFormat, TargetType};

struct IntDump {
    settings: DumpSettings,
    inputs: Vec<PathBuf>,
    literals: Vec<String>,
    output: Box<dyn Write>,
    verbosity_level: Option<Level>,
}

impl IntDump {
    pub fn from_cli_matches(matches: &ArgMatches) -> Result<Self> {
        let inputs: Vec<PathBuf> = matches
            .get_many::<String>("INPUT")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        let literals: Vec<String> = matches
            .get_many::<String>("literal")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let target = matches
            .get_one::<String>("type")
            .map(|s| s.parse::<TargetType>())
            .transpose()
            .map_err(|e| format_err!(e))?
            .unwrap_or_default();

        let strategy = matches
            .get_one::<String>("scanner")
            .map(|s| s.parse::<Strategy>())
            .transpose()
            .map_err(|e| format_err!(e))?
            .unwrap_or_default();

        let format = matches
            .get_one::<String>("output-format")
            .map(|s| s.parse::<OutputFormat>())
            .transpose()
            .map_err(|e| format_err!(e))?
            .unwrap_or_default();

        let num_threads = matches.get_one::<usize>("num-threads").copied().unwrap_or(0);

        let settings = DumpSettings::new()
            .target(target)
            .strategy(strategy)
            .format(format)
            .verify(matches.get_flag("verify"))
            .num_threads(num_threads);

        let output: Box<dyn Write> = match matches.get_one::<String>("output-target") {
            Some(path) => {
                let prompt = !matches.get_flag("no-confirm-overwrite");
                Box::new(BufWriter::new(Self::create_output_file(path, prompt)?))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let verbosity_level = match matches.get_count("verbose") {
            0 => None,
            1 => Some(Level::Info),
            2 => Some(Level::Debug),
            _ => Some(Level::Trace),
        };

        Ok(IntDump {
            settings,
            inputs,
            literals,
            output,
            verbosity_level,
        })
    }

    /// Main entry point for `IntDump`
    pub fn run(&mut self) -> Result<()> {
        self.try_to_initialize_logging();
        self.try_to_configure_threads();

        debug!("{:?}", self.settings);

        let mut sources = Vec::with_capacity(self.inputs.len() + 1);
        if !self.literals.is_empty() {
            let lines = self.literals.iter().map(|l| l.as_bytes().to_vec()).collect();
            sources.push(Source {
                name: "literal".to_owned(),
                lines,
            });
        }
        for input in &self.inputs {
            sources.push(Self::read_source(input)?);
        }

        let mut summary = Summary::default();
        for source in &sources {
            info!("Parsing {} lines from {}", source.lines.len(), source.name);
            for parsed in self.convert_source(source)? {
                summary.record(parsed.status);
                self.dump_line(&parsed)?;
            }
        }
        self.output.flush()?;

        info!(
            "ok: {}, invalid_argument: {}, out_of_range: {}",
            summary.ok, summary.invalid_argument, summary.out_of_range
        );

        Ok(())
    }

    fn read_source(path: &Path) -> Result<Source> {
        let mut data = Vec::new();
        if path.as_os_str() == "-" {
            io::stdin()
                .lock()
                .read_to_end(&mut data)
                .context("failed to read stdin")?;
            return Ok(Source::from_bytes("stdin", &data));
        }

        File::open(path)
            .and_then(|mut f| f.read_to_end(&mut data))
            .with_context(|| format!("failed to read input `{}`", path.display()))?;
        Ok(Source::from_bytes(path.to_string_lossy(), &data))
    }

    #[cfg(feature = "multithreading")]
    fn convert_source<'a>(&self, source: &'a Source) -> Result<Vec<ParsedLine<'a>>> {
        let settings = &self.settings;
        source
            .lines
            .par_iter()
            .enumerate()
            .map(|(idx, line)| {
                convert_line(
                    &source.name,
                    idx + 1,
                    line,
                    settings.get_target(),
                    settings.get_strategy(),
                    settings.should_verify(),
                )
            })
            .collect()
    }

    #[cfg(not(feature = "multithreading"))]
    fn convert_source<'a>(&self, source: &'a Source) -> Result<Vec<ParsedLine<'a>>> {
        let settings = &self.settings;
        source
            .lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                convert_line(
                    &source.name,
                    idx + 1,
                    line,
                    settings.get_target(),
                    settings.get_strategy(),
                    settings.should_verify(),
                )
            })
            .collect()
    }

    fn dump_line(&mut self, parsed: &ParsedLine) -> Result<()> {
        match self.settings.get_format() {
            OutputFormat::Text => parsed.write_text(&mut self.output)?,
            OutputFormat::JsonLines => parsed.write_json(&mut self.output)?,
        }
        Ok(())
    }

    /// If `prompt` is passed, will display a confirmation prompt before overwriting files.
    fn create_output_file(path: impl AsRef<Path>, prompt: bool) -> Result<File> {
        let p = path.as_ref();

        if p.is_dir() {
            bail!(
                "There is a directory at {}, refusing to overwrite",
                p.display()
            );
        }

        if p.exists() {
            if prompt {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Are you sure you want to override output file at {}",
                        p.display()
                    ))
                    .default(false)
                    .interact()
                    .context("Failed to write confirmation prompt to term")?;

                if !confirmed {
                    bail!("Cancelled");
                }
            }
            return Ok(File::create(p)?);
        }

        // Ok to assume p is not an existing directory
        match p.parent() {
            Some(parent) => {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
                Ok(File::create(p)?)
            }
            None => bail!("Output file cannot be root."),
        }
    }

    fn try_to_initialize_logging(&self) {
        if let Some(level) = self.verbosity_level {
            if let Err(e) = TermLogger::init(
                level.to_level_filter(),
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            ) {
                eprintln!("Failed to initialize logging: {}", e);
            }
        }
    }

    #[cfg(feature = "multithreading")]
    fn try_to_configure_threads(&self) {
        let num_threads = self.settings.get_num_threads();
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
        {
            warn!("Failed to configure {} worker threads: {}", num_threads, e);
        }
    }

    #[cfg(not(feature = "multithreading"))]
    fn try_to_configure_threads(&self) {
        if self.settings.get_num_threads() > 1 {
            warn!("Built without `multithreading`, ignoring `--threads`");
        }
    }
}

fn cli() -> Command {
    Command::new("int_dump")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse newline-delimited decimal integer literals")
        .long_about(indoc!(r#"
            Parse newline-delimited decimal integer literals.

            Every line is converted into the selected integer type. Each line is
            reported with its status (`ok`, `invalid_argument`, `out_of_range`),
            the number of bytes consumed and, on success, the parsed value.
        "#))
        .arg(
            Arg::new("INPUT")
                .action(ArgAction::Append)
                .required_unless_present("literal")
                .help("Input files, one literal per line. Pass `-` to read stdin."),
        )
        .arg(
            Arg::new("literal")
                .long("literal")
                .short('l')
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .value_name("TEXT")
                .help("Parse TEXT as if it were an input line. Can be passed multiple times."),
        )
        .arg(
            Arg::new("type")
                .long("type")
                .short('t')
                .value_parser(TargetType::NAMES)
                .default_value("i64")
                .help("Sets the target integer type"),
        )
        .arg(
            Arg::new("scanner")
                .long("scanner")
                .short('s')
                .value_parser(["scalar", "swar"])
                .default_value("swar")
                .help("Sets the digit scanner"),
        )
        .arg(
            Arg::new("output-format")
                .long("format")
                .short('o')
                .value_parser(["text", "jsonl"])
                .default_value("text")
                .help("Sets the output format")
                .long_help(indoc!(r#"
                    Sets the output format:
                        "text"  - `<source>:<line>  <status>  <consumed>  <value>`, tab separated.
                        "jsonl" - one JSON object per line.
                "#)),
        )
        .arg(
            Arg::new("output-target")
                .long("output")
                .short('f')
                .value_name("PATH")
                .help(indoc!("
                    Writes output to the file specified instead of stdout, errors will still be printed to stderr.
                    Will ask for confirmation before overwriting files, to allow overwriting, pass `--no-confirm-overwrite`.
                    Will create parent directories if needed.")),
        )
        .arg(
            Arg::new("no-confirm-overwrite")
                .long("no-confirm-overwrite")
                .action(ArgAction::SetTrue)
                .help("When set, will not ask for confirmation before overwriting files, useful for automation"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .help("Run both scanners on every line and fail if they disagree"),
        )
        .arg(
            Arg::new("num-threads")
                .long("threads")
                .value_parser(clap::value_parser!(usize))
                .default_value("0")
                .help("Sets the number of worker threads, defaults to number of CPU cores."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("-v - info, -vv - debug, -vvv - trace. trace output is only available in debug builds, as it is extremely verbose"),
        )
}

fn main() {
    let matches = cli().get_matches();

    let result = IntDump::from_cli_matches(&matches).and_then(|mut app| app.run());
    if let Err(e) = result {
        eprintln!("{:?}", e);
        exit(1);
    }
}
