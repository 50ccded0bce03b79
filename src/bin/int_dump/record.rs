//! Per-line conversion and the records `int_dump` prints.

use std::fmt::Debug;
use std::io::Write;

use anyhow::{Result, bail};
use fast_int::{FromCharsResult, FromDecimal, Status, Strategy, from_chars, from_chars_swar};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use crate::settings::TargetType;

/// One parsed input line.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedLine<'a> {
    pub source: &'a str,
    pub line: usize,
    pub input: String,
    #[serde(serialize_with = "serialize_status")]
    pub status: Status,
    pub consumed: usize,
    pub value: Option<JsonValue>,
}

fn serialize_status<S: Serializer>(
    status: &Status,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(status.as_str())
}

impl ParsedLine<'_> {
    pub fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        match &self.value {
            Some(value) => writeln!(
                out,
                "{}:{}\t{}\t{}\t{}",
                self.source, self.line, self.status, self.consumed, value
            ),
            None => writeln!(
                out,
                "{}:{}\t{}\t{}\t-",
                self.source, self.line, self.status, self.consumed
            ),
        }
    }

    pub fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Lines of a single input, with line endings removed.
#[derive(Debug)]
pub struct Source {
    pub name: String,
    pub lines: Vec<Vec<u8>>,
}

impl Source {
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Self {
        if data.is_empty() {
            return Source {
                name: name.into(),
                lines: Vec::new(),
            };
        }

        let mut lines: Vec<Vec<u8>> = data
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
            .collect();

        // A trailing newline does not start another line.
        if data.ends_with(b"\n") {
            lines.pop();
        }

        Source {
            name: name.into(),
            lines,
        }
    }
}

fn convert<'a, T>(
    source: &'a str,
    line: usize,
    input: &[u8],
    strategy: Strategy,
    verify: bool,
) -> Result<ParsedLine<'a>>
where
    T: FromDecimal + Default + PartialEq + Debug + Into<JsonValue>,
{
    let mut value = T::default();
    let result = strategy.from_chars(input, &mut value);

    if verify {
        let (mut scalar_value, mut swar_value) = (T::default(), T::default());
        let scalar: FromCharsResult = from_chars(input, &mut scalar_value);
        let swar: FromCharsResult = from_chars_swar(input, &mut swar_value);
        if scalar != swar || scalar_value != swar_value {
            bail!(
                "scanners disagree on {}:{} ({:?}): scalar {:?} -> {:?}, swar {:?} -> {:?}",
                source,
                line,
                String::from_utf8_lossy(input),
                scalar,
                scalar_value,
                swar,
                swar_value
            );
        }
    }

    Ok(ParsedLine {
        source,
        line,
        input: String::from_utf8_lossy(input).into_owned(),
        status: result.status,
        consumed: result.consumed,
        value: result.is_ok().then(|| value.into()),
    })
}

/// Convert one line as `target`.
///
/// `line` is the 1-based line number used in the report.
pub fn convert_line<'a>(
    source: &'a str,
    line: usize,
    input: &[u8],
    target: TargetType,
    strategy: Strategy,
    verify: bool,
) -> Result<ParsedLine<'a>> {
    match target {
        TargetType::I8 => convert::<i8>(source, line, input, strategy, verify),
        TargetType::U8 => convert::<u8>(source, line, input, strategy, verify),
        TargetType::I16 => convert::<i16>(source, line, input, strategy, verify),
        TargetType::U16 => convert::<u16>(source, line, input, strategy, verify),
        TargetType::I32 => convert::<i32>(source, line, input, strategy, verify),
        TargetType::U32 => convert::<u32>(source, line, input, strategy, verify),
        TargetType::I64 => convert::<i64>(source, line, input, strategy, verify),
        TargetType::U64 => convert::<u64>(source, line, input, strategy, verify),
        TargetType::Isize => convert::<isize>(source, line, input, strategy, verify),
        TargetType::Usize => convert::<usize>(source, line, input, strategy, verify),
        TargetType::Bool => convert::<bool>(source, line, input, strategy, verify),
    }
}

/// Counts of each status, logged at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub ok: usize,
    pub invalid_argument: usize,
    pub out_of_range: usize,
}

impl Summary {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Ok => self.ok += 1,
            Status::InvalidArgument => self.invalid_argument += 1,
            Status::OutOfRange => self.out_of_range += 1,
        }
    }
}
