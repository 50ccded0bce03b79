use std::str::FromStr;

use fast_int::Strategy;

/// Output type selected with `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    #[default]
    I64,
    U64,
    Isize,
    Usize,
    Bool,
}

impl TargetType {
    pub const NAMES: [&'static str; 11] = [
        "i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64", "isize", "usize", "bool",
    ];
}

impl FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "i8" => TargetType::I8,
            "u8" => TargetType::U8,
            "i16" => TargetType::I16,
            "u16" => TargetType::U16,
            "i32" => TargetType::I32,
            "u32" => TargetType::U32,
            "i64" => TargetType::I64,
            "u64" => TargetType::U64,
            "isize" => TargetType::Isize,
            "usize" => TargetType::Usize,
            "bool" => TargetType::Bool,
            other => return Err(format!("unsupported type `{}`", other)),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::JsonLines),
            other => Err(format!("unsupported output format `{}`", other)),
        }
    }
}

/// How `int_dump` converts and reports each input line.
#[derive(Debug, Clone, Default)]
pub struct DumpSettings {
    target: TargetType,
    strategy: Strategy,
    format: OutputFormat,
    verify: bool,
    num_threads: usize,
}

impl DumpSettings {
    pub fn new() -> Self {
        DumpSettings::default()
    }

    pub fn target(mut self, target: TargetType) -> Self {
        self.target = target;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run both scanners on every line and fail on any disagreement.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Number of worker threads, `0` meaning one per core.
    ///
    /// Ignored when built without the `multithreading` feature.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn get_target(&self) -> TargetType {
        self.target
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn get_format(&self) -> OutputFormat {
        self.format
    }

    pub fn should_verify(&self) -> bool {
        self.verify
    }

    pub fn get_num_threads(&self) -> usize {
        self.num_threads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_name_parses() {
        for name in TargetType::NAMES {
            assert!(name.parse::<TargetType>().is_ok(), "{}", name);
        }
        assert!("i128".parse::<TargetType>().is_err());
    }

    #[test]
    fn test_builder() {
        let settings = DumpSettings::new()
            .target(TargetType::U8)
            .strategy(Strategy::Scalar)
            .format(OutputFormat::JsonLines)
            .verify(true)
            .num_threads(2);

        assert_eq!(settings.get_target(), TargetType::U8);
        assert_eq!(settings.get_strategy(), Strategy::Scalar);
        assert_eq!(settings.get_format(), OutputFormat::JsonLines);
        assert!(settings.should_verify());
        assert_eq!(settings.get_num_threads(), 2);
    }
}
