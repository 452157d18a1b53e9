#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    /// Kept raw so the whole-number check can report its own message.
    pub length: Option<String>,
    pub number: Option<usize>,
}
