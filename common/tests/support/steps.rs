use std::convert::Infallible;
use std::str::FromStr;

/// Text supplied via a behaviour step, with surrounding quotes removed.
#[derive(Clone, Debug)]
pub struct StepText {
    raw: String,
}

impl FromStr for StepText {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let raw = input
            .trim()
            .trim_matches(|candidate| matches!(candidate, '"' | '\''))
            .to_owned();

        Ok(Self { raw })
    }
}

impl StepText {
    /// Consumes the step value, yielding the unquoted string.
    pub fn into_inner(self) -> String {
        self.raw
    }

    /// Splits a comma-separated list, trimming each entry.
    #[allow(dead_code, reason = "only the resolver suite passes argument lists")]
    pub fn into_list(self) -> Vec<String> {
        if self.raw.is_empty() {
            return Vec::new();
        }
        self.raw.split(',').map(|item| item.trim().to_owned()).collect()
    }
}
