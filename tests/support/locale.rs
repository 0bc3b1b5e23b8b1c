use std::convert::Infallible;
use std::str::FromStr;

/// Quoted value supplied by a behaviour step: a locale tag, a file name, or
/// catalog text.
#[derive(Clone, Debug)]
pub struct StepLocale(String);

impl FromStr for StepLocale {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            input
                .trim()
                .trim_matches(|candidate| matches!(candidate, '"' | '\''))
                .to_owned(),
        ))
    }
}

impl StepLocale {
    /// Consumes the step value, yielding the unquoted string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for StepLocale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
