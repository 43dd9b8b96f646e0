// Copyright (C) 2024 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::{error::Error, fmt::Display};

/// Renders an error followed by its chain of causes, one per line.
pub struct RtailErrorFormatted<'a>(&'a dyn Error);

impl Display for RtailErrorFormatted<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let err = self.0;
        write!(f, "{err}")?;

        let mut source = err.source();
        if source.is_none() {
            return Ok(());
        }

        write!(f, "\nCaused by:")?;
        while let Some(err) = source {
            write!(f, "\n    {err}")?;
            source = err.source();
        }

        Ok(())
    }
}

pub fn backtraced_err(err: &dyn Error) -> RtailErrorFormatted<'_> {
    RtailErrorFormatted(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Leaf;

    impl Display for Leaf {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "leaf")
        }
    }

    impl Error for Leaf {}

    #[derive(Debug)]
    struct Wrapper(Leaf);

    impl Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "wrapper")
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn single_error_has_no_cause_section() {
        assert_eq!(backtraced_err(&Leaf).to_string(), "leaf");
    }

    #[test]
    fn causes_are_listed() {
        assert_eq!(
            backtraced_err(&Wrapper(Leaf)).to_string(),
            "wrapper\nCaused by:\n    leaf"
        );
    }
}
