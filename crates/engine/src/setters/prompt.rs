//! Values typed in at activation time.

use crate::error::SetterError;
use crate::prompt::Prompter;

pub(super) fn resolve(
    prompter: &mut dyn Prompter,
    variable: &str,
    masked: bool,
) -> Result<String, SetterError> {
    tracing::debug!(variable = %variable, masked, "Prompting for value");
    prompter.prompt(variable, masked).map_err(SetterError::Prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ReaderPrompter;
    use std::io::Cursor;

    #[test]
    fn test_label_is_variable_name() {
        let mut prompter = ReaderPrompter::new(Cursor::new("typed\n"), Vec::new());

        let value = resolve(&mut prompter, "DB_PASSWORD", true).unwrap();

        assert_eq!(value, "typed");
        assert_eq!(prompter.into_output(), b"DB_PASSWORD: ".to_vec());
    }
}
