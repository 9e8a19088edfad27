use crate::error::GridSizeError;

/// Parse a grid size typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a whole number is
/// rejected outright rather than coerced; `"007"` is 7.
pub fn parse_grid_size(input: &str, min: usize, max: usize) -> Result<usize, GridSizeError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(GridSizeError::Empty);
    }
    let value: i64 = text
        .parse()
        .map_err(|_| GridSizeError::NotANumber(text.to_owned()))?;

    match usize::try_from(value) {
        Ok(size) if (min..=max).contains(&size) => Ok(size),
        _ => Err(GridSizeError::OutOfRange { value, min, max }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeValidation {
    /// Nothing typed yet
    Pending,
    Valid(usize),
    Invalid(GridSizeError),
}

/// Input state behind the resize dialog. Never blocks: each edit revalidates
/// and `submit` either yields a size or leaves the request open with a new
/// prompt.
#[derive(Debug, Clone)]
pub struct ResizeRequest {
    input: String,
    validation: ResizeValidation,
    empty_submitted: bool,
    min: usize,
    max: usize,
}

impl ResizeRequest {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            input: String::new(),
            validation: ResizeValidation::Pending,
            empty_submitted: false,
            min,
            max,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text field binding; call [`Self::revalidate`] after editing.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.revalidate();
    }

    pub fn revalidate(&mut self) {
        self.validation = match parse_grid_size(&self.input, self.min, self.max) {
            Ok(size) => ResizeValidation::Valid(size),
            Err(GridSizeError::Empty) if !self.empty_submitted => ResizeValidation::Pending,
            Err(err) => ResizeValidation::Invalid(err),
        };
    }

    pub fn validation(&self) -> &ResizeValidation {
        &self.validation
    }

    pub fn prompt(&self) -> String {
        if self.empty_submitted {
            format!(
                "Size can not be empty, please try enter again a number from {} to {}:",
                self.min, self.max
            )
        } else {
            format!(
                "Please enter your grid size by a number between {} to {}:",
                self.min, self.max
            )
        }
    }

    /// Accept the current input if it is valid.
    pub fn submit(&mut self) -> Option<usize> {
        if self.input.trim().is_empty() {
            log::debug!("Empty grid size submitted, prompting again");
            self.empty_submitted = true;
        }
        self.revalidate();
        match self.validation {
            ResizeValidation::Valid(size) => Some(size),
            _ => None,
        }
    }
}
