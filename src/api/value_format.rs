use crate::error::{ChartError, ChartResult};

const MAX_PRECISION: usize = 12;
const DEFAULT_FLOAT_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Fixed { precision: usize },
    Integer,
}

/// printf-style pattern for value labels, e.g. `"%.1f"` or `"$%.2f"`.
///
/// Supports `%f`, `%.Nf` (N <= 12), `%d`/`%i` and `%%`, with literal text
/// around exactly one value placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueFormat {
    prefix: String,
    suffix: String,
    placeholder: Placeholder,
}

impl ValueFormat {
    pub fn parse(pattern: &str) -> ChartResult<Self> {
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut placeholder = None;
        let mut chars = pattern.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '%' {
                if placeholder.is_some() {
                    suffix.push(ch);
                } else {
                    prefix.push(ch);
                }
                continue;
            }

            if chars.peek() == Some(&'%') {
                chars.next();
                if placeholder.is_some() {
                    suffix.push('%');
                } else {
                    prefix.push('%');
                }
                continue;
            }

            if placeholder.is_some() {
                return Err(ChartError::InvalidFormat(format!(
                    "`{pattern}` has more than one value placeholder"
                )));
            }

            let mut precision = None;
            if chars.peek() == Some(&'.') {
                chars.next();
                let mut digits = String::new();
                while let Some(digit) = chars.peek().copied().filter(char::is_ascii_digit) {
                    digits.push(digit);
                    chars.next();
                }
                let parsed = if digits.is_empty() {
                    0
                } else {
                    digits.parse::<usize>().map_err(|_| {
                        ChartError::InvalidFormat(format!("`{pattern}` has an invalid precision"))
                    })?
                };
                if parsed > MAX_PRECISION {
                    return Err(ChartError::InvalidFormat(format!(
                        "`{pattern}` precision must be <= {MAX_PRECISION}"
                    )));
                }
                precision = Some(parsed);
            }

            placeholder = Some(match chars.next() {
                Some('f') | Some('F') => Placeholder::Fixed {
                    precision: precision.unwrap_or(DEFAULT_FLOAT_PRECISION),
                },
                Some('d') | Some('i') if precision.is_none() => Placeholder::Integer,
                other => {
                    return Err(ChartError::InvalidFormat(format!(
                        "`{pattern}` has unsupported conversion `{}`",
                        other.map(String::from).unwrap_or_default()
                    )));
                }
            });
        }

        let Some(placeholder) = placeholder else {
            return Err(ChartError::InvalidFormat(format!(
                "`{pattern}` has no value placeholder"
            )));
        };

        Ok(Self {
            prefix,
            suffix,
            placeholder,
        })
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let number = match self.placeholder {
            Placeholder::Fixed { precision } => format!("{value:.precision$}"),
            Placeholder::Integer => format!("{:.0}", value.trunc() + 0.0),
        };
        let mut text = String::with_capacity(self.prefix.len() + number.len() + self.suffix.len());
        text.push_str(&self.prefix);
        text.push_str(&number);
        text.push_str(&self.suffix);
        text
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            placeholder: Placeholder::Fixed { precision: 1 },
        }
    }
}
