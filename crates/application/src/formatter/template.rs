use super::{FieldExtractor, TokenRegistry};
use dns_access_log_domain::{DomainError, ExchangeContext};

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Field {
        extractor: FieldExtractor,
        max_length: Option<usize>,
    },
}

/// A parsed access-log format string.
///
/// Syntax: literal text, `%TOKEN%`, `%TOKEN(arg)%`, `%TOKEN:N%`,
/// `%TOKEN(arg):N%`, and `%%` for a literal percent sign. Every token is
/// resolved against the registry while parsing, so rendering cannot fail.
#[derive(Debug, Clone)]
pub struct AccessLogTemplate {
    segments: Vec<Segment>,
}

impl AccessLogTemplate {
    pub fn parse(format: &str, registry: &TokenRegistry) -> Result<Self, DomainError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = format;

        while let Some(start) = rest.find('%') {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            if let Some(tail) = after.strip_prefix('%') {
                literal.push('%');
                rest = tail;
                continue;
            }

            let end = after.find('%').ok_or_else(|| {
                DomainError::InvalidLogFormat(format!(
                    "unterminated token at '%{}' in \"{}\"",
                    after, format
                ))
            })?;
            let (name, arg, max_length) = parse_command(&after[..end])?;
            let extractor = registry
                .parse(name, arg, max_length)
                .ok_or_else(|| DomainError::UnknownToken(name.to_string()))?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Field {
                extractor,
                max_length,
            });
            rest = &after[end + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Renders one line. Absent values become `absent_value`; empty strings
    /// stay empty.
    pub fn render(&self, exchange: &ExchangeContext, absent_value: &str) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Field {
                    extractor,
                    max_length,
                } => match extractor.extract(Some(exchange)) {
                    Some(value) => line.push_str(&truncate(value, *max_length)),
                    None => line.push_str(absent_value),
                },
            }
        }
        line
    }

    /// The extractor and max length when the template is exactly one token
    /// with no surrounding text.
    pub fn single_field(&self) -> Option<(&FieldExtractor, Option<usize>)> {
        match self.segments.as_slice() {
            [Segment::Field {
                extractor,
                max_length,
            }] => Some((extractor, *max_length)),
            _ => None,
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field { extractor, .. } => Some(extractor.token()),
            Segment::Literal(_) => None,
        })
    }
}

/// Splits `NAME`, `NAME(arg)`, `NAME:N` or `NAME(arg):N`.
fn parse_command(command: &str) -> Result<(&str, Option<&str>, Option<usize>), DomainError> {
    let invalid = |reason: &str| {
        DomainError::InvalidLogFormat(format!("{} in token '%{}%'", reason, command))
    };

    let (name, arg, suffix) = match command.find('(') {
        Some(open) => {
            let close = command
                .rfind(')')
                .filter(|&close| close > open)
                .ok_or_else(|| invalid("missing ')'"))?;
            (
                &command[..open],
                Some(&command[open + 1..close]),
                &command[close + 1..],
            )
        }
        None => match command.find(':') {
            Some(colon) => (&command[..colon], None, &command[colon..]),
            None => (command, None, ""),
        },
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid("invalid token name"));
    }

    let max_length = match suffix {
        "" => None,
        suffix => {
            let digits = suffix
                .strip_prefix(':')
                .ok_or_else(|| invalid("unexpected text after ')'"))?;
            let length = digits
                .parse::<usize>()
                .map_err(|_| invalid("invalid max length"))?;
            Some(length)
        }
    };

    Ok((name, arg, max_length))
}

pub(super) fn truncate(value: String, max_length: Option<usize>) -> String {
    match max_length {
        Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
        _ => value,
    }
}
