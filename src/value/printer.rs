use super::inputed::{InputedValue, ListInputedValue, ObjectInputedValue};
use super::value::*;
use std::{fmt, fmt::Write};

/// Trait for printing raw and inputed values to a new String allocated on the heap.
///
/// Every value shape supports two renderings: a compact single-line literal, which is what error
/// contexts embed, and a pretty-indented multi-line form with two-space indentation, which is
/// meant for diagnostics and snapshots.
///
/// For convenience when debugging, values that implement `PrintValue` also automatically
/// implement the [`fmt::Display`] trait, printing their compact form.
pub trait PrintValue {
    /// Write a value to a buffer implementing the [Write] trait as a compact literal.
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result;

    /// Write a value to a buffer implementing the [Write] trait as a pretty-indented literal.
    ///
    /// The `level` indicates the level of nesting, which increases with each composite value
    /// and is typically initialized as zero (`0`).
    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print a value to its compact literal as a String allocated on the heap.
    fn print_value(&self) -> String {
        let mut buf = String::new();
        match self.write_compact(&mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }

    /// Print a value to its pretty-indented literal as a String allocated on the heap.
    fn pretty_print(&self) -> String {
        let mut buf = String::new();
        match self.write_pretty(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_compact(f)
    }
}

fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?;
    }
    Ok(())
}

impl PrintValue for BooleanValue {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }

    #[inline]
    fn write_pretty(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.write_compact(buffer)
    }
}

impl PrintValue for IntValue {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}", self.value)
    }

    #[inline]
    fn write_pretty(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.write_compact(buffer)
    }
}

impl PrintValue for FloatValue {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}", self.value)
    }

    #[inline]
    fn write_pretty(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.write_compact(buffer)
    }
}

impl<'a> PrintValue for EnumValue<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }

    #[inline]
    fn write_pretty(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.write_compact(buffer)
    }
}

impl<'a> PrintValue for StringValue<'a> {
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::*;
        let mut buf = [b'0'; u32::FORMATTED_SIZE];

        // See: https://github.com/graphql-rust/graphql-parser/blob/ff34bae/src/format.rs#L127-L167
        buffer.write_char('"')?;
        for c in self.value.chars() {
            match c {
                '\r' => buffer.write_str(r"\r")?,
                '\n' => buffer.write_str(r"\n")?,
                '\t' => buffer.write_str(r"\t")?,
                '"' => buffer.write_str("\\\"")?,
                '\\' => buffer.write_str(r"\\")?,
                '\u{0020}'..='\u{FFFF}' => buffer.write_char(c)?,
                _ => unsafe {
                    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                    const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
                    let buf =
                        write_with_options_unchecked::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                    write!(buffer, "\\u{:0>4}", std::str::from_utf8_unchecked(buf))?;
                },
            };
        }
        buffer.write_char('"')
    }

    #[inline]
    fn write_pretty(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.write_compact(buffer)
    }
}

impl<'a> PrintValue for Value<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_compact(buffer),
            Value::Enum(value) => value.write_compact(buffer),
            Value::Float(value) => value.write_compact(buffer),
            Value::Int(value) => value.write_compact(buffer),
            Value::String(value) => value.write_compact(buffer),
            Value::Object(value) => value.write_compact(buffer),
            Value::List(value) => value.write_compact(buffer),
            Value::Null => buffer.write_str("null"),
        }
    }

    #[inline]
    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_pretty(level, buffer),
            Value::Enum(value) => value.write_pretty(level, buffer),
            Value::Float(value) => value.write_pretty(level, buffer),
            Value::Int(value) => value.write_pretty(level, buffer),
            Value::String(value) => value.write_pretty(level, buffer),
            Value::Object(value) => value.write_pretty(level, buffer),
            Value::List(value) => value.write_pretty(level, buffer),
            Value::Null => buffer.write_str("null"),
        }
    }
}

fn write_compact_list<'b, I>(items: I, buffer: &mut dyn Write) -> fmt::Result
where
    I: Iterator<Item = &'b (dyn PrintValue + 'b)>,
{
    buffer.write_str("[")?;
    let mut first = true;
    for item in items {
        if first {
            first = false;
        } else {
            buffer.write_str(", ")?;
        }
        item.write_compact(buffer)?;
    }
    buffer.write_str("]")
}

fn write_pretty_list<'b, I>(items: I, level: usize, buffer: &mut dyn Write) -> fmt::Result
where
    I: ExactSizeIterator<Item = &'b (dyn PrintValue + 'b)>,
{
    if items.len() == 0 {
        return buffer.write_str("[]");
    }

    buffer.write_str("[\n")?;
    let len = items.len();
    for (index, item) in items.enumerate() {
        write_indent(level + 1, buffer)?;
        item.write_pretty(level + 1, buffer)?;
        if index + 1 < len {
            buffer.write_str(",")?;
        }
        buffer.write_str("\n")?;
    }
    write_indent(level, buffer)?;
    buffer.write_str("]")
}

fn write_compact_object<'b, I>(entries: I, buffer: &mut dyn Write) -> fmt::Result
where
    I: Iterator<Item = (&'b str, &'b (dyn PrintValue + 'b))>,
{
    buffer.write_str("{")?;
    let mut first = true;
    for (name, value) in entries {
        if first {
            first = false;
        } else {
            buffer.write_str(", ")?;
        }
        write!(buffer, "{}: ", name)?;
        value.write_compact(buffer)?;
    }
    buffer.write_str("}")
}

fn write_pretty_object<'b, I>(entries: I, level: usize, buffer: &mut dyn Write) -> fmt::Result
where
    I: ExactSizeIterator<Item = (&'b str, &'b (dyn PrintValue + 'b))>,
{
    if entries.len() == 0 {
        return buffer.write_str("{}");
    }

    buffer.write_str("{\n")?;
    let len = entries.len();
    for (index, (name, value)) in entries.enumerate() {
        write_indent(level + 1, buffer)?;
        write!(buffer, "{}: ", name)?;
        value.write_pretty(level + 1, buffer)?;
        if index + 1 < len {
            buffer.write_str(",")?;
        }
        buffer.write_str("\n")?;
    }
    write_indent(level, buffer)?;
    buffer.write_str("}")
}

impl<'a> PrintValue for ListValue<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_compact_list(
            self.children.iter().map(|x| x as &dyn PrintValue),
            buffer,
        )
    }

    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_pretty_list(
            self.children.iter().map(|x| x as &dyn PrintValue),
            level,
            buffer,
        )
    }
}

impl<'a> PrintValue for ObjectValue<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_compact_object(
            self.children
                .iter()
                .map(|field| (field.name, &field.value as &dyn PrintValue)),
            buffer,
        )
    }

    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_pretty_object(
            self.children
                .iter()
                .map(|field| (field.name, &field.value as &dyn PrintValue)),
            level,
            buffer,
        )
    }
}

impl<'a> PrintValue for ListInputedValue<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_compact_list(self.items.iter().map(|x| x as &dyn PrintValue), buffer)
    }

    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_pretty_list(
            self.items.iter().map(|x| x as &dyn PrintValue),
            level,
            buffer,
        )
    }
}

impl<'a> PrintValue for ObjectInputedValue<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_compact_object(
            self.fields
                .iter()
                .map(|(name, value)| (*name, value as &dyn PrintValue)),
            buffer,
        )
    }

    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_pretty_object(
            self.fields
                .iter()
                .map(|(name, value)| (*name, value as &dyn PrintValue)),
            level,
            buffer,
        )
    }
}

impl<'a> PrintValue for InputedValue<'a> {
    #[inline]
    fn write_compact(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            InputedValue::Literal(value) => value.write_compact(buffer),
            InputedValue::List(value) => value.write_compact(buffer),
            InputedValue::Object(value) => value.write_compact(buffer),
        }
    }

    #[inline]
    fn write_pretty(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            InputedValue::Literal(value) => value.write_pretty(level, buffer),
            InputedValue::List(value) => value.write_pretty(level, buffer),
            InputedValue::Object(value) => value.write_pretty(level, buffer),
        }
    }
}
