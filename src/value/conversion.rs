use super::value::*;
use bumpalo::collections::{vec::IntoIter, Vec};

impl<'a> IntoIterator for ListValue<'a> {
    type Item = Value<'a>;
    type IntoIter = IntoIter<'a, Value<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for ObjectValue<'a> {
    type Item = ObjectField<'a>;
    type IntoIter = IntoIter<'a, ObjectField<'a>>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

/// Trait for creating an empty default of a structure inside a given arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_arena: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

impl<'a> DefaultIn<'a> for ObjectValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ObjectValue {
            children: Vec::new_in(arena),
        }
    }
}

impl<'a> DefaultIn<'a> for ListValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ListValue {
            children: Vec::new_in(arena),
        }
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}

impl From<i64> for IntValue {
    #[inline]
    fn from(value: i64) -> Self {
        IntValue { value }
    }
}

impl From<f64> for FloatValue {
    #[inline]
    fn from(value: f64) -> Self {
        FloatValue { value }
    }
}

impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue { value }
    }
}

impl<'a> From<&'a str> for EnumValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        EnumValue { value }
    }
}

impl<'a> From<StringValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: StringValue<'a>) -> Self {
        Value::String(x)
    }
}

impl<'a> From<FloatValue> for Value<'a> {
    #[inline]
    fn from(x: FloatValue) -> Self {
        Value::Float(x)
    }
}

impl<'a> From<IntValue> for Value<'a> {
    #[inline]
    fn from(x: IntValue) -> Self {
        Value::Int(x)
    }
}

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue) -> Self {
        Value::Boolean(x)
    }
}

impl<'a> From<EnumValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: EnumValue<'a>) -> Self {
        Value::Enum(x)
    }
}

impl<'a> From<ListValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ListValue<'a>) -> Self {
        Value::List(x)
    }
}

impl<'a> From<ObjectValue<'a>> for Value<'a> {
    #[inline]
    fn from(x: ObjectValue<'a>) -> Self {
        Value::Object(x)
    }
}
