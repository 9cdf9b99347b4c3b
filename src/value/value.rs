use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// A context for a resolution pass which holds an arena allocator.
///
/// For the duration of building a schema, constructing input values, and resolving a request it's
/// performant and convenient to allocate memory in one chunk. This context represents the
/// lifetime of a resolution pass and its derivatives.
///
/// An execution context in other words represents the memory a request and the operations you
/// perform on it take up. This is efficient since once you're done with the request this entire
/// allocated memory can be dropped all at once. Hence however, it's inadvisable to reuse the
/// context across multiple incoming requests, unless it also carries the schema they share.
pub struct ExecContext {
    /// An arena allocator that holds the memory allocated for this context's lifetime
    pub arena: bumpalo::Bump,
}

impl ExecContext {
    /// Create a new execution context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ExecContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s
    /// lifetime to this context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ExecContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A boolean raw value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// An enum raw value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
}

/// An integer raw value.
///
/// The value is stored as a 64-bit integer since resolver functions compute values rather than
/// echo source text; the `Int` scalar's 32-bit range restriction is enforced during
/// classification instead of at construction.
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue {
    pub value: i64,
}

/// A floating point raw value.
///
/// Floats in GraphQL are signed, double precision values as defined by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).
/// They are however limited to finite values only.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, Clone, Copy)]
pub struct FloatValue {
    pub value: f64,
}

impl PartialEq for FloatValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A string raw value.
///
/// The value is expected to not contain escaped characters; strings here can be compared to JSON
/// Unicode strings.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ExecContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
        }
    }
}

/// A dynamic raw value, as consumed and produced by resolver functions.
///
/// A resolver receives its parent's raw value and its arguments' raw values, and returns a raw
/// value that is then classified against the field's declared type. Raw values also carry
/// argument defaults and resolved argument inputs.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    String(StringValue<'a>),
    Float(FloatValue),
    Int(IntValue),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values or the absence of a value
    Null,
}

impl<'a> Value<'a> {
    /// Checks whether this raw value is `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A raw value holding a list of raw values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Their
/// contents may be any arbitrary raw value.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: bumpalo::collections::Vec<'a, Value<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A single keyed entry of an object raw value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// An object raw value, which is an ordered list of keyed raw values.
///
/// The entry order is the construction order and is preserved by every operation in this crate,
/// which is what allows composite inputs and resolver records to round-trip deterministically.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: bumpalo::collections::Vec<'a, ObjectField<'a>>,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the value stored under the given key, if present.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.children
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Returns a `Map` keyed by all object field's names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ExecContext,
    ) -> HashMap<&str, &Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for field in self.children.iter() {
            map.insert(field.name, &field.value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::DefaultIn;
    use bumpalo::collections::Vec;

    #[test]
    fn object_value_get_preserves_first_entry() {
        let ctx = ExecContext::new();
        let mut children = Vec::new_in(&ctx.arena);
        children.push(ObjectField {
            name: "x",
            value: Value::Int(1.into()),
        });
        children.push(ObjectField {
            name: "y",
            value: Value::Null,
        });
        let object = ObjectValue { children };

        assert_eq!(object.get("x"), Some(&Value::Int(1.into())));
        assert_eq!(object.get("y"), Some(&Value::Null));
        assert_eq!(object.get("z"), None);
    }

    #[test]
    fn default_in_produces_empty_composites() {
        let ctx = ExecContext::new();
        assert!(ObjectValue::default_in(&ctx.arena).is_empty());
        assert!(ListValue::default_in(&ctx.arena).is_empty());
    }
}
