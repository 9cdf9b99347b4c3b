use crate::schema::{SchemaField, SchemaObject, SchemaType};
use crate::value::Value;
use bumpalo::collections::Vec;

/// A raw value after classification against its declared schema type.
///
/// Resolved values are constructed bottom-up in one pass and never mutated after construction.
/// The `Intermediate` forms still carry raw data pending further resolution: an object waiting
/// for its fields to be resolved, or a list whose elements are classified but not yet resolved.
/// The terminal forms are [`ScalarValue`] leaves, [`ListResolvedValue`] sequences, and
/// [`TypeValue`] objects.
#[derive(Debug)]
pub enum ResolvedValue<'a> {
    /// An absent value, standing in for `null` at any nullable position.
    Null,
    /// A validated scalar or enum leaf.
    Scalar(ScalarValue<'a>),
    /// A concrete object type paired with its raw record, pending field resolution.
    ObjectIntermediate(ObjectIntermediateValue<'a>),
    /// A classified sequence whose elements are pending resolution.
    ListIntermediate(ListIntermediateValue<'a>),
    /// A fully resolved sequence.
    ListResolved(ListResolvedValue<'a>),
    /// The terminal resolved-object form: a concrete type and its ordered response entries.
    Type(TypeValue<'a>),
}

impl<'a> ResolvedValue<'a> {
    /// Checks whether this resolved value is `null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, ResolvedValue::Null)
    }

    /// Returns the runtime schema type of this value, or `None` for `null`.
    pub fn of_type(&self) -> Option<SchemaType<'a>> {
        match self {
            ResolvedValue::Null => None,
            ResolvedValue::Scalar(value) => Some(value.of_type),
            ResolvedValue::ObjectIntermediate(value) => Some(SchemaType::Object(value.of_type)),
            ResolvedValue::ListIntermediate(value) => Some(value.of_type),
            ResolvedValue::ListResolved(value) => Some(value.of_type),
            ResolvedValue::Type(value) => Some(SchemaType::Object(value.of_type)),
        }
    }

    /// Returns the raw value still carried by this resolved value, if any.
    ///
    /// Only leaf scalars and intermediate objects hold onto raw data; the raw value of an
    /// intermediate object is what its field resolvers receive as their parent value.
    pub fn raw(&self) -> Option<&Value<'a>> {
        match self {
            ResolvedValue::Scalar(value) => Some(&value.value),
            ResolvedValue::ObjectIntermediate(value) => Some(&value.value),
            _ => None,
        }
    }
}

/// A validated scalar or enum leaf value: the declared leaf type paired with the raw value it
/// accepted, unchanged.
#[derive(Debug)]
pub struct ScalarValue<'a> {
    pub of_type: SchemaType<'a>,
    pub value: Value<'a>,
}

/// A concrete object type paired with the raw record its field resolvers will draw from.
///
/// For fields declared with an object type this is the declared type itself; for fields declared
/// with an interface or union type it is the member type named by the disambiguation callback.
#[derive(Debug)]
pub struct ObjectIntermediateValue<'a> {
    pub of_type: &'a SchemaObject<'a>,
    pub value: Value<'a>,
}

/// A classified sequence: each element is classified against the list's inner type, in order,
/// but composite elements are not yet resolved.
#[derive(Debug)]
pub struct ListIntermediateValue<'a> {
    pub of_type: SchemaType<'a>,
    pub elements: Vec<'a, ResolvedValue<'a>>,
}

/// A fully resolved sequence. Length and order match the resolver's output exactly.
#[derive(Debug)]
pub struct ListResolvedValue<'a> {
    pub of_type: SchemaType<'a>,
    pub elements: Vec<'a, ResolvedValue<'a>>,
}

/// A field definition paired with its resolved value, possibly `null`.
#[derive(Debug)]
pub struct FieldValue<'a> {
    pub field: &'a SchemaField<'a>,
    pub value: ResolvedValue<'a>,
}

/// The terminal resolved-object form: a concrete object type and an ordered mapping from
/// response key to [`FieldValue`].
///
/// Iteration order is the order fields appeared in the request, never schema declaration order,
/// and must be preserved verbatim by any downstream serializer.
#[derive(Debug)]
pub struct TypeValue<'a> {
    pub of_type: &'a SchemaObject<'a>,
    pub fields: Vec<'a, (&'a str, FieldValue<'a>)>,
}

impl<'a> TypeValue<'a> {
    /// Returns the field value recorded under the given response key.
    pub fn get(&self, response_key: &str) -> Option<&FieldValue<'a>> {
        self.fields
            .iter()
            .find(|(key, _)| *key == response_key)
            .map(|(_, value)| value)
    }

    /// Iterates response entries in request order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, (&'a str, FieldValue<'a>)> {
        self.fields.iter()
    }

    /// Returns the response keys in request order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }
}
