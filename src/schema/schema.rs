use super::directive::DirectiveUsage;
use crate::error::Result;
use crate::selection::OperationKind;
use crate::value::{ExecContext, Value};
use bumpalo::collections::Vec;
use hashbrown::hash_map::DefaultHashBuilder;
use hashbrown::{HashMap, HashSet};

/// A field resolver function.
///
/// A resolver receives the execution context, its parent's raw value, and the field's argument
/// values in declaration order (never request order), and produces the field's raw value. A
/// resolver may fail with a domain error, which the engine passes through untranslated.
pub type ResolveFn<'a> =
    &'a (dyn Fn(&'a ExecContext, &Value<'a>, &[Value<'a>]) -> Result<Value<'a>> + 'a);

/// A disambiguation callback attached to abstract types.
///
/// Fields declared as an interface or union resolve to raw values whose concrete object type the
/// schema cannot know statically; this callback names it. A callback returning a type that is not
/// actually a member of the abstract type is a contract violation caught by the engine's
/// conformance check.
pub type ConcreteResolveFn<'a> = &'a (dyn Fn(&Value<'a>) -> &'a SchemaObject<'a> + 'a);

/// A literal-validity predicate for custom scalars.
pub type ScalarValidateFn<'a> = &'a (dyn Fn(&Value<'a>) -> bool + 'a);

/// Allocates a resolver function on the context's arena.
///
/// Going through this helper pins a closure to the exact calling convention the engine invokes,
/// so argument types can stay unannotated at the call site.
pub fn resolver<'a, F>(ctx: &'a ExecContext, f: F) -> ResolveFn<'a>
where
    F: Fn(&'a ExecContext, &Value<'a>, &[Value<'a>]) -> Result<Value<'a>> + 'a,
{
    ctx.alloc(f)
}

/// Allocates a disambiguation callback on the context's arena.
pub fn concrete_resolver<'a, F>(ctx: &'a ExecContext, f: F) -> ConcreteResolveFn<'a>
where
    F: Fn(&Value<'a>) -> &'a SchemaObject<'a> + 'a,
{
    ctx.alloc(f)
}

/// Allocates a scalar validity predicate on the context's arena.
pub fn scalar_validator<'a, F>(ctx: &'a ExecContext, f: F) -> ScalarValidateFn<'a>
where
    F: Fn(&Value<'a>) -> bool + 'a,
{
    ctx.alloc(f)
}

/// Schema Definition
///
/// A schema is created from root types for each kind of operation and is then used to resolve
/// normalized requests. All named types are registered by their unique name; `List` and `NotNull`
/// wrappers are structural and never registered.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
pub struct Schema<'a> {
    pub(crate) query_type: Option<&'a SchemaObject<'a>>,
    pub(crate) mutation_type: Option<&'a SchemaObject<'a>>,
    pub(crate) types:
        hashbrown::HashMap<&'a str, SchemaType<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> Schema<'a> {
    pub fn new(ctx: &'a ExecContext) -> Self {
        Schema {
            query_type: None,
            mutation_type: None,
            types: HashMap::new_in(&ctx.arena),
        }
    }

    /// Returns whether the schema is a default, empty schema
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.query_type.is_none() && self.mutation_type.is_none()
    }

    /// Returns the root object type for query operations
    #[inline]
    pub fn query_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.query_type
    }

    /// Returns the root object type for mutation operations
    #[inline]
    pub fn mutation_type(&self) -> Option<&'a SchemaObject<'a>> {
        self.mutation_type
    }

    pub fn set_query_type(&mut self, object: &'a SchemaObject<'a>) {
        self.query_type = Some(object);
    }

    pub fn set_mutation_type(&mut self, object: &'a SchemaObject<'a>) {
        self.mutation_type = Some(object);
    }

    /// Registers a named type on the schema.
    pub fn add_type(&mut self, schema_type: SchemaType<'a>) {
        self.types.insert(schema_type.name(), schema_type);
    }

    /// Returns the appropriate root object type depending on the passed operation kind
    #[inline]
    pub fn get_root_type(&self, operation_kind: OperationKind) -> Option<&'a SchemaObject<'a>> {
        match operation_kind {
            OperationKind::Query => self.query_type,
            OperationKind::Mutation => self.mutation_type,
        }
    }

    /// Retrieves a kind by name from known schema types.
    #[inline]
    pub fn get_type(&self, name: &'a str) -> Option<SchemaType<'a>> {
        self.types.get(name).copied()
    }
}

/// Generic trait for any schema type that implements fields
pub trait SchemaFields<'a>: Sized {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ExecContext, field: SchemaField<'a>);

    /// Get a [Map] of all fields
    fn get_fields(
        &self,
    ) -> HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

    /// Get a known field by name
    fn get_field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.get_fields().get(name).copied()
    }
}

/// Generic trait for any schema type that implements interfaces
pub trait SchemaInterfaces<'a>: Sized {
    /// Add a new [SchemaInterface] to the list of implemented interfaces
    fn add_interface(&mut self, ctx: &'a ExecContext, interface: &'a str);

    /// Get list of implemented [SchemaInterface]s
    fn get_interfaces(&self) -> Vec<'a, &'a str>;

    /// Checks whether given [SchemaInterface] is implemented
    #[inline]
    fn implements_interface(&self, schema_interface: &SchemaInterface<'a>) -> bool {
        self.get_interfaces()
            .into_iter()
            .any(|interface| interface == schema_interface.name)
    }
}

/// Generic trait for any schema type that has possible concrete types
pub trait SchemaPossibleTypes<'a>: Sized {
    /// Add a new [SchemaObject] to the list of possible types
    fn add_possible_type(&mut self, ctx: &'a ExecContext, object: &'a str);

    /// Get list of possible [SchemaObject] types
    fn get_possible_types(&self) -> Vec<'a, &'a str>;

    /// Checks whether given [SchemaObject] is a possible subtype
    #[inline]
    fn is_possible_type(&self, schema_object: &SchemaObject<'a>) -> bool {
        self.get_possible_types()
            .into_iter()
            .any(|possible_type| possible_type == schema_object.name)
    }
}

/// Generic trait for any schema type that may be a super type of other types
pub trait SchemaSuperType<'a>: Sized {
    /// Checks whether a given type is a sub type of the current super type.
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool;
}

/// An Object type definition.
///
/// Most types in GraphQL are objects and define a set of resolvable fields and the interfaces
/// they implement. Objects are the only types that own selectable fields at resolution time.
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug)]
pub struct SchemaObject<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    pub(crate) interfaces: Vec<'a, &'a str>,
}

impl<'a> SchemaObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ExecContext, name: &'a str) -> Self {
        SchemaObject {
            name,
            fields: HashMap::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
        }
    }

    /// Get a declared field by name without copying the field map.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&'a SchemaField<'a>> {
        self.fields.get(name).copied()
    }
}

impl<'a> SchemaFields<'a> for SchemaObject<'a> {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ExecContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    /// Get a [Map] of all fields on the [SchemaObject]
    fn get_fields(
        &self,
    ) -> HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        self.fields.clone()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaObject<'a> {
    /// Add a new [SchemaInterface] to the list of implemented interfaces
    fn add_interface(&mut self, _ctx: &'a ExecContext, interface: &'a str) {
        self.interfaces.push(interface);
    }

    /// Get list of implemented [SchemaInterface]s
    #[inline]
    fn get_interfaces(&self) -> Vec<'a, &'a str> {
        self.interfaces.clone()
    }
}

/// An Interface type definition.
///
/// Any object or other interfaces may implement one or more interfaces and must then adhere to
/// the definition of this interface. A field that returns an interface as its return type carries
/// a disambiguation callback that names the concrete object type of a resolved value.
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
pub struct SchemaInterface<'a> {
    pub name: &'a str,
    pub(crate) fields: HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump>,
    pub(crate) interfaces: Vec<'a, &'a str>,
    pub(crate) possible_types: Vec<'a, &'a str>,
    pub(crate) resolve_concrete: ConcreteResolveFn<'a>,
}

impl<'a> SchemaInterface<'a> {
    #[inline]
    pub fn new(
        ctx: &'a ExecContext,
        name: &'a str,
        resolve_concrete: ConcreteResolveFn<'a>,
    ) -> Self {
        SchemaInterface {
            name,
            fields: HashMap::new_in(&ctx.arena),
            interfaces: Vec::new_in(&ctx.arena),
            possible_types: Vec::new_in(&ctx.arena),
            resolve_concrete,
        }
    }
}

impl<'a> std::fmt::Debug for SchemaInterface<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaInterface")
            .field("name", &self.name)
            .field("possible_types", &self.possible_types)
            .finish_non_exhaustive()
    }
}

impl<'a> SchemaFields<'a> for SchemaInterface<'a> {
    /// Add a new [SchemaField] to the list of fields
    fn add_field(&mut self, ctx: &'a ExecContext, field: SchemaField<'a>) {
        self.fields.insert(field.name, ctx.alloc(field));
    }

    /// Get a [Map] of all fields on the [SchemaInterface]
    fn get_fields(
        &self,
    ) -> HashMap<&'a str, &'a SchemaField<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        self.fields.clone()
    }
}

impl<'a> SchemaInterfaces<'a> for SchemaInterface<'a> {
    /// Add a new [SchemaInterface] to the list of implemented interfaces
    fn add_interface(&mut self, _ctx: &'a ExecContext, interface: &'a str) {
        self.interfaces.push(interface);
    }

    /// Get list of implemented [SchemaInterface]s
    #[inline]
    fn get_interfaces(&self) -> Vec<'a, &'a str> {
        self.interfaces.clone()
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaInterface<'a> {
    /// Add a new [SchemaObject] to the list of possible types
    fn add_possible_type(&mut self, _ctx: &'a ExecContext, object: &'a str) {
        self.possible_types.push(object);
    }

    /// Get list of possible [SchemaObject] types
    #[inline]
    fn get_possible_types(&self) -> Vec<'a, &'a str> {
        self.possible_types.clone()
    }
}

impl<'a> SchemaSuperType<'a> for SchemaInterface<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        match sub_type {
            SchemaType::Object(schema_object) => schema_object.implements_interface(self),
            SchemaType::Interface(schema_interface) => schema_interface.implements_interface(self),
            _ => false,
        }
    }
}

/// An object Field definition.
///
/// A field is like a function that given its arguments as input values produces an output value:
/// its resolver function. Arguments are kept in declaration order since that order is part of the
/// resolver's calling convention. Definition directives run around every invocation of the
/// resolver, in the order they were attached.
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
pub struct SchemaField<'a> {
    pub name: &'a str,
    pub arguments: Vec<'a, SchemaInputField<'a>>,
    pub output_type: SchemaType<'a>,
    pub resolve: ResolveFn<'a>,
    pub directives: Vec<'a, DirectiveUsage<'a>>,
}

impl<'a> SchemaField<'a> {
    #[inline]
    pub fn new(
        ctx: &'a ExecContext,
        name: &'a str,
        output_type: SchemaType<'a>,
        resolve: ResolveFn<'a>,
    ) -> Self {
        SchemaField {
            name,
            arguments: Vec::new_in(&ctx.arena),
            output_type,
            resolve,
            directives: Vec::new_in(&ctx.arena),
        }
    }

    pub fn add_argument(&mut self, _ctx: &'a ExecContext, arg: SchemaInputField<'a>) {
        self.arguments.push(arg);
    }

    pub fn add_directive(&mut self, _ctx: &'a ExecContext, directive: DirectiveUsage<'a>) {
        self.directives.push(directive);
    }

    #[inline]
    pub fn get_argument(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

impl<'a> std::fmt::Debug for SchemaField<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaField")
            .field("name", &self.name)
            .field("output_type", &self.output_type)
            .finish_non_exhaustive()
    }
}

/// A Union type definition.
///
/// A union contains a list of possible types that can be returned in its stead when it's defined
/// as an output type, and a disambiguation callback naming the concrete member type of a resolved
/// value.
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
pub struct SchemaUnion<'a> {
    pub name: &'a str,
    possible_types: Vec<'a, &'a str>,
    pub(crate) resolve_concrete: ConcreteResolveFn<'a>,
}

impl<'a> SchemaUnion<'a> {
    #[inline]
    pub fn new(
        ctx: &'a ExecContext,
        name: &'a str,
        resolve_concrete: ConcreteResolveFn<'a>,
    ) -> Self {
        SchemaUnion {
            name,
            possible_types: Vec::new_in(&ctx.arena),
            resolve_concrete,
        }
    }
}

impl<'a> std::fmt::Debug for SchemaUnion<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaUnion")
            .field("name", &self.name)
            .field("possible_types", &self.possible_types)
            .finish_non_exhaustive()
    }
}

impl<'a> SchemaPossibleTypes<'a> for SchemaUnion<'a> {
    /// Add a new [SchemaObject] to the list of possible types
    fn add_possible_type(&mut self, _ctx: &'a ExecContext, object: &'a str) {
        self.possible_types.push(object);
    }

    /// Get list of possible [SchemaObject] types
    #[inline]
    fn get_possible_types(&self) -> Vec<'a, &'a str> {
        self.possible_types.clone()
    }
}

impl<'a> SchemaSuperType<'a> for SchemaUnion<'a> {
    #[inline]
    fn is_sub_type(&self, sub_type: SchemaType<'a>) -> bool {
        if let SchemaType::Object(schema_object) = sub_type {
            self.is_possible_type(schema_object)
        } else {
            false
        }
    }
}

/// A Scalar type definition.
///
/// Scalars represent primitive leaf values. Each scalar carries a literal-validity predicate that
/// gates which raw values a resolver may return for it; the built-in scalars (`Int`, `Float`,
/// `String`, `ID`, `Boolean`) come with predicates matching their serialization rules, while
/// custom scalars may attach their own.
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
pub struct SchemaScalar<'a> {
    pub name: &'a str,
    pub(crate) validate: Option<ScalarValidateFn<'a>>,
}

impl<'a> SchemaScalar<'a> {
    #[inline]
    pub fn new(name: &'a str) -> Self {
        SchemaScalar {
            name,
            validate: None,
        }
    }

    #[inline]
    pub fn with_validator(name: &'a str, validate: ScalarValidateFn<'a>) -> Self {
        SchemaScalar {
            name,
            validate: Some(validate),
        }
    }

    /// Runs this scalar's literal-validity predicate on a non-null raw value.
    ///
    /// Custom scalars without a predicate accept any raw value, which matches serving opaque
    /// scalars straight from a backing store.
    pub fn validates(&self, value: &Value<'a>) -> bool {
        if let Some(validate) = self.validate {
            return validate(value);
        }

        match self.name {
            "Int" => match value {
                Value::Int(x) => i32::try_from(x.value).is_ok(),
                _ => false,
            },
            "Float" => match value {
                Value::Float(x) => x.value.is_finite(),
                Value::Int(_) => true,
                _ => false,
            },
            "String" => matches!(value, Value::String(_)),
            "ID" => matches!(value, Value::String(_) | Value::Int(_)),
            "Boolean" => matches!(value, Value::Boolean(_)),
            _ => true,
        }
    }
}

impl<'a> std::fmt::Debug for SchemaScalar<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaScalar")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An Enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug)]
pub struct SchemaEnum<'a> {
    pub name: &'a str,
    pub values: HashSet<&'a str, DefaultHashBuilder, &'a bumpalo::Bump>,
}

impl<'a> SchemaEnum<'a> {
    #[inline]
    pub fn new(ctx: &'a ExecContext, name: &'a str) -> Self {
        SchemaEnum {
            name,
            values: HashSet::new_in(&ctx.arena),
        }
    }

    pub fn add_value(&mut self, _ctx: &'a ExecContext, value: &'a str) {
        self.values.insert(value);
    }

    /// Checks that a non-null raw value names a member of this enum.
    ///
    /// Resolvers commonly return enum members as plain strings, so both enum and string raw
    /// values are accepted.
    pub fn validates(&self, value: &Value<'a>) -> bool {
        match value {
            Value::Enum(x) => self.values.contains(x.value),
            Value::String(x) => self.values.contains(x.value),
            _ => false,
        }
    }
}

/// An Input Object type definition.
///
/// Inputs, such as arguments, may sometimes be nested and accept objects that must adhere to the
/// shape of an Input Object definition. Declared fields are kept in declaration order so that
/// filled-in defaults land deterministically.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug)]
pub struct SchemaInputObject<'a> {
    pub name: &'a str,
    pub fields: Vec<'a, SchemaInputField<'a>>,
}

impl<'a> SchemaInputObject<'a> {
    #[inline]
    pub fn new(ctx: &'a ExecContext, name: &'a str) -> Self {
        SchemaInputObject {
            name,
            fields: Vec::new_in(&ctx.arena),
        }
    }

    pub fn add_field(&mut self, _ctx: &'a ExecContext, field: SchemaInputField<'a>) {
        self.fields.push(field);
    }

    #[inline]
    pub fn get_field(&self, name: &str) -> Option<&SchemaInputField<'a>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// An input field or argument declaration: a name, an input type, and an optional default.
#[derive(Debug, Clone, Copy)]
pub struct SchemaInputField<'a> {
    pub name: &'a str,
    pub input_type: SchemaType<'a>,
    pub default_value: Option<&'a Value<'a>>,
}

impl<'a> SchemaInputField<'a> {
    #[inline]
    pub fn new(name: &'a str, input_type: SchemaType<'a>) -> Self {
        SchemaInputField {
            name,
            input_type,
            default_value: None,
        }
    }

    #[inline]
    pub fn with_default(
        name: &'a str,
        input_type: SchemaType<'a>,
        default_value: &'a Value<'a>,
    ) -> Self {
        SchemaInputField {
            name,
            input_type,
            default_value: Some(default_value),
        }
    }
}

/// The closed set of schema type kinds.
///
/// Named kinds reference their definitions; `List` and `NotNull` structurally wrap exactly one
/// inner type. Every consumer of the type system either matches this enum exhaustively or
/// implements the eight-method [`TypeVisitor`] contract, so introducing a ninth kind is a
/// compile-time event at every site that matters.
///
/// [`TypeVisitor`]: crate::visit::TypeVisitor
/// [Reference](https://spec.graphql.org/October2021/#sec-Types)
#[derive(Clone, Copy)]
pub enum SchemaType<'a> {
    Scalar(&'a SchemaScalar<'a>),
    Enum(&'a SchemaEnum<'a>),
    Object(&'a SchemaObject<'a>),
    Interface(&'a SchemaInterface<'a>),
    Union(&'a SchemaUnion<'a>),
    InputObject(&'a SchemaInputObject<'a>),
    List(&'a SchemaType<'a>),
    NotNull(&'a SchemaType<'a>),
}

/// The introspective kind descriptor of a [SchemaType].
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema-Introspection)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> SchemaType<'a> {
    /// Returns the name of the named type below any structural wrappers.
    #[inline]
    pub fn name(&self) -> &'a str {
        match self {
            SchemaType::Scalar(x) => x.name,
            SchemaType::Enum(x) => x.name,
            SchemaType::Object(x) => x.name,
            SchemaType::Interface(x) => x.name,
            SchemaType::Union(x) => x.name,
            SchemaType::InputObject(x) => x.name,
            SchemaType::List(inner) => inner.name(),
            SchemaType::NotNull(inner) => inner.name(),
        }
    }

    /// Returns the kind descriptor of this type.
    #[inline]
    pub fn kind(&self) -> TypeKind {
        match self {
            SchemaType::Scalar(_) => TypeKind::Scalar,
            SchemaType::Enum(_) => TypeKind::Enum,
            SchemaType::Object(_) => TypeKind::Object,
            SchemaType::Interface(_) => TypeKind::Interface,
            SchemaType::Union(_) => TypeKind::Union,
            SchemaType::InputObject(_) => TypeKind::InputObject,
            SchemaType::List(_) => TypeKind::List,
            SchemaType::NotNull(_) => TypeKind::NonNull,
        }
    }

    /// Renders this type in wrapping notation, e.g. `[Int!]`.
    pub fn print_name(&self) -> String {
        match self {
            SchemaType::List(inner) => format!("[{}]", inner.print_name()),
            SchemaType::NotNull(inner) => format!("{}!", inner.print_name()),
            named => named.name().to_string(),
        }
    }

    /// Whether this type rejects `null` at its outermost position.
    #[inline]
    pub fn is_non_null(&self) -> bool {
        matches!(self, SchemaType::NotNull(_))
    }

    /// Strips at most one `NotNull` wrapper; `NotNull` never wraps `NotNull`.
    #[inline]
    pub fn nullable(&self) -> SchemaType<'a> {
        match self {
            SchemaType::NotNull(inner) => **inner,
            other => *other,
        }
    }

    /// Unwraps all structural wrappers and returns the named type contained within.
    #[inline]
    pub fn named_type(&self) -> SchemaType<'a> {
        match self {
            SchemaType::List(inner) => inner.named_type(),
            SchemaType::NotNull(inner) => inner.named_type(),
            named => *named,
        }
    }

    /// Wraps this type in a list, indicating that a resolver is expected to produce a sequence
    /// of the current type instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ExecContext) -> SchemaType<'a> {
        SchemaType::List(ctx.alloc(self))
    }

    /// Wraps this type as non-null, indicating that a resolver may not produce `null` in its
    /// place.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ExecContext) -> SchemaType<'a> {
        debug_assert!(
            !self.is_non_null(),
            "NotNull must not wrap another NotNull type"
        );
        SchemaType::NotNull(ctx.alloc(self))
    }

    /// Checks whether a value of this runtime type may stand in for the declared `other` type.
    ///
    /// This is the conformance relation applied to every classified field result: a concrete
    /// object conforms to itself, to every interface it implements, and to every union it is a
    /// member of. Structural wrappers unwrap on both sides, so a non-null value always conforms
    /// to its nullable declaration.
    pub fn is_instance_of(&self, other: &SchemaType<'a>) -> bool {
        match (self, other) {
            (SchemaType::NotNull(inner), _) => inner.is_instance_of(other),
            (_, SchemaType::NotNull(inner)) => self.is_instance_of(inner),
            (SchemaType::List(inner), SchemaType::List(other_inner)) => {
                inner.is_instance_of(other_inner)
            }
            (SchemaType::Object(object), SchemaType::Object(other_object)) => {
                object.name == other_object.name
            }
            (SchemaType::Object(object), SchemaType::Interface(interface)) => {
                object.implements_interface(interface)
            }
            (SchemaType::Object(object), SchemaType::Union(schema_union)) => {
                schema_union.is_possible_type(object)
            }
            (SchemaType::Interface(interface), SchemaType::Interface(other_interface)) => {
                interface.name == other_interface.name
                    || interface.implements_interface(other_interface)
            }
            (SchemaType::Union(a), SchemaType::Union(b)) => a.name == b.name,
            (SchemaType::Scalar(a), SchemaType::Scalar(b)) => a.name == b.name,
            (SchemaType::Enum(a), SchemaType::Enum(b)) => a.name == b.name,
            (SchemaType::InputObject(a), SchemaType::InputObject(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl<'a> From<&'a SchemaObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_object: &'a SchemaObject<'a>) -> Self {
        SchemaType::Object(schema_object)
    }
}

impl<'a> From<&'a SchemaUnion<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_union: &'a SchemaUnion<'a>) -> Self {
        SchemaType::Union(schema_union)
    }
}

impl<'a> From<&'a SchemaInterface<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_interface: &'a SchemaInterface<'a>) -> Self {
        SchemaType::Interface(schema_interface)
    }
}

impl<'a> From<&'a SchemaScalar<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_scalar: &'a SchemaScalar<'a>) -> Self {
        SchemaType::Scalar(schema_scalar)
    }
}

impl<'a> From<&'a SchemaEnum<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_enum: &'a SchemaEnum<'a>) -> Self {
        SchemaType::Enum(schema_enum)
    }
}

impl<'a> From<&'a SchemaInputObject<'a>> for SchemaType<'a> {
    #[inline]
    fn from(schema_input_object: &'a SchemaInputObject<'a>) -> Self {
        SchemaType::InputObject(schema_input_object)
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `Debug` would print on and on, overflowing the stack as it's bouncing
/// between types referencing each other over and over.
impl<'a> std::fmt::Debug for SchemaType<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaType::Scalar(x) => f.debug_tuple("Scalar").field(&x.name).finish(),
            SchemaType::Enum(x) => f.debug_tuple("Enum").field(&x.name).finish(),
            SchemaType::Object(x) => f.debug_tuple("Object").field(&x.name).finish(),
            SchemaType::Interface(x) => f.debug_tuple("Interface").field(&x.name).finish(),
            SchemaType::Union(x) => f.debug_tuple("Union").field(&x.name).finish(),
            SchemaType::InputObject(x) => f.debug_tuple("InputObject").field(&x.name).finish(),
            SchemaType::List(inner) => f.debug_tuple("List").field(inner).finish(),
            SchemaType::NotNull(inner) => f.debug_tuple("NotNull").field(inner).finish(),
        }
    }
}

/// This implementation is necessary to circuit break circular types.
/// Without this impl, `PartialEq` would never stop comparing types referencing each other.
/// We achieve this by only ever comparing kinds and type names, which is all we need for
/// comparing references.
impl<'a> PartialEq for SchemaType<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SchemaType::List(left), SchemaType::List(right)) => left == right,
            (SchemaType::NotNull(left), SchemaType::NotNull(right)) => left == right,
            (left, right) => {
                left.kind() == right.kind()
                    && !matches!(left.kind(), TypeKind::List | TypeKind::NonNull)
                    && left.name() == right.name()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ExecContext, StringValue};

    fn test_object<'a>(ctx: &'a ExecContext, name: &'a str) -> &'a SchemaObject<'a> {
        ctx.alloc(SchemaObject::new(ctx, name))
    }

    fn test_union<'a>(
        ctx: &'a ExecContext,
        name: &'a str,
        members: &[&'a SchemaObject<'a>],
    ) -> &'a SchemaUnion<'a> {
        let concrete = members[0];
        let resolve_concrete = concrete_resolver(ctx, move |_| concrete);
        let mut schema_union = SchemaUnion::new(ctx, name, resolve_concrete);
        for member in members {
            schema_union.add_possible_type(ctx, member.name);
        }
        ctx.alloc(schema_union)
    }

    #[test]
    fn union_membership() {
        let ctx = ExecContext::new();
        let abc = test_object(&ctx, "Abc");
        let xyz = test_object(&ctx, "Xyz");
        let zzz = test_object(&ctx, "Zzz");
        let foo = test_union(&ctx, "Foo", &[xyz, zzz]);

        assert!(foo.is_possible_type(xyz));
        assert!(foo.is_possible_type(zzz));
        assert!(!foo.is_possible_type(abc));

        let union_type = SchemaType::Union(foo);
        assert!(union_type.is_instance_of(&union_type));
        assert!(union_type.is_instance_of(&union_type.into_nonnull(&ctx)));
        assert!(!union_type.is_instance_of(&SchemaType::Object(zzz)));

        assert!(SchemaType::Object(xyz).is_instance_of(&union_type));
        assert!(SchemaType::Object(xyz)
            .into_nonnull(&ctx)
            .is_instance_of(&union_type));
        assert!(SchemaType::Object(zzz).is_instance_of(&union_type));
        assert!(!SchemaType::Object(abc).is_instance_of(&union_type));
    }

    #[test]
    fn interface_implementors() {
        let ctx = ExecContext::new();
        let dog = ctx.alloc({
            let mut dog = SchemaObject::new(&ctx, "Dog");
            dog.add_interface(&ctx, "Animal");
            dog
        });
        let cat = test_object(&ctx, "Cat");
        let resolve_concrete = concrete_resolver(&ctx, move |_| dog);
        let animal = ctx.alloc({
            let mut animal = SchemaInterface::new(&ctx, "Animal", resolve_concrete);
            animal.add_possible_type(&ctx, "Dog");
            animal
        });

        assert!(animal.is_sub_type(SchemaType::Object(dog)));
        assert!(!animal.is_sub_type(SchemaType::Object(cat)));

        assert!(SchemaType::Object(dog).is_instance_of(&SchemaType::Interface(animal)));
        assert!(!SchemaType::Object(cat).is_instance_of(&SchemaType::Interface(animal)));
        assert!(!SchemaType::Interface(animal).is_instance_of(&SchemaType::Object(dog)));
    }

    #[test]
    fn wrapping_notation_and_kinds() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let wrapped = SchemaType::Scalar(int)
            .into_nonnull(&ctx)
            .into_list(&ctx)
            .into_nonnull(&ctx);

        assert_eq!(wrapped.print_name(), "[Int!]!");
        assert_eq!(wrapped.kind(), TypeKind::NonNull);
        assert_eq!(wrapped.kind().as_str(), "NON_NULL");
        assert_eq!(wrapped.named_type().print_name(), "Int");
        assert!(wrapped.is_non_null());
        assert!(!wrapped.nullable().is_non_null());
        assert_eq!(wrapped.name(), "Int");
    }

    #[test]
    fn list_conformance_compares_inner_types() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let string = ctx.alloc(SchemaScalar::new("String"));
        let int_list = SchemaType::Scalar(int).into_list(&ctx);
        let string_list = SchemaType::Scalar(string).into_list(&ctx);

        assert!(int_list.is_instance_of(&int_list));
        assert!(!int_list.is_instance_of(&string_list));
        assert!(SchemaType::Scalar(int)
            .into_nonnull(&ctx)
            .into_list(&ctx)
            .is_instance_of(&int_list));
    }

    #[test]
    fn builtin_scalar_predicates() {
        let ctx = ExecContext::new();
        let int = SchemaScalar::new("Int");
        assert!(int.validates(&Value::Int(7.into())));
        assert!(!int.validates(&Value::Int((i64::from(i32::MAX) + 1).into())));
        assert!(!int.validates(&Value::String(StringValue::new(&ctx, "7"))));

        let id = SchemaScalar::new("ID");
        assert!(id.validates(&Value::String(StringValue::new(&ctx, "node:1"))));
        assert!(id.validates(&Value::Int(1.into())));
        assert!(!id.validates(&Value::Boolean(true.into())));

        let float = SchemaScalar::new("Float");
        assert!(float.validates(&Value::Float(1.5.into())));
        assert!(float.validates(&Value::Int(2.into())));
        assert!(!float.validates(&Value::Float(f64::NAN.into())));
    }

    #[test]
    fn custom_scalar_predicates_override_builtins() {
        let ctx = ExecContext::new();
        let validate = scalar_validator(&ctx, |value| {
            matches!(value, Value::Int(x) if x.value % 2 == 0)
        });
        let even = SchemaScalar::with_validator("Even", validate);

        assert!(even.validates(&Value::Int(2.into())));
        assert!(!even.validates(&Value::Int(3.into())));
        assert!(!even.validates(&Value::Boolean(true.into())));

        // Unknown custom scalars without a predicate accept anything non-null.
        let opaque = SchemaScalar::new("JSON");
        assert!(opaque.validates(&Value::Boolean(true.into())));
    }

    #[test]
    fn enum_membership_accepts_strings() {
        let ctx = ExecContext::new();
        let mut episode = SchemaEnum::new(&ctx, "Episode");
        episode.add_value(&ctx, "NEWHOPE");
        episode.add_value(&ctx, "EMPIRE");

        assert!(episode.validates(&Value::Enum("EMPIRE".into())));
        assert!(episode.validates(&Value::String("NEWHOPE".into())));
        assert!(!episode.validates(&Value::String("JEDI".into())));
        assert!(!episode.validates(&Value::Int(0.into())));
    }

    #[test]
    fn schema_registry_and_roots() {
        let ctx = ExecContext::new();
        let query = test_object(&ctx, "Query");
        let int = ctx.alloc(SchemaScalar::new("Int"));

        let mut schema = Schema::new(&ctx);
        assert!(schema.is_empty());

        schema.add_type(SchemaType::Object(query));
        schema.add_type(SchemaType::Scalar(int));
        schema.set_query_type(query);

        assert!(!schema.is_empty());
        assert_eq!(schema.get_type("Int").map(|x| x.kind()), Some(TypeKind::Scalar));
        assert!(schema.get_type("Unknown").is_none());
        assert_eq!(
            schema.get_root_type(OperationKind::Query).map(|x| x.name),
            Some("Query")
        );
        assert!(schema.get_root_type(OperationKind::Mutation).is_none());
    }
}
