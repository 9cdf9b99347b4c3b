use crate::schema::*;

/// Trait for a visitor over the closed set of schema type kinds.
///
/// A [`SchemaType`] dispatches itself to exactly one of these eight methods via
/// [`SchemaType::accept`]. All methods are required: when a ninth kind is ever added to the
/// enumeration, every visitor in and outside this crate fails to compile until it states how it
/// handles the new kind. Combinations a visitor cannot meaningfully support (say, an input
/// object appearing where output values are classified) must be explicit sentinel
/// implementations rather than silent fallthrough.
///
/// The `List` and `NotNull` methods receive the wrapper's inner type so implementations can
/// recurse into it with `inner.accept(self)`.
pub trait TypeVisitor<'a>: Sized {
    type Output;

    /// Called when an object type is visited.
    fn visit_object(&mut self, object: &'a SchemaObject<'a>) -> Self::Output;

    /// Called when an interface type is visited.
    fn visit_interface(&mut self, interface: &'a SchemaInterface<'a>) -> Self::Output;

    /// Called when a union type is visited.
    fn visit_union(&mut self, schema_union: &'a SchemaUnion<'a>) -> Self::Output;

    /// Called when an input object type is visited.
    fn visit_input_object(&mut self, input_object: &'a SchemaInputObject<'a>) -> Self::Output;

    /// Called when a scalar type is visited.
    fn visit_scalar(&mut self, scalar: &'a SchemaScalar<'a>) -> Self::Output;

    /// Called when an enum type is visited.
    fn visit_enum(&mut self, schema_enum: &'a SchemaEnum<'a>) -> Self::Output;

    /// Called when a list wrapper is visited, with the list's inner type.
    fn visit_list(&mut self, inner: &'a SchemaType<'a>) -> Self::Output;

    /// Called when a non-null wrapper is visited, with the wrapped inner type.
    fn visit_not_null(&mut self, inner: &'a SchemaType<'a>) -> Self::Output;
}

impl<'a> SchemaType<'a> {
    /// Dispatches this type to the matching visit method of the passed visitor.
    ///
    /// The match below is the only place in the crate that branches on the kind of a type being
    /// visited; everything downstream acts through the [`TypeVisitor`] contract.
    pub fn accept<V: TypeVisitor<'a>>(&self, visitor: &mut V) -> V::Output {
        match self {
            SchemaType::Object(object) => visitor.visit_object(object),
            SchemaType::Interface(interface) => visitor.visit_interface(interface),
            SchemaType::Union(schema_union) => visitor.visit_union(schema_union),
            SchemaType::InputObject(input_object) => visitor.visit_input_object(input_object),
            SchemaType::Scalar(scalar) => visitor.visit_scalar(scalar),
            SchemaType::Enum(schema_enum) => visitor.visit_enum(schema_enum),
            SchemaType::List(inner) => visitor.visit_list(inner),
            SchemaType::NotNull(inner) => visitor.visit_not_null(inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ExecContext;

    #[derive(Default)]
    struct CollectKinds {
        kinds: Vec<TypeKind>,
    }

    impl<'a> TypeVisitor<'a> for CollectKinds {
        type Output = ();

        fn visit_object(&mut self, _object: &'a SchemaObject<'a>) {
            self.kinds.push(TypeKind::Object);
        }

        fn visit_interface(&mut self, _interface: &'a SchemaInterface<'a>) {
            self.kinds.push(TypeKind::Interface);
        }

        fn visit_union(&mut self, _schema_union: &'a SchemaUnion<'a>) {
            self.kinds.push(TypeKind::Union);
        }

        fn visit_input_object(&mut self, _input_object: &'a SchemaInputObject<'a>) {
            self.kinds.push(TypeKind::InputObject);
        }

        fn visit_scalar(&mut self, _scalar: &'a SchemaScalar<'a>) {
            self.kinds.push(TypeKind::Scalar);
        }

        fn visit_enum(&mut self, _schema_enum: &'a SchemaEnum<'a>) {
            self.kinds.push(TypeKind::Enum);
        }

        fn visit_list(&mut self, inner: &'a SchemaType<'a>) {
            self.kinds.push(TypeKind::List);
            inner.accept(self);
        }

        fn visit_not_null(&mut self, inner: &'a SchemaType<'a>) {
            self.kinds.push(TypeKind::NonNull);
            inner.accept(self);
        }
    }

    #[test]
    fn wrappers_recurse_into_inner_types() {
        let ctx = ExecContext::new();
        let int = ctx.alloc(SchemaScalar::new("Int"));
        let of_type = SchemaType::Scalar(int)
            .into_nonnull(&ctx)
            .into_list(&ctx)
            .into_nonnull(&ctx);

        let mut visitor = CollectKinds::default();
        of_type.accept(&mut visitor);

        assert_eq!(
            visitor.kinds,
            vec![
                TypeKind::NonNull,
                TypeKind::List,
                TypeKind::NonNull,
                TypeKind::Scalar
            ]
        );
    }
}
