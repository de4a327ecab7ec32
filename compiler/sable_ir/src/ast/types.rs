//! Written type expressions (annotations, port types).

/// Type expression, generic over the type constructor representation `V`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type<V> {
    /// Function type: `a -> b`
    Lambda(Box<Type<V>>, Box<Type<V>>),
    /// Type variable: `a`
    Var(String),
    /// Type constructor: `Int`, `Maybe`
    Con(V),
    /// Applied constructor: `Maybe Int`
    App(Box<Type<V>>, Vec<Type<V>>),
    /// Record type: `{ x : Int }` or `{ r | x : Int }`
    Record(Vec<(String, Type<V>)>, Option<Box<Type<V>>>),
}

impl<V> Type<V> {
    /// Convert the constructor names of this type.
    #[must_use]
    pub fn map_vars<W>(self, f: &mut impl FnMut(V) -> W) -> Type<W> {
        match self {
            Type::Lambda(arg, result) => {
                let arg = arg.map_vars(f);
                Type::Lambda(Box::new(arg), Box::new(result.map_vars(f)))
            }
            Type::Var(name) => Type::Var(name),
            Type::Con(ctor) => Type::Con(f(ctor)),
            Type::App(ctor, args) => {
                let ctor = ctor.map_vars(f);
                Type::App(
                    Box::new(ctor),
                    args.into_iter().map(|arg| arg.map_vars(f)).collect(),
                )
            }
            Type::Record(fields, ext) => {
                let fields = fields
                    .into_iter()
                    .map(|(name, ty)| (name, ty.map_vars(f)))
                    .collect();
                Type::Record(fields, ext.map(|ext| Box::new(ext.map_vars(f))))
            }
        }
    }
}
