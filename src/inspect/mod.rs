//! Introspection of live values
//!
//! Rust has no runtime reflection, so every type that can appear in an object
//! graph describes itself through [`Inspect`]: either as an array-like
//! container of optional references, or as a composite with named slots.
//!
//! - [`Inspect`] - per-type description (shape, display name, identity, size)
//! - [`Shape`] / [`ArrayShape`] / [`Slot`] - what the walker sees
//! - [`Element`] - how field and element storage maps onto optional references
//!
//! Implementations for `String`, `Vec<T>`, `VecDeque<T>`, `[T; N]`, the smart
//! pointers and `serde_json::Value` live in submodules.

mod json;
mod std_impls;

use std::borrow::Cow;
use std::cell::OnceCell;
use std::sync::{LazyLock, OnceLock};

use regex::Regex;

use crate::error::AccessError;

/// Module path segments (`alloc::vec::`) inside a full type name.
static MODULE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[A-Za-z_][A-Za-z0-9_]*::)+").expect("MODULE_PATH regex is invalid")
});

/// Simple display name of `T`, with every module path stripped.
///
/// `alloc::vec::Vec<my_app::Node>` becomes `Vec<Node>`.
pub fn simple_type_name<T: ?Sized>() -> String {
    MODULE_PATH
        .replace_all(std::any::type_name::<T>(), "")
        .into_owned()
}

/// Identity of a live object: its address plus its concrete type.
///
/// Two distinct values that compare equal still have different identities.
/// The type is part of the key because a struct and its first inline field
/// may share an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    addr: usize,
    ty: &'static str,
}

impl ObjectId {
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self {
            addr: (value as *const T).cast::<()>() as usize,
            ty: std::any::type_name::<T>(),
        }
    }
}

/// A value that can describe its own layout to the tree walker.
///
/// Only [`Inspect::shape`] is required; the display name, identity and shallow
/// size have defaults derived from the concrete type.
pub trait Inspect {
    /// Array-like contents or composite slots of this value.
    fn shape(&self) -> Shape<'_>;

    /// Simple display name of the runtime type.
    fn type_name(&self) -> Cow<'static, str> {
        Cow::Owned(simple_type_name::<Self>())
    }

    fn identity(&self) -> ObjectId {
        ObjectId::of(self)
    }

    /// Bytes of this value's own storage, excluding anything it references.
    fn shallow_size(&self) -> u64 {
        std::mem::size_of_val(self) as u64
    }

    /// Whether this value is an in-band null, such as a JSON `null`. Null
    /// values are never walked: they read as an empty slot or element.
    fn is_null(&self) -> bool {
        false
    }

    /// Name used when this type appears as the declared type of a slot.
    fn declared_name() -> Cow<'static, str>
    where
        Self: Sized,
    {
        Cow::Owned(simple_type_name::<Self>())
    }
}

/// Storage that may hold a reference to an inspectable object: a field, or an
/// element of an array-like container.
///
/// Primitive scalars are elements too, but never references.
pub trait Element {
    const PRIMITIVE: bool = false;

    fn declared_name() -> Cow<'static, str>;

    /// The referenced object, or `None` for null and for primitive scalars.
    fn get(&self) -> Option<&dyn Inspect>;
}

impl<T: Inspect> Element for T {
    fn declared_name() -> Cow<'static, str> {
        <T as Inspect>::declared_name()
    }

    fn get(&self) -> Option<&dyn Inspect> {
        (!Inspect::is_null(self)).then_some(self as &dyn Inspect)
    }
}

impl<T: Inspect> Element for Option<T> {
    fn declared_name() -> Cow<'static, str> {
        <T as Inspect>::declared_name()
    }

    fn get(&self) -> Option<&dyn Inspect> {
        self.as_ref().and_then(<T as Element>::get)
    }
}

impl<T: Inspect> Element for OnceCell<T> {
    fn declared_name() -> Cow<'static, str> {
        <T as Inspect>::declared_name()
    }

    fn get(&self) -> Option<&dyn Inspect> {
        OnceCell::get(self).and_then(<T as Element>::get)
    }
}

impl<T: Inspect> Element for OnceLock<T> {
    fn declared_name() -> Cow<'static, str> {
        <T as Inspect>::declared_name()
    }

    fn get(&self) -> Option<&dyn Inspect> {
        OnceLock::get(self).and_then(<T as Element>::get)
    }
}

macro_rules! primitive_elements {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const PRIMITIVE: bool = true;

                fn declared_name() -> Cow<'static, str> {
                    Cow::Borrowed(stringify!($ty))
                }

                fn get(&self) -> Option<&dyn Inspect> {
                    None
                }
            }
        )*
    };
}

primitive_elements!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

/// How the walker sees one object.
pub enum Shape<'a> {
    Array(ArrayShape<'a>),
    Composite(Vec<Slot<'a>>),
}

impl<'a> Shape<'a> {
    pub fn composite(slots: impl IntoIterator<Item = Slot<'a>>) -> Self {
        Shape::Composite(slots.into_iter().collect())
    }

    pub fn array<E: Element + 'a>(items: impl IntoIterator<Item = &'a E>) -> Self {
        Shape::Array(ArrayShape::of(items))
    }

    /// Append the slots of an ancestor type.
    ///
    /// Composition stands in for inheritance: a type embedding its "base"
    /// value passes it here so the base's slots are listed as its own.
    /// Array shapes and non-composite bases are left untouched.
    pub fn inherit<T: Inspect>(self, base: &'a T) -> Self {
        match (self, base.shape()) {
            (Shape::Composite(mut slots), Shape::Composite(inherited)) => {
                slots.extend(inherited);
                Shape::Composite(slots)
            }
            (shape, _) => shape,
        }
    }
}

/// Contents of an array-like container.
///
/// Arrays of primitive scalars carry no elements: their contents are only
/// accounted for in the container's shallow size.
pub struct ArrayShape<'a> {
    primitive: bool,
    elements: Vec<Option<&'a dyn Inspect>>,
}

impl<'a> ArrayShape<'a> {
    pub fn primitive() -> Self {
        Self {
            primitive: true,
            elements: Vec::new(),
        }
    }

    pub fn references(elements: impl IntoIterator<Item = Option<&'a dyn Inspect>>) -> Self {
        Self {
            primitive: false,
            elements: elements.into_iter().collect(),
        }
    }

    pub fn of<E: Element + 'a>(items: impl IntoIterator<Item = &'a E>) -> Self {
        if E::PRIMITIVE {
            Self::primitive()
        } else {
            Self::references(items.into_iter().map(Element::get))
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    pub fn elements(&self) -> &[Option<&'a dyn Inspect>] {
        &self.elements
    }
}

/// One member slot of a composite object.
pub struct Slot<'a> {
    name: Cow<'static, str>,
    declared_type: Cow<'static, str>,
    primitive: bool,
    type_level: bool,
    value: Result<Option<&'a dyn Inspect>, AccessError>,
}

impl<'a> Slot<'a> {
    /// A slot backed by a Rust field; the declared type and primitive flag
    /// come from the field's type.
    pub fn field<E: Element>(name: impl Into<Cow<'static, str>>, value: &'a E) -> Self {
        Self {
            name: name.into(),
            declared_type: <E as Element>::declared_name(),
            primitive: E::PRIMITIVE,
            type_level: false,
            value: Ok(value.get()),
        }
    }

    /// A reference slot with an explicit declared type.
    pub fn typed(
        name: impl Into<Cow<'static, str>>,
        declared_type: impl Into<Cow<'static, str>>,
        value: Option<&'a dyn Inspect>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            primitive: false,
            type_level: false,
            value: Ok(value),
        }
    }

    pub fn primitive(
        name: impl Into<Cow<'static, str>>,
        declared_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            primitive: true,
            type_level: false,
            value: Ok(None),
        }
    }

    /// A slot that exists but cannot be read.
    pub fn inaccessible(
        name: impl Into<Cow<'static, str>>,
        declared_type: impl Into<Cow<'static, str>>,
        error: AccessError,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            primitive: false,
            type_level: false,
            value: Err(error),
        }
    }

    /// Mark this slot as belonging to the type rather than the instance.
    pub fn type_level(mut self) -> Self {
        self.type_level = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    pub fn is_type_level(&self) -> bool {
        self.type_level
    }

    pub fn read(&self) -> Result<Option<&'a dyn Inspect>, AccessError> {
        self.value.clone()
    }
}
