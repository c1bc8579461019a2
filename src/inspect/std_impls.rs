//! `Inspect` for standard library containers and pointers

use std::borrow::Cow;
use std::collections::VecDeque;
use std::mem::size_of;
use std::rc::Rc;
use std::sync::Arc;

use super::{ArrayShape, Element, Inspect, ObjectId, Shape};

fn array_name<E: Element>() -> Cow<'static, str> {
    Cow::Owned(format!("{}[]", <E as Element>::declared_name()))
}

/// Strings are arrays of bytes: a leaf whose contents only count towards
/// the shallow size.
impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(ArrayShape::primitive())
    }

    fn shallow_size(&self) -> u64 {
        (size_of::<String>() + self.capacity()) as u64
    }
}

impl<T: Element> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::array(self.iter())
    }

    fn type_name(&self) -> Cow<'static, str> {
        array_name::<T>()
    }

    fn shallow_size(&self) -> u64 {
        (size_of::<Vec<T>>() + self.capacity() * size_of::<T>()) as u64
    }

    fn declared_name() -> Cow<'static, str> {
        array_name::<T>()
    }
}

impl<T: Element> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::array(self.iter())
    }

    fn type_name(&self) -> Cow<'static, str> {
        array_name::<T>()
    }

    fn shallow_size(&self) -> u64 {
        (size_of::<VecDeque<T>>() + self.capacity() * size_of::<T>()) as u64
    }

    fn declared_name() -> Cow<'static, str> {
        array_name::<T>()
    }
}

impl<T: Element, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::array(self.iter())
    }

    fn type_name(&self) -> Cow<'static, str> {
        array_name::<T>()
    }

    fn declared_name() -> Cow<'static, str> {
        array_name::<T>()
    }
}

// Pointers are transparent: the walker sees the pointee, so every clone of an
// `Rc` resolves to the same identity.
macro_rules! transparent_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Inspect> Inspect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    (**self).shape()
                }

                fn type_name(&self) -> Cow<'static, str> {
                    (**self).type_name()
                }

                fn identity(&self) -> ObjectId {
                    (**self).identity()
                }

                fn shallow_size(&self) -> u64 {
                    (**self).shallow_size()
                }

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn declared_name() -> Cow<'static, str> {
                    <T as Inspect>::declared_name()
                }
            }
        )*
    };
}

transparent_pointer!(Box, Rc, Arc);
