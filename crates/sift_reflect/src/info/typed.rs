use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Automatically implemented by [`#[derive(Reflect)]`](crate::derive::Reflect),
/// allowing access to type information without an instance of the type.
///
/// # Manually Impl
///
/// It is not recommended to implement manually. [`NonGenericTypeInfoCell`] and
/// [`GenericTypeInfoCell`] keep the returned reference `'static`:
///
/// ```
/// use sift_reflect::{
///     Reflect,
///     impls::NonGenericTypeInfoCell,
///     info::{NamedField, StructInfo, TypeInfo, Typed},
///     ops::{ReflectRef, Struct},
/// };
///
/// struct Point { x: i32, y: i32 }
///
/// impl Typed for Point {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Struct(StructInfo::new::<Self>(&[
///             NamedField::new::<i32>("x"),
///             NamedField::new::<i32>("y"),
///         ])))
///     }
/// }
///
/// impl Reflect for Point {
///     fn reflect_type_info(&self) -> &'static TypeInfo { Self::type_info() }
///     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Struct(self) }
///     fn as_any(&self) -> &dyn core::any::Any { self }
/// }
///
/// impl Struct for Point {
///     fn field_len(&self) -> usize { 2 }
///     fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
///         match index { 0 => Some(&self.x), 1 => Some(&self.y), _ => None }
///     }
/// }
///
/// assert_eq!(Point::type_info().as_struct().unwrap().field_len(), 2);
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// A static accessor to compile-time type information.
    ///
    /// Note: Use [`Reflect::reflect_type_info`](crate::Reflect::reflect_type_info)
    /// for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}
