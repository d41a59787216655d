//! Code generation for `#[derive(Reflect)]`.

// -----------------------------------------------------------------------------
// Modules

mod enum_kind;
mod opaque_kind;
mod struct_kind;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectDerive;

pub(crate) use trait_reflect::impl_trait_reflect;
pub(crate) use trait_typed::impl_trait_typed;

pub(crate) fn reflect_impls(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let impls = match ReflectDerive::from_input(ast)? {
        ReflectDerive::Struct(data) => struct_kind::impl_struct(&data)?,
        ReflectDerive::Enum(data) => enum_kind::impl_enum(&data)?,
        ReflectDerive::Opaque(meta) => opaque_kind::impl_opaque(&meta)?,
    };

    Ok(quote! {
        const _: () = {
            #impls
        };
    })
}
