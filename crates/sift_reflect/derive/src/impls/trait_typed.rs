use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` builds the `TypeInfo`; it runs once per concrete type.
pub(crate) fn impl_trait_typed(
    meta: &ReflectMeta,
    type_info_tokens: TokenStream,
) -> syn::Result<TokenStream> {
    let path = meta.sift_reflect_path();
    let trait_typed_ = crate::path::typed_(path);
    let type_info_ = crate::path::type_info_(path);

    let inner_cell_tokens = if meta.is_generic() {
        let info_cell = crate::path::generic_type_info_cell_(path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #type_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #type_info_tokens
            })
        }
    };

    let ident = meta.ident();
    let generics = meta.bounded_generics()?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #trait_typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    })
}
