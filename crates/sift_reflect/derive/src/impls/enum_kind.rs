use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectEnum;

/// Implements `Typed`, `Reflect` and `Enum` for a unit-only enum.
pub(crate) fn impl_enum(data: &ReflectEnum) -> syn::Result<TokenStream> {
    let meta = &data.meta;
    let path = meta.sift_reflect_path();

    let names: Vec<&String> = data.variants.iter().map(|(_, name)| name).collect();
    let idents: Vec<&syn::Ident> = data.variants.iter().map(|(ident, _)| *ident).collect();
    let indices = 0..data.variants.len();

    let type_info_tokens = quote! {
        #path::info::TypeInfo::Enum(#path::info::EnumInfo::new::<Self>(&[
            #( #names, )*
        ]))
    };

    let typed_impl = crate::impls::impl_trait_typed(meta, type_info_tokens)?;
    let reflect_impl = crate::impls::impl_trait_reflect(meta, quote!(Enum))?;

    let ident = meta.ident();
    let generics = meta.bounded_generics()?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Uninhabited enums have no arm to match.
    let (index_body, name_body) = if idents.is_empty() {
        (quote!(match *self {}), quote!(match *self {}))
    } else {
        (
            quote! { match self { #( Self::#idents => #indices, )* } },
            quote! { match self { #( Self::#idents => #names, )* } },
        )
    };

    Ok(quote! {
        #typed_impl

        #reflect_impl

        impl #impl_generics #path::ops::Enum for #ident #ty_generics #where_clause {
            #[inline]
            fn variant_index(&self) -> usize {
                #index_body
            }

            #[inline]
            fn variant_name(&self) -> &str {
                #name_body
            }
        }
    })
}
