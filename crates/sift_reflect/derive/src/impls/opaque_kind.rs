use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Implements `Typed`, `Reflect` and `Opaque` for a type reflected through `Display`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> syn::Result<TokenStream> {
    let path = meta.sift_reflect_path();
    let rename_all = meta.attrs().rename_all;
    if rename_all.is_some() {
        return Err(syn::Error::new_spanned(
            meta.ident(),
            "`rename_all` has no effect on opaque types",
        ));
    }

    let numeric = meta.attrs().number.is_some();
    let type_info_tokens = quote! {
        #path::info::TypeInfo::Opaque(
            #path::info::OpaqueInfo::new::<Self>().with_numeric(#numeric)
        )
    };

    let typed_impl = crate::impls::impl_trait_typed(meta, type_info_tokens)?;
    let reflect_impl = crate::impls::impl_trait_reflect(meta, quote!(Opaque))?;

    let ident = meta.ident();
    let generics = meta.bounded_generics()?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #typed_impl

        #reflect_impl

        impl #impl_generics #path::ops::Opaque for #ident #ty_generics #where_clause {
            #[inline]
            fn opaque_fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    })
}
