use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`.
///
/// `variant` is the `ReflectRef` variant the value is exposed as.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    variant: TokenStream,
) -> syn::Result<TokenStream> {
    let path = meta.sift_reflect_path();
    let reflect_ = crate::path::reflect_(path);
    let typed_ = crate::path::typed_(path);
    let type_info_ = crate::path::type_info_(path);
    let reflect_ref_ = crate::path::reflect_ref_(path);
    let any_ = crate::path::any_();

    let ident = meta.ident();
    let generics = meta.bounded_generics()?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_type_info(&self) -> &'static #type_info_ {
                <Self as #typed_>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#variant(self)
            }

            #[inline]
            fn as_any(&self) -> &dyn #any_ {
                self
            }
        }
    })
}
