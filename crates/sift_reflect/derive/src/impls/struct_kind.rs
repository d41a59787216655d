use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Implements `Typed`, `Reflect` and `Struct` for a struct with named fields.
pub(crate) fn impl_struct(data: &ReflectStruct) -> syn::Result<TokenStream> {
    let meta = &data.meta;
    let path = meta.sift_reflect_path();
    let reflect_ = crate::path::reflect_(path);

    let names = data.fields.iter().map(|f| &f.name);
    let types = data.fields.iter().map(|f| f.ty);
    let type_info_tokens = quote! {
        #path::info::TypeInfo::Struct(#path::info::StructInfo::new::<Self>(&[
            #( #path::info::NamedField::new::<#types>(#names), )*
        ]))
    };

    let field_len = data.fields.len();
    let indices = 0..field_len;
    let members = data.fields.iter().map(|f| &f.member);

    let typed_impl = crate::impls::impl_trait_typed(meta, type_info_tokens)?;
    let reflect_impl = crate::impls::impl_trait_reflect(meta, quote!(Struct))?;

    let ident = meta.ident();
    let generics = meta.bounded_generics()?;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #typed_impl

        #reflect_impl

        impl #impl_generics #path::ops::Struct for #ident #ty_generics #where_clause {
            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #( #indices => ::core::option::Option::Some(&self.#members), )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
