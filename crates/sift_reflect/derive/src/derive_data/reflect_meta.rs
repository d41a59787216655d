use syn::{GenericParam, Generics, Ident, parse_quote};

use crate::derive_data::TypeAttributes;

/// Type-level data shared by every kind of derive.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    sift_reflect_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub(crate) fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            attrs,
            ident,
            generics,
            sift_reflect_path: crate::path::sift_reflect(),
        }
    }

    #[inline]
    pub(crate) fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub(crate) fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub(crate) fn sift_reflect_path(&self) -> &syn::Path {
        &self.sift_reflect_path
    }

    /// Returns `true` if the type has type parameters, so a single static cell
    /// is shared by all instantiations.
    pub(crate) fn is_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Generics with a `Reflect + Typed` bound on every type parameter.
    pub(crate) fn bounded_generics(&self) -> syn::Result<Generics> {
        let path = &self.sift_reflect_path;
        let mut generics = self.generics.clone();
        for param in &generics.params {
            if let GenericParam::Lifetime(lifetime) = param {
                return Err(syn::Error::new_spanned(
                    lifetime,
                    "reflected types must be 'static, lifetime parameters are not supported",
                ));
            }
        }
        let bounded: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
        let where_clause = generics.make_where_clause();
        for ident in bounded {
            where_clause
                .predicates
                .push(parse_quote! { #ident: #path::Reflect + #path::info::Typed });
        }
        Ok(generics)
    }
}
