//! Parsing of `#[reflect(...)]` attributes.

use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;
use crate::derive_data::RenameRule;

/// Attributes placed on the type.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(opaque)]`
    pub(crate) opaque: bool,
    /// `#[reflect(number)]`, opaque types only.
    pub(crate) number: Option<proc_macro2::Span>,
    /// `#[reflect(rename_all = "...")]`
    pub(crate) rename_all: Option<RenameRule>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("opaque") {
                    this.opaque = true;
                    Ok(())
                } else if meta.path.is_ident("number") {
                    this.number = Some(meta.path.span());
                    Ok(())
                } else if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    this.rename_all = Some(RenameRule::parse(&lit)?);
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported type attribute, expected `opaque`, `number` or `rename_all`",
                    ))
                }
            })?;
        }
        if let Some(span) = this.number
            && !this.opaque
        {
            return Err(syn::Error::new(span, "`number` requires `#[reflect(opaque)]`"));
        }
        Ok(this)
    }
}

/// Attributes placed on a field or an enum variant.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(rename = "...")]`
    pub(crate) rename: Option<LitStr>,
    /// `#[reflect(skip)]`
    pub(crate) skip: bool,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    this.skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    this.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `rename` or `skip`"))
                }
            })?;
        }
        Ok(this)
    }

    /// The reflected name: an explicit `rename`, else `rule` applied to `ident`.
    pub(crate) fn reflected_name(&self, ident: &syn::Ident, rule: Option<RenameRule>) -> String {
        if let Some(rename) = &self.rename {
            return rename.value();
        }
        let ident = ident.to_string();
        match rule {
            Some(rule) => rule.apply(&ident),
            None => ident.strip_prefix("r#").map(String::from).unwrap_or(ident),
        }
    }
}
