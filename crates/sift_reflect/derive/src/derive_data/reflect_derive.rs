use syn::{Data, DeriveInput, Fields, Member, Type};

use crate::derive_data::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A field that takes part in reflection.
pub(crate) struct StructField<'a> {
    pub(crate) member: Member,
    pub(crate) ty: &'a Type,
    pub(crate) name: String,
}

pub(crate) struct ReflectStruct<'a> {
    pub(crate) meta: ReflectMeta<'a>,
    pub(crate) fields: Vec<StructField<'a>>,
}

/// A unit-only enum: `(variant ident, reflected name)` in declaration order.
pub(crate) struct ReflectEnum<'a> {
    pub(crate) meta: ReflectMeta<'a>,
    pub(crate) variants: Vec<(&'a syn::Ident, String)>,
}

pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub(crate) fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let rule = attrs.rename_all;
        let opaque = attrs.opaque;
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        if opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => {
                let named = match &data.fields {
                    Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
                    Fields::Unit => Vec::new(),
                    Fields::Unnamed(fields) => {
                        return Err(syn::Error::new_spanned(
                            fields,
                            "tuple structs cannot be reflected as structs, use `#[reflect(opaque)]`",
                        ));
                    }
                };

                let mut fields = Vec::with_capacity(named.len());
                for field in named {
                    let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                    if field_attrs.skip {
                        continue;
                    }
                    let Some(ident) = &field.ident else {
                        continue;
                    };
                    fields.push(StructField {
                        member: Member::Named(ident.clone()),
                        ty: &field.ty,
                        name: field_attrs.reflected_name(ident, rule),
                    });
                }

                Ok(Self::Struct(ReflectStruct { meta, fields }))
            }
            Data::Enum(data) => {
                let mut variants = Vec::with_capacity(data.variants.len());
                for variant in &data.variants {
                    if !matches!(variant.fields, Fields::Unit) {
                        return Err(syn::Error::new_spanned(
                            variant,
                            "only unit variants can be reflected, use `#[reflect(opaque)]`",
                        ));
                    }
                    let variant_attrs = FieldAttributes::parse_attrs(&variant.attrs)?;
                    if variant_attrs.skip {
                        return Err(syn::Error::new_spanned(
                            variant,
                            "enum variants cannot be skipped",
                        ));
                    }
                    variants.push((
                        &variant.ident,
                        variant_attrs.reflected_name(&variant.ident, rule),
                    ));
                }
                Ok(Self::Enum(ReflectEnum { meta, variants }))
            }
            Data::Union(data) => Err(syn::Error::new_spanned(
                data.union_token,
                "unions cannot be reflected",
            )),
        }
    }
}
