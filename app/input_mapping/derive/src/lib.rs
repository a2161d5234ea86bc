#[macro_use]
extern crate quote;
extern crate proc_macro;
extern crate syn;

use proc_macro2::TokenStream;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, Meta,
    Type, Variant,
};

/// Derives `InputMappingT` for an enum.
///
/// Unit variants are bound to a key with `#[key = 'c']` or `#[key = "KeyCode::Up"]`
/// and described with `#[description = "..."]`. Without `#[key]` the variant binds to the
/// lowercase first letter of its name. A variant holding exactly one unnamed field is
/// treated as a nested mapping and its entries are merged into the parent.
#[proc_macro_derive(InputMapping, attributes(key, description))]
pub fn derive_mapping(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match MappingInfo::from_derive_input(&input) {
        Ok(info) => proc_macro::TokenStream::from(info.generate_impl(&input)),
        Err(err) => proc_macro::TokenStream::from(err.into_compile_error()),
    }
}

struct MappingInfo {
    variants: Vec<VariantMapping>,
}

enum VariantMapping {
    Key {
        name: Ident,
        key: TokenStream,
        description: String,
    },
    Nested {
        name: Ident,
        ty: Type,
    },
}

impl MappingInfo {
    fn from_derive_input(input: &DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "InputMapping can only be derived for enums",
            ));
        };

        let variants = data
            .variants
            .iter()
            .map(VariantMapping::from_variant)
            .collect::<syn::Result<_>>()?;

        Ok(Self { variants })
    }

    fn generate_impl(&self, input: &DeriveInput) -> TokenStream {
        let name = &input.ident;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

        let (entries, matchers): (Vec<TokenStream>, Vec<TokenStream>) = self
            .variants
            .iter()
            .map(|variant| {
                (
                    variant.generate_mapping_entry(),
                    variant.generate_event_matcher(),
                )
            })
            .unzip();

        quote! {
            impl #impl_generics ::input_mapping_common::InputMappingT for #name #ty_generics #where_clause {
                fn get_mapping() -> ::input_mapping_common::InputMapping {
                    #[allow(unused_mut)]
                    let mut mapping = ::input_mapping_common::InputMapping {
                        mapping: ::std::vec::Vec::new(),
                    };

                    #(#entries)*

                    mapping
                }

                fn map_event(
                    event: ::input_mapping_common::Event,
                ) -> ::std::option::Option<Self> {
                    #[allow(unused_variables)]
                    let key = ::input_mapping_common::pressed_key(&event);

                    #(#matchers)*

                    ::std::option::Option::None
                }
            }
        }
    }
}

impl VariantMapping {
    fn from_variant(variant: &Variant) -> syn::Result<Self> {
        let name = variant.ident.clone();

        match &variant.fields {
            Fields::Unit => {
                let mut key = None;
                let mut description = String::new();

                for attr in &variant.attrs {
                    if attr.path().is_ident("key") {
                        key = Some(parse_key(attr)?);
                    } else if attr.path().is_ident("description") {
                        description = parse_description(attr)?;
                    }
                }

                let key = match key {
                    Some(key) => key,
                    None => default_key(&name)?,
                };

                Ok(Self::Key {
                    name,
                    key,
                    description,
                })
            }
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => Ok(Self::Nested {
                name,
                ty: fields.unnamed[0].ty.clone(),
            }),
            _ => Err(syn::Error::new_spanned(
                variant,
                "expected a unit variant or a variant wrapping a single mapped enum",
            )),
        }
    }

    fn generate_mapping_entry(&self) -> TokenStream {
        match self {
            Self::Key {
                key, description, ..
            } => quote! {
                mapping.mapping.push(::input_mapping_common::MappingEntry {
                    key: #key,
                    description: ::std::string::String::from(#description),
                });
            },
            Self::Nested { ty, .. } => quote! {
                mapping = mapping.merge(
                    <#ty as ::input_mapping_common::InputMappingT>::get_mapping()
                );
            },
        }
    }

    fn generate_event_matcher(&self) -> TokenStream {
        match self {
            Self::Key { name, key, .. } => quote! {
                if key == ::std::option::Option::Some(#key) {
                    return ::std::option::Option::Some(Self::#name);
                }
            },
            Self::Nested { name, ty } => quote! {
                if let ::std::option::Option::Some(inner) =
                    <#ty as ::input_mapping_common::InputMappingT>::map_event(event.clone())
                {
                    return ::std::option::Option::Some(Self::#name(inner));
                }
            },
        }
    }
}

fn attribute_value(attr: &Attribute) -> syn::Result<&Expr> {
    match &attr.meta {
        Meta::NameValue(name_value) => Ok(&name_value.value),
        other => Err(syn::Error::new_spanned(
            other,
            "expected an attribute of the form #[name = value]",
        )),
    }
}

fn parse_key(attr: &Attribute) -> syn::Result<TokenStream> {
    match attribute_value(attr)? {
        Expr::Lit(ExprLit {
            lit: Lit::Char(char),
            ..
        }) => Ok(quote! { ::input_mapping_common::KeyCode::Char(#char) }),
        Expr::Lit(ExprLit {
            lit: Lit::Str(expr),
            ..
        }) => {
            let expr: Expr = expr.parse()?;
            Ok(quote! {
                {
                    #[allow(unused_imports)]
                    use ::input_mapping_common::KeyCode;
                    #expr
                }
            })
        }
        other => Err(syn::Error::new_spanned(
            other,
            "expected a char literal or a string holding a KeyCode expression",
        )),
    }
}

fn parse_description(attr: &Attribute) -> syn::Result<String> {
    match attribute_value(attr)? {
        Expr::Lit(ExprLit {
            lit: Lit::Str(description),
            ..
        }) => Ok(description.value()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}

fn default_key(name: &Ident) -> syn::Result<TokenStream> {
    let first = name
        .to_string()
        .chars()
        .next()
        .map(|char| char.to_ascii_lowercase())
        .ok_or_else(|| syn::Error::new_spanned(name, "variant name is empty"))?;

    Ok(quote! { ::input_mapping_common::KeyCode::Char(#first) })
}
